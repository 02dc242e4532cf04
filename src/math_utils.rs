//! Mathematical utility functions for time-series diagnostics.
//!
//! This module provides the descriptive-statistics foundation used by the
//! analysis engine: central moments, sample autocorrelations, and partial
//! autocorrelations via the Durbin-Levinson recursion.

use crate::errors::{MarkovAnalysisError, MarkovResult};

/// Variance sums below this threshold are treated as degenerate.
pub(crate) const ZERO_VARIANCE_TOLERANCE: f64 = 1e-12;

/// Arithmetic mean over the full series.
///
/// Returns NaN for empty input.
pub fn calculate_mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (N denominator) over the full series.
///
/// Returns NaN for empty input.
pub fn calculate_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    data.iter()
        .map(|x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / n
}

/// Skewness: third standardized central moment.
///
/// Uses the population (biased) moment estimators, so a perfectly symmetric
/// sample reports exactly zero.
///
/// # Returns
/// * `Err(MarkovAnalysisError::NumericalError)` for degenerate (constant) input
pub fn calculate_skewness(data: &[f64]) -> MarkovResult<f64> {
    let (m2, m3, _) = central_moments(data)?;
    Ok(m3 / m2.powf(1.5))
}

/// Excess kurtosis: fourth standardized central moment minus 3.
///
/// Fisher's definition, so a normal distribution reports zero.
///
/// # Returns
/// * `Err(MarkovAnalysisError::NumericalError)` for degenerate (constant) input
pub fn calculate_excess_kurtosis(data: &[f64]) -> MarkovResult<f64> {
    let (m2, _, m4) = central_moments(data)?;
    Ok(m4 / (m2 * m2) - 3.0)
}

/// Second, third, and fourth central moments with a degeneracy guard.
fn central_moments(data: &[f64]) -> MarkovResult<(f64, f64, f64)> {
    if data.is_empty() {
        return Err(MarkovAnalysisError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for x in data {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    m2 /= n;
    m3 /= n;
    m4 /= n;

    if m2 < ZERO_VARIANCE_TOLERANCE {
        return Err(MarkovAnalysisError::NumericalError {
            reason: "series variance is zero, standardized moments are undefined".to_string(),
            operation: Some("central_moments".to_string()),
        });
    }
    Ok((m2, m3, m4))
}

/// Sample autocorrelations for lags `0..=max_lag`.
///
/// Uses the normalized sample autocovariance
/// `r_k = Σ_{t<n-k} (x_t - x̄)(x_{t+k} - x̄) / Σ_t (x_t - x̄)²`,
/// so `r_0 = 1` by construction. This is the full-sum normalization used by
/// standard time-series packages; it keeps the estimated sequence positive
/// semi-definite, which the Durbin-Levinson recursion relies on.
///
/// # Arguments
/// * `data` - Time series data
/// * `max_lag` - Largest lag to compute; must be `< data.len()`
///
/// # Returns
/// * `Ok(acf)` with `acf.len() == max_lag + 1`
/// * `Err(MarkovAnalysisError::InsufficientData)` if `max_lag >= data.len()`
/// * `Err(MarkovAnalysisError::NumericalError)` for constant input
pub fn calculate_autocorrelations(data: &[f64], max_lag: usize) -> MarkovResult<Vec<f64>> {
    let n = data.len();
    if n <= max_lag {
        return Err(MarkovAnalysisError::InsufficientData {
            required: max_lag + 1,
            actual: n,
        });
    }

    let mean = data.iter().sum::<f64>() / n as f64;
    let denominator: f64 = data
        .iter()
        .map(|x| {
            let diff = x - mean;
            diff * diff
        })
        .sum();

    if denominator < ZERO_VARIANCE_TOLERANCE {
        return Err(MarkovAnalysisError::NumericalError {
            reason: "series variance is zero, autocorrelation is undefined".to_string(),
            operation: Some("calculate_autocorrelations".to_string()),
        });
    }

    let mut autocorrs = Vec::with_capacity(max_lag + 1);
    autocorrs.push(1.0);
    for lag in 1..=max_lag {
        let mut covariance = 0.0;
        for t in 0..(n - lag) {
            covariance += (data[t] - mean) * (data[t + lag] - mean);
        }
        autocorrs.push(covariance / denominator);
    }

    Ok(autocorrs)
}

/// Partial autocorrelations for lags `0..=max_lag`.
///
/// Computed with the Durbin-Levinson recursion over the sample
/// autocorrelation sequence: lag k is the partial correlation between `x_t`
/// and `x_{t-k}` after regressing out the intermediate lags. Lag 0 is 1 by
/// convention.
///
/// # Returns
/// * `Ok(pacf)` with `pacf.len() == max_lag + 1`
/// * `Err(MarkovAnalysisError::NumericalError)` if the innovation variance
///   collapses during the recursion (near-perfectly-predictable series)
pub fn calculate_partial_autocorrelations(data: &[f64], max_lag: usize) -> MarkovResult<Vec<f64>> {
    let acf = calculate_autocorrelations(data, max_lag)?;

    let mut pacf = Vec::with_capacity(max_lag + 1);
    pacf.push(1.0);
    if max_lag == 0 {
        return Ok(pacf);
    }

    // phi[j] holds the order-k AR coefficient φ_{k,j}; prev holds order k-1.
    let mut phi = vec![0.0; max_lag + 1];
    let mut prev = vec![0.0; max_lag + 1];
    phi[1] = acf[1];
    pacf.push(acf[1]);
    let mut innovation = 1.0 - acf[1] * acf[1];

    for k in 2..=max_lag {
        if innovation.abs() < ZERO_VARIANCE_TOLERANCE {
            return Err(MarkovAnalysisError::NumericalError {
                reason: format!("innovation variance collapsed at lag {}", k),
                operation: Some("calculate_partial_autocorrelations".to_string()),
            });
        }
        prev.copy_from_slice(&phi);

        let mut numerator = acf[k];
        for j in 1..k {
            numerator -= prev[j] * acf[k - j];
        }
        let phi_kk = numerator / innovation;

        phi[k] = phi_kk;
        for j in 1..k {
            phi[j] = prev[j] - phi_kk * prev[k - j];
        }
        innovation *= 1.0 - phi_kk * phi_kk;
        pacf.push(phi_kk);
    }

    Ok(pacf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_mean_and_population_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_approx_eq!(calculate_mean(&data), 5.0, 1e-12);
        // Σ(x - 5)² = 32, divided by N = 8
        assert_approx_eq!(calculate_variance(&data), 4.0, 1e-12);
    }

    #[test]
    fn test_variance_single_point_is_zero() {
        assert_approx_eq!(calculate_variance(&[3.5]), 0.0, 1e-15);
    }

    #[test]
    fn test_skewness_symmetric_sample() {
        let skew = calculate_skewness(&[1.0, 2.0, 3.0]).unwrap();
        assert_approx_eq!(skew, 0.0, 1e-12);
    }

    #[test]
    fn test_excess_kurtosis_two_point_sample() {
        // For {-1, -1, 1, 1}: m2 = 1, m4 = 1, excess kurtosis = -2
        let kurt = calculate_excess_kurtosis(&[-1.0, -1.0, 1.0, 1.0]).unwrap();
        assert_approx_eq!(kurt, -2.0, 1e-12);
    }

    #[test]
    fn test_moments_reject_constant_series() {
        assert!(matches!(
            calculate_skewness(&[5.0; 16]),
            Err(MarkovAnalysisError::NumericalError { .. })
        ));
        assert!(matches!(
            calculate_excess_kurtosis(&[5.0; 16]),
            Err(MarkovAnalysisError::NumericalError { .. })
        ));
    }

    #[test]
    fn test_autocorrelation_known_values() {
        // For 1..=5: mean 3, Σ(x-3)² = 10,
        // lag 1 numerator = 4, lag 2 numerator = -1
        let acf = calculate_autocorrelations(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
        assert_eq!(acf.len(), 3);
        assert_approx_eq!(acf[0], 1.0, 1e-15);
        assert_approx_eq!(acf[1], 0.4, 1e-12);
        assert_approx_eq!(acf[2], -0.1, 1e-12);
    }

    #[test]
    fn test_autocorrelation_lag_bound() {
        let data = [1.0, 2.0, 3.0];
        assert!(matches!(
            calculate_autocorrelations(&data, 3),
            Err(MarkovAnalysisError::InsufficientData {
                required: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_autocorrelation_rejects_constant_series() {
        assert!(matches!(
            calculate_autocorrelations(&[2.0; 10], 3),
            Err(MarkovAnalysisError::NumericalError { .. })
        ));
    }

    #[test]
    fn test_partial_autocorrelation_durbin_levinson() {
        // ρ1 = 0.4, ρ2 = -0.1 for 1..=5, so
        // φ11 = 0.4, φ22 = (ρ2 - φ11 ρ1) / (1 - ρ1²) = -0.26 / 0.84
        let pacf = calculate_partial_autocorrelations(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
        assert_eq!(pacf.len(), 3);
        assert_approx_eq!(pacf[0], 1.0, 1e-15);
        assert_approx_eq!(pacf[1], 0.4, 1e-12);
        assert_approx_eq!(pacf[2], -0.26 / 0.84, 1e-12);
    }

    #[test]
    fn test_partial_autocorrelation_lag_zero_only() {
        let pacf = calculate_partial_autocorrelations(&[1.0, 2.0, 4.0], 0).unwrap();
        assert_eq!(pacf, vec![1.0]);
    }
}
