//! The diagnostic battery for a single trajectory.
//!
//! [`analyze_series`] computes descriptive moments, autocorrelation
//! structure, and the stationarity/white-noise tests in one pass, assembling
//! a [`SeriesStatistics`] record. The computation is pure and deterministic
//! given its input; no random state is involved.

use crate::errors::{validate_all_finite, MarkovAnalysisError, MarkovResult};
use crate::math_utils::{
    calculate_autocorrelations, calculate_excess_kurtosis, calculate_mean,
    calculate_partial_autocorrelations, calculate_skewness, calculate_variance,
};
use crate::results::SeriesStatistics;
use crate::statistical_tests::{augmented_dickey_fuller, ljung_box_test};

/// Significance level at which the ADF test declares a series stationary.
pub const STATIONARITY_SIGNIFICANCE: f64 = 0.05;

/// Compute the full diagnostic battery for one trajectory.
///
/// The engine defends its own preconditions: the lag count must be at least
/// 1 and strictly below the series length, every value must be finite, and
/// the series must not be constant (variance-normalized statistics would be
/// undefined). The embedded unit-root test additionally needs at least
/// [`crate::statistical_tests::MIN_ADF_OBSERVATIONS`] points.
///
/// # Arguments
/// * `data` - Trajectory to analyze
/// * `num_lags` - Largest lag for the autocorrelation sequences and the
///   Ljung-Box test
///
/// # Returns
/// * `Ok(SeriesStatistics)` on success
/// * `Err(MarkovAnalysisError::InvalidParameter)` if `num_lags == 0`
/// * `Err(MarkovAnalysisError::InsufficientData)` if `num_lags >= data.len()`
///   or the series is too short for the unit-root regression
/// * `Err(MarkovAnalysisError::NumericalError)` for degenerate input
pub fn analyze_series(data: &[f64], num_lags: usize) -> MarkovResult<SeriesStatistics> {
    if num_lags == 0 {
        return Err(MarkovAnalysisError::InvalidParameter {
            parameter: "num_lags".to_string(),
            value: 0.0,
            constraint: "must be >= 1".to_string(),
        });
    }
    let n = data.len();
    if num_lags >= n {
        return Err(MarkovAnalysisError::InsufficientData {
            required: num_lags + 1,
            actual: n,
        });
    }
    validate_all_finite(data, "analyze_series")?;

    let mean = calculate_mean(data);
    let variance = calculate_variance(data);
    let skewness = calculate_skewness(data)?;
    let excess_kurtosis = calculate_excess_kurtosis(data)?;
    let autocorrelation = calculate_autocorrelations(data, num_lags)?;
    let partial_autocorrelation = calculate_partial_autocorrelations(data, num_lags)?;
    let adf = augmented_dickey_fuller(data)?;
    let ljung_box = ljung_box_test(data, num_lags)?;

    Ok(SeriesStatistics {
        mean,
        variance,
        skewness,
        excess_kurtosis,
        autocorrelation,
        partial_autocorrelation,
        adf_statistic: adf.test_statistic,
        adf_p_value: adf.p_value,
        is_stationary: adf.p_value < STATIONARITY_SIGNIFICANCE,
        ljung_box_statistic: ljung_box.test_statistic,
        ljung_box_p_value: ljung_box.p_value,
    })
}
