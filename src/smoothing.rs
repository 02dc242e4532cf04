//! Moving-average smoothing.
//!
//! Valid-mode convolution with a uniform kernel: each output value averages
//! one full window of the input, and no edge padding is applied, so the
//! output is shorter than the input by `window_size - 1`.

use crate::errors::{MarkovAnalysisError, MarkovResult};

/// Smooth a series with an unweighted moving average.
///
/// Output index `i` is the mean of `series[i..i + window_size]`; the result
/// has length `series.len() - window_size + 1`. A window of 1 is the
/// identity transform.
///
/// # Arguments
/// * `series` - Input series
/// * `window_size` - Averaging window; must satisfy `1 ≤ window_size ≤ series.len()`
///
/// # Returns
/// * `Ok(smoothed)` on success
/// * `Err(MarkovAnalysisError::InvalidParameter)` if the window is zero or
///   longer than the series
pub fn moving_average(series: &[f64], window_size: usize) -> MarkovResult<Vec<f64>> {
    if window_size == 0 {
        return Err(MarkovAnalysisError::InvalidParameter {
            parameter: "window_size".to_string(),
            value: 0.0,
            constraint: "must be >= 1".to_string(),
        });
    }
    if window_size > series.len() {
        return Err(MarkovAnalysisError::InvalidParameter {
            parameter: "window_size".to_string(),
            value: window_size as f64,
            constraint: format!("must not exceed series length {}", series.len()),
        });
    }

    let scale = 1.0 / window_size as f64;
    Ok(series
        .windows(window_size)
        .map(|window| window.iter().sum::<f64>() * scale)
        .collect())
}

/// Index offset of the smoothed series relative to the original.
///
/// When plotting both series on one axis, smoothed value `i` lines up with
/// original index `i + smoothed_offset(window_size)`, i.e. the right edge of
/// its averaging window.
pub fn smoothed_offset(window_size: usize) -> usize {
    window_size.saturating_sub(1)
}
