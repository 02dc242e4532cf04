//! Error types and validation functions for time-series analysis.
//!
//! All kernel operations report failures through [`MarkovAnalysisError`].
//! Violated preconditions surface as [`MarkovAnalysisError::InvalidParameter`]
//! or [`MarkovAnalysisError::InsufficientData`]; numerical degeneracies
//! (zero-variance series, singular regression matrices) surface as
//! [`MarkovAnalysisError::NumericalError`]. The kernel performs no logging
//! and no recovery of its own; errors propagate synchronously to the caller.

use thiserror::Error;

/// Error types for series generation and analysis operations.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum MarkovAnalysisError {
    /// Insufficient data for the requested computation.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Minimum required data points
        required: usize,
        /// Actual number of data points provided
        actual: usize,
    },

    /// Invalid parameter value for a generation or analysis operation.
    #[error("Invalid parameter: {parameter} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value provided
        value: f64,
        /// Valid range or constraint description
        constraint: String,
    },

    /// Numerical computation error due to degeneracy or instability.
    #[error("Numerical computation failed: {reason}")]
    NumericalError {
        /// Detailed reason for the numerical failure
        reason: String,
        /// Operation that failed, when known
        operation: Option<String>,
    },

    /// A single coefficient's pipeline failed during an orchestrated run.
    #[error("Analysis failed for coefficient {label}")]
    CoefficientAnalysisFailed {
        /// Display label of the failing coefficient
        label: String,
        /// Underlying failure
        #[source]
        source: Box<MarkovAnalysisError>,
    },
}

/// Result type for series analysis operations.
///
/// Convenience alias for operations that may fail with [`MarkovAnalysisError`].
pub type MarkovResult<T> = Result<T, MarkovAnalysisError>;

/// Validates that data has sufficient length for an operation.
///
/// # Arguments
/// * `data` - Input time series data
/// * `min_required` - Minimum number of data points required
/// * `operation` - Name of the operation requiring the data
///
/// # Returns
/// * `Ok(())` if data length is sufficient
/// * `Err(MarkovAnalysisError::InsufficientData)` if data is too short
pub fn validate_data_length(
    data: &[f64],
    min_required: usize,
    _operation: &str,
) -> MarkovResult<()> {
    if data.len() < min_required {
        Err(MarkovAnalysisError::InsufficientData {
            required: min_required,
            actual: data.len(),
        })
    } else {
        Ok(())
    }
}

/// Validates that all values in a slice are finite.
///
/// Returns immediately on the first non-finite value.
///
/// # Arguments
/// * `data` - Array of values to validate
/// * `name` - Array name for error reporting
///
/// # Returns
/// * `Ok(())` if all values are finite
/// * `Err(MarkovAnalysisError::NumericalError)` if any value is infinite or NaN
pub fn validate_all_finite(data: &[f64], name: &str) -> MarkovResult<()> {
    if let Some((i, &value)) = data.iter().enumerate().find(|(_, &v)| !v.is_finite()) {
        return Err(MarkovAnalysisError::NumericalError {
            reason: format!("{} contains non-finite value at index {}: {}", name, i, value),
            operation: None,
        });
    }
    Ok(())
}
