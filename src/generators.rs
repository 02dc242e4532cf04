//! Synthetic first-order autoregressive series generation.
//!
//! The generator produces one trajectory of the AR(1) recurrence
//! `x_t = α·x_{t-1} + ε_t` with standard-normal innovations. The persistence
//! coefficient is deliberately unrestricted: `|α| < 1` yields a
//! mean-reverting (stationary) series, `α = 1` a random walk, and `|α| > 1`
//! an explosive one. The downstream analysis exists to compare those
//! regimes.

use crate::errors::{MarkovAnalysisError, MarkovResult};
use crate::rng::SeededRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for series generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// Length of the generated time series
    pub length: usize,
    /// Random seed for reproducible generation; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 100,
            seed: None,
        }
    }
}

/// Generate one AR(1) trajectory.
///
/// Seeds a fresh generator per call, draws `x_0` from a standard normal, and
/// iterates `x_t = alpha·x_{t-1} + ε_t` with independent standard-normal
/// innovations. Two calls with equal `(length, seed, alpha)` produce
/// bit-identical trajectories.
///
/// # Arguments
/// * `config` - Series length and seed
/// * `alpha` - Persistence coefficient; any finite value is accepted
///
/// # Returns
/// * `Ok(series)` with `series.len() == config.length`
/// * `Err(MarkovAnalysisError::InvalidParameter)` if `length == 0` or
///   `alpha` is not finite
pub fn generate_markov_chain(config: &GeneratorConfig, alpha: f64) -> MarkovResult<Vec<f64>> {
    if config.length == 0 {
        return Err(MarkovAnalysisError::InvalidParameter {
            parameter: "length".to_string(),
            value: 0.0,
            constraint: "must be >= 1".to_string(),
        });
    }
    if !alpha.is_finite() {
        return Err(MarkovAnalysisError::InvalidParameter {
            parameter: "alpha".to_string(),
            value: alpha,
            constraint: "must be finite".to_string(),
        });
    }

    let mut rng = SeededRng::from_seed_opt(config.seed);
    let mut series = Vec::with_capacity(config.length);
    series.push(rng.standard_normal());
    for t in 1..config.length {
        let value = alpha * series[t - 1] + rng.standard_normal();
        series.push(value);
    }

    Ok(series)
}
