//! # Analysis Configuration
//!
//! Configuration for an orchestrated analysis run: how many points to
//! generate, how to smooth, how many lags to diagnose, and which persistence
//! coefficients to sweep. Defaults mirror a small interactive exploration:
//! 100 points, a 5-point window, 10 lags, seed 42, and a coefficient battery
//! spanning white noise, mean-reverting, oscillating, random-walk, and
//! explosive regimes.

use crate::errors::{MarkovAnalysisError, MarkovResult};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default persistence coefficients evaluated by an analysis run.
///
/// Ordered from pure noise through increasingly persistent stationary
/// regimes to the random walk, then the negatively-correlated
/// (oscillating) and explosive cases.
pub const DEFAULT_COEFFICIENTS: [f64; 8] = [0.0, 0.2, 0.5, 0.8, 1.0, -0.5, -0.8, 1.2];

/// Configuration for a full analysis run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisConfig {
    /// Number of points per generated trajectory
    pub num_points: usize,
    /// Moving-average window; must satisfy `1 ≤ window_size ≤ num_points`
    pub window_size: usize,
    /// Autocorrelation lag count; must satisfy `1 ≤ num_lags < num_points`.
    /// A value near `√num_points` is a sensible choice.
    pub num_lags: usize,
    /// Seed reused for every coefficient, isolating the effect of the
    /// persistence coefficient while holding the innovation stream fixed;
    /// `None` makes each run non-deterministic
    pub seed: Option<u64>,
    /// Persistence coefficients to evaluate, in presentation order
    pub coefficients: Vec<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_points: 100,
            window_size: 5,
            num_lags: 10,
            seed: Some(42),
            coefficients: DEFAULT_COEFFICIENTS.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Check the configuration's internal invariants.
    ///
    /// # Returns
    /// * `Ok(())` if every bound holds
    /// * `Err(MarkovAnalysisError::InvalidParameter)` naming the first
    ///   violated constraint
    pub fn validate(&self) -> MarkovResult<()> {
        if self.num_points < 1 {
            return Err(MarkovAnalysisError::InvalidParameter {
                parameter: "num_points".to_string(),
                value: self.num_points as f64,
                constraint: "must be >= 1".to_string(),
            });
        }
        if self.window_size < 1 || self.window_size > self.num_points {
            return Err(MarkovAnalysisError::InvalidParameter {
                parameter: "window_size".to_string(),
                value: self.window_size as f64,
                constraint: format!("must be in 1..={}", self.num_points),
            });
        }
        if self.num_lags < 1 || self.num_lags >= self.num_points {
            return Err(MarkovAnalysisError::InvalidParameter {
                parameter: "num_lags".to_string(),
                value: self.num_lags as f64,
                constraint: format!("must be in 1..{}", self.num_points),
            });
        }
        if let Some(&alpha) = self.coefficients.iter().find(|a| !a.is_finite()) {
            return Err(MarkovAnalysisError::InvalidParameter {
                parameter: "coefficients".to_string(),
                value: alpha,
                constraint: "all coefficients must be finite".to_string(),
            });
        }
        Ok(())
    }
}

/// Display label for one persistence coefficient, e.g. `"α = 0.8"`.
///
/// These labels key the orchestrator's result mapping.
pub fn coefficient_label(alpha: f64) -> String {
    format!("α = {}", alpha)
}
