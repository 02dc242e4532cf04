//! # Markov Series
//!
//! Synthetic first-order autoregressive (AR(1)) time-series generation with
//! moving-average smoothing and a fixed battery of statistical diagnostics.
//!
//! The crate is a pure computational kernel: it generates trajectories of
//! `x_t = α·x_{t-1} + ε_t` for a configurable set of persistence
//! coefficients, smooths them with a valid-mode moving average, and
//! summarizes each with descriptive moments, autocorrelation and partial
//! autocorrelation sequences, an augmented Dickey-Fuller stationarity test,
//! and a Ljung-Box white-noise test. Presentation (plotting, input widgets,
//! localized copy) is the consumer's concern.
//!
//! ## Key Properties
//!
//! - **Reproducibility**: every generation call owns an explicit seedable
//!   generator; equal seeds give bit-identical trajectories regardless of
//!   call order or prior history
//! - **Strong typing**: diagnostics land in [`SeriesStatistics`] records,
//!   orchestrated runs in insertion-ordered [`RunResults`]
//! - **Defended preconditions**: undersized inputs and degenerate series
//!   fail with typed errors instead of producing garbage statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use markov_series::{AnalysisConfig, MarkovChainAnalyzer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = MarkovChainAnalyzer::with_config(AnalysisConfig {
//!         num_points: 200,
//!         window_size: 5,
//!         num_lags: 14,
//!         seed: Some(42),
//!         coefficients: vec![0.0, 0.8, 1.2],
//!     })?;
//!
//!     for run in &analyzer.run_all()? {
//!         println!(
//!             "{}: mean = {:.4}, variance = {:.4}, stationary = {}",
//!             run.label, run.statistics.mean, run.statistics.variance,
//!             run.statistics.is_stationary,
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! [`MarkovChainAnalyzer`] orchestrates the three kernel operations
//! ([`generate_markov_chain`], [`moving_average`], [`analyze_series`]),
//! which are also exposed directly for specialized use.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod analyzer;
pub mod config;
pub mod errors;
pub mod generators;
pub mod linear_algebra;
pub mod math_utils;
pub mod results;
pub mod rng;
pub mod smoothing;
pub mod statistics;

// Re-exports for convenience - main public API
pub use analyzer::MarkovChainAnalyzer;
pub use config::{coefficient_label, AnalysisConfig, DEFAULT_COEFFICIENTS};
pub use errors::{MarkovAnalysisError, MarkovResult};
pub use generators::{generate_markov_chain, GeneratorConfig};
pub use results::{CoefficientRun, RunResults, SeriesStatistics};
pub use rng::SeededRng;
pub use smoothing::{moving_average, smoothed_offset};
pub use statistical_tests::{
    augmented_dickey_fuller, ljung_box_test, TestResult, MIN_ADF_OBSERVATIONS,
};
pub use statistics::{analyze_series, STATIONARITY_SIGNIFICANCE};

// Mathematical utilities exports
pub use math_utils::{
    calculate_autocorrelations, calculate_excess_kurtosis, calculate_mean,
    calculate_partial_autocorrelations, calculate_skewness, calculate_variance,
};
