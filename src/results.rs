//! Result structures for series analysis.
//!
//! The diagnostic battery for one trajectory lands in [`SeriesStatistics`];
//! an orchestrated run over several coefficients produces one
//! [`CoefficientRun`] per coefficient, collected in insertion order by
//! [`RunResults`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptive and time-series diagnostic statistics for one trajectory.
///
/// Derived purely from the trajectory; never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeriesStatistics {
    /// Arithmetic mean over the full trajectory
    pub mean: f64,
    /// Population variance (N denominator)
    pub variance: f64,
    /// Third standardized central moment
    pub skewness: f64,
    /// Fourth standardized central moment minus 3 (Fisher definition)
    pub excess_kurtosis: f64,
    /// Sample autocorrelations for lags `0..=num_lags`; lag 0 is 1
    pub autocorrelation: Vec<f64>,
    /// Partial autocorrelations for lags `0..=num_lags`; lag 0 is 1
    pub partial_autocorrelation: Vec<f64>,
    /// Augmented Dickey-Fuller t-statistic
    pub adf_statistic: f64,
    /// ADF p-value for the unit-root null, in `[0, 1]`
    pub adf_p_value: f64,
    /// Whether the ADF test rejects the unit root at the 5% level
    pub is_stationary: bool,
    /// Ljung-Box Q statistic at the configured lag
    pub ljung_box_statistic: f64,
    /// Ljung-Box p-value for the white-noise null, in `[0, 1]`
    pub ljung_box_p_value: f64,
}

/// One coefficient's complete pipeline output: the generated trajectory,
/// its smoothed counterpart, and its diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoefficientRun {
    /// Display label, e.g. `"α = 0.8"`
    pub label: String,
    /// Persistence coefficient the trajectory was generated with
    pub alpha: f64,
    /// Generated trajectory
    pub series: Vec<f64>,
    /// Moving-average-smoothed trajectory (valid mode, so shorter than
    /// `series` by `window_size - 1`)
    pub smoothed: Vec<f64>,
    /// Diagnostic statistics for `series`
    pub statistics: SeriesStatistics,
}

/// Ordered collection of per-coefficient results.
///
/// Preserves the insertion order of the configured coefficients, so
/// repeated runs present identically. Label lookup is linear; the
/// coefficient battery is small by construction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResults {
    runs: Vec<CoefficientRun>,
}

impl RunResults {
    pub(crate) fn from_runs(runs: Vec<CoefficientRun>) -> Self {
        Self { runs }
    }

    /// Labels in configuration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|run| run.label.as_str())
    }

    /// Look up one coefficient's results by label.
    pub fn get(&self, label: &str) -> Option<&CoefficientRun> {
        self.runs.iter().find(|run| run.label == label)
    }

    /// Iterate runs in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, CoefficientRun> {
        self.runs.iter()
    }

    /// Number of coefficient runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the run produced no results (empty coefficient list).
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl<'a> IntoIterator for &'a RunResults {
    type Item = &'a CoefficientRun;
    type IntoIter = std::slice::Iter<'a, CoefficientRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

impl IntoIterator for RunResults {
    type Item = CoefficientRun;
    type IntoIter = std::vec::IntoIter<CoefficientRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}
