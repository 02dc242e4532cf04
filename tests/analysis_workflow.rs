//! End-to-end workflow tests: a full orchestrated run over the default
//! coefficient battery, checked for ordering, shape, and reproducibility.

use markov_series::{coefficient_label, AnalysisConfig, MarkovChainAnalyzer};

#[test]
fn test_default_run_covers_every_coefficient() {
    let analyzer = MarkovChainAnalyzer::new();
    let results = analyzer.run_all().unwrap();

    assert_eq!(results.len(), analyzer.config().coefficients.len());
    for &alpha in &analyzer.config().coefficients {
        let run = results
            .get(&coefficient_label(alpha))
            .unwrap_or_else(|| panic!("missing run for α = {}", alpha));
        assert_eq!(run.alpha, alpha);
    }
    assert!(results.get("α = 7").is_none());
}

#[test]
fn test_run_output_shapes() {
    let config = AnalysisConfig::default();
    let analyzer = MarkovChainAnalyzer::with_config(config.clone()).unwrap();
    let results = analyzer.run_all().unwrap();

    for run in &results {
        assert_eq!(run.series.len(), config.num_points);
        assert_eq!(
            run.smoothed.len(),
            config.num_points - config.window_size + 1
        );
        assert_eq!(run.statistics.autocorrelation.len(), config.num_lags + 1);
        assert_eq!(
            run.statistics.partial_autocorrelation.len(),
            config.num_lags + 1
        );
        assert_eq!(run.statistics.autocorrelation[0], 1.0);
        assert_eq!(run.statistics.partial_autocorrelation[0], 1.0);
        assert!((0.0..=1.0).contains(&run.statistics.adf_p_value));
        assert!((0.0..=1.0).contains(&run.statistics.ljung_box_p_value));
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let analyzer = MarkovChainAnalyzer::new();
    let first = analyzer.run_all().unwrap();
    let second = analyzer.run_all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unseeded_runs_differ() {
    let config = AnalysisConfig {
        seed: None,
        coefficients: vec![0.5],
        ..AnalysisConfig::default()
    };
    let analyzer = MarkovChainAnalyzer::with_config(config).unwrap();
    let first = analyzer.run_all().unwrap();
    let second = analyzer.run_all().unwrap();
    let a = &first.get("α = 0.5").unwrap().series;
    let b = &second.get("α = 0.5").unwrap().series;
    assert_ne!(a, b);
}

#[test]
fn test_regime_diagnostics_separate_the_battery() {
    // One fixed noise realization across all coefficients: the white-noise
    // case must look stationary and uncorrelated next to the persistent and
    // explosive cases.
    let config = AnalysisConfig {
        num_points: 400,
        num_lags: 20,
        ..AnalysisConfig::default()
    };
    let analyzer = MarkovChainAnalyzer::with_config(config).unwrap();
    let results = analyzer.run_all().unwrap();

    let noise = &results.get("α = 0").unwrap().statistics;
    let persistent = &results.get("α = 0.8").unwrap().statistics;
    let walk = &results.get("α = 1").unwrap().statistics;
    let explosive = &results.get("α = 1.2").unwrap().statistics;

    assert!(noise.is_stationary);
    assert!(noise.adf_p_value < walk.adf_p_value);
    assert!(!explosive.is_stationary);

    // Strong persistence leaves no doubt for the Ljung-Box test.
    assert!(persistent.ljung_box_p_value < 1e-6);
    assert!(noise.ljung_box_p_value > persistent.ljung_box_p_value);

    // The explosive regime dominates every stationary one in scale.
    assert!(explosive.variance > 1e6 * persistent.variance);

    // Persistence shows up as a large lag-1 autocorrelation.
    assert!(persistent.autocorrelation[1] > 0.6);
    assert!(noise.autocorrelation[1].abs() < 0.2);
}
