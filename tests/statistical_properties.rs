//! Property tests for the kernel operations: determinism, length laws,
//! boundary values, and the stability contrast between autoregressive
//! regimes.

use assert_approx_eq::assert_approx_eq;
use markov_series::{
    analyze_series, calculate_autocorrelations, calculate_variance, generate_markov_chain,
    moving_average, smoothed_offset, GeneratorConfig, MarkovAnalysisError, SeededRng,
};

fn config(length: usize, seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        length,
        seed: Some(seed),
    }
}

#[test]
fn test_generation_determinism_across_parameters() {
    for &(n, alpha, seed) in &[
        (10, 0.0, 1u64),
        (100, 0.8, 42),
        (250, -0.5, 7),
        (64, 1.2, 99),
    ] {
        let a = generate_markov_chain(&config(n, seed), alpha).unwrap();
        let b = generate_markov_chain(&config(n, seed), alpha).unwrap();
        assert_eq!(a, b, "divergence for n={}, alpha={}, seed={}", n, alpha, seed);
    }
}

#[test]
fn test_length_laws() {
    let series = generate_markov_chain(&config(100, 3), 0.5).unwrap();
    assert_eq!(series.len(), 100);
    for window in [1, 4, 25, 100] {
        assert_eq!(
            moving_average(&series, window).unwrap().len(),
            series.len() - window + 1
        );
    }
}

#[test]
fn test_identity_smoothing() {
    let series = generate_markov_chain(&config(50, 5), 0.3).unwrap();
    let smoothed = moving_average(&series, 1).unwrap();
    assert_eq!(smoothed, series);
    assert_eq!(smoothed_offset(1), 0);
}

#[test]
fn test_autocorrelation_boundary() {
    let series = generate_markov_chain(&config(80, 13), 0.6).unwrap();
    let acf = calculate_autocorrelations(&series, 9).unwrap();
    assert_eq!(acf[0], 1.0);
    for &r in &acf {
        assert!(r.abs() <= 1.0 + 1e-9, "autocorrelation out of range: {}", r);
    }
}

#[test]
fn test_pure_noise_matches_reference_draws() {
    // α = 0 removes the autoregressive contribution, so the trajectory is
    // exactly the seeded generator's standard-normal stream.
    let series = generate_markov_chain(&config(5, 42), 0.0).unwrap();
    let mut reference = SeededRng::with_seed(42);
    let expected: Vec<f64> = (0..5).map(|_| reference.standard_normal()).collect();
    assert_eq!(series, expected);
}

#[test]
fn test_stability_boundary() {
    // Same seed, same innovations: only the coefficient differs, and the
    // explosive regime's variance must dwarf the mean-reverting one's.
    let explosive = generate_markov_chain(&config(200, 42), 1.2).unwrap();
    let mean_reverting = generate_markov_chain(&config(200, 42), 0.2).unwrap();
    let ratio = calculate_variance(&explosive) / calculate_variance(&mean_reverting);
    assert!(ratio > 1e6, "variance ratio was only {:e}", ratio);
}

#[test]
fn test_precondition_enforcement() {
    let series = generate_markov_chain(&config(20, 2), 0.4).unwrap();
    assert!(matches!(
        analyze_series(&series, 20),
        Err(MarkovAnalysisError::InsufficientData { .. })
    ));
    assert!(matches!(
        moving_average(&series, 21),
        Err(MarkovAnalysisError::InvalidParameter { .. })
    ));
}

#[test]
fn test_mean_reverting_statistics_are_well_behaved() {
    let series = generate_markov_chain(&config(500, 42), 0.5).unwrap();
    let stats = analyze_series(&series, 22).unwrap();

    // AR(1) with α = 0.5 at n = 500: theoretical lag-1 autocorrelation 0.5.
    assert_approx_eq!(stats.autocorrelation[1], 0.5, 0.15);
    // PACF lag 1 equals ACF lag 1 by construction.
    assert_approx_eq!(
        stats.partial_autocorrelation[1],
        stats.autocorrelation[1],
        1e-12
    );
    // Stationary by a wide margin at this sample size.
    assert!(stats.is_stationary);
    // Theoretical variance 1/(1-α²) = 4/3.
    assert!((stats.variance - 4.0 / 3.0).abs() < 0.5);
}

#[test]
fn test_smoothing_reduces_variance_of_noise() {
    let series = generate_markov_chain(&config(400, 17), 0.0).unwrap();
    let smoothed = moving_average(&series, 8).unwrap();
    // Averaging 8 i.i.d. draws shrinks the variance by roughly 8×.
    assert!(calculate_variance(&smoothed) < 0.5 * calculate_variance(&series));
}
