#![allow(dead_code)] // Each test binary uses a different subset of helpers

use bs_curves::{ContractParams, LabeledCurve, SpotGrid};

/// Default spot grid: 90, 91, ..., 109
pub fn default_grid() -> SpotGrid {
    SpotGrid::new(90.0, 110.0, 1.0).expect("default grid is valid")
}

/// At-the-money strike, zero rate, 5% volatility
pub fn default_contract() -> ContractParams {
    ContractParams::new(100.0, 0.0, 0.05).expect("default contract is valid")
}

/// Evenly spaced points on [from, to] with the given number of intervals
pub fn linspace(from: f64, to: f64, intervals: usize) -> Vec<f64> {
    (0..=intervals)
        .map(|i| from + (to - from) * i as f64 / intervals as f64)
        .collect()
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {} within {}, got {} (diff {:e})",
        what,
        expected,
        tol,
        actual,
        (actual - expected).abs()
    );
}

pub fn labels(curves: &[LabeledCurve]) -> Vec<&str> {
    curves.iter().map(|c| c.label.as_str()).collect()
}
