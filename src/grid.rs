// src/grid.rs

//! Linearly spaced spot-price grid.
//!
//! A grid is defined by a lower bound, an upper bound and a step. It holds
//! `n = floor((high - low) / delta)` samples `low + i * delta` for `i` in
//! `0..n`, so the upper bound itself is never sampled: `low=90, high=110,
//! delta=1` yields `90, 91, ..., 109`.
//!
//! The sample count is capped at [`MAX_GRID_SAMPLES`]; a finer step is an
//! [`PricingError::InvalidGrid`] rather than an allocation failure.

use crate::error::{PricingError, PricingResult};

/// Largest number of samples a grid may hold.
pub const MAX_GRID_SAMPLES: usize = 10_000_000;

/// Immutable ordered sequence of spot samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotGrid {
    low: f64,
    high: f64,
    delta: f64,
    samples: Vec<f64>,
}

impl SpotGrid {
    /// Build the grid, rejecting non-finite bounds, a non-positive step or
    /// `high < low`, or a step so fine that the grid would exceed
    /// [`MAX_GRID_SAMPLES`]. `high == low` is accepted and gives an empty grid.
    pub fn new(low: f64, high: f64, delta: f64) -> PricingResult<Self> {
        let invalid = || PricingError::InvalidGrid { low, high, delta };

        let valid = low.is_finite() && high.is_finite() && delta.is_finite();
        if !valid || delta <= 0.0 || high < low {
            return Err(invalid());
        }

        // high - low can overflow to infinity even with finite bounds
        let count = ((high - low) / delta).floor();
        if !count.is_finite() || count > MAX_GRID_SAMPLES as f64 {
            return Err(invalid());
        }

        let n = count as usize;
        let samples = (0..n).map(|i| low + i as f64 * delta).collect();

        Ok(Self {
            low,
            high,
            delta,
            samples,
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}
