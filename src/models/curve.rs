// src/models/curve.rs

//! Price curves: the pricer mapped over a spot grid, one curve per maturity.

use crate::error::PricingResult;
use crate::grid::SpotGrid;
use crate::models::bs::ContractParams;

/// Ordered `(spot, price)` pairs for one fixed maturity.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCurve {
    pub maturity: f64,
    pub points: Vec<(f64, f64)>,
}

impl PriceCurve {
    pub fn spots(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(s, _)| s)
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A curve paired with the legend label it is displayed under.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledCurve {
    pub label: String,
    pub curve: PriceCurve,
}

/// Price every grid sample at a single maturity, preserving grid order.
///
/// Fails on the first sample that violates the pricing domain; no partial
/// curve is returned.
pub fn evaluate_curve(
    grid: &SpotGrid,
    contract: &ContractParams,
    maturity: f64,
) -> PricingResult<PriceCurve> {
    let points = grid
        .iter()
        .map(|spot| contract.price_at(spot, maturity).map(|p| (spot, p)))
        .collect::<PricingResult<Vec<_>>>()?;

    Ok(PriceCurve { maturity, points })
}

/// Evaluate one curve per maturity, in the order the maturities are given.
pub fn sweep_maturities(
    grid: &SpotGrid,
    contract: &ContractParams,
    maturities: &[f64],
) -> PricingResult<Vec<LabeledCurve>> {
    if grid.is_empty() {
        tracing::warn!(
            low = grid.low(),
            high = grid.high(),
            delta = grid.delta(),
            "spot grid is empty, curves will have no points"
        );
    }

    maturities
        .iter()
        .map(|&maturity| -> PricingResult<LabeledCurve> {
            let curve = evaluate_curve(grid, contract, maturity)?;
            tracing::debug!(maturity, samples = curve.len(), "evaluated price curve");
            Ok(LabeledCurve {
                label: maturity_label(maturity),
                curve,
            })
        })
        .collect()
}

/// Maturities `horizon - 1` down to `1`, e.g. `[4, 3, 2, 1]` for a horizon of 5.
pub fn descending_maturities(horizon: u32) -> Vec<f64> {
    (1..horizon).rev().map(f64::from).collect()
}

/// Legend label: whole maturities print without a fractional part.
pub fn maturity_label(maturity: f64) -> String {
    if maturity.fract() == 0.0 && maturity.abs() < 1e15 {
        format!("{}", maturity as i64)
    } else {
        format!("{}", maturity)
    }
}
