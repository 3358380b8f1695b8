//! # bs-curves: Black-Scholes Value Curves
//!
//! `bs-curves` prices a European call-style option with the closed-form
//! Black-Scholes formula over a linearly spaced grid of spot prices, once per
//! maturity, and hands the resulting value curves to an SVG chart or a CSV file.
//!
//! ## Core Features
//!
//! - **Pricer**: [`cumulative_normal`] and [`price`], with domain errors instead of NaN
//! - **Spot grid**: [`SpotGrid`], `low + i * delta` for `i < floor((high - low) / delta)`
//! - **Curves**: [`evaluate_curve`] for one maturity, [`sweep_maturities`] for a ladder
//! - **Output**: SVG line chart with a maturity legend and CSV export
//! - **Configuration**: TOML-loadable [`CurveConfig`] with presets
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_curves::{sweep_maturities, ContractParams, SpotGrid};
//!
//! let grid = SpotGrid::new(90.0, 110.0, 1.0)?;
//! let contract = ContractParams::new(100.0, 0.0, 0.05)?;
//! let curves = sweep_maturities(&grid, &contract, &[4.0, 3.0, 2.0, 1.0])?;
//!
//! assert_eq!(curves.len(), 4);
//! assert_eq!(curves[0].label, "4");
//! assert_eq!(curves[0].curve.points.len(), 20);
//! # Ok::<(), bs_curves::PricingError>(())
//! ```
//!
//! ## Pricing Formula
//!
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2 = (ln(S/K) + (r - σ²/2)·T) / (σ·√T)
//! V  = N(d1)·S - N(d2)·K
//! ```
//!
//! The strike leg is not discounted; with a zero rate this is the textbook call price.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod grid;
pub mod models;
pub mod output;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{ContractConfig, CurveConfig, GridConfig, MaturityConfig, OutputConfig};
pub use error::{PricingError, PricingResult};
pub use grid::{SpotGrid, MAX_GRID_SAMPLES};
pub use models::bs::{cumulative_normal, price, ContractParams};
pub use models::curve::{
    descending_maturities, evaluate_curve, maturity_label, sweep_maturities, LabeledCurve,
    PriceCurve,
};
pub use output::{render_svg, render_svg_string, write_csv, write_csv_file, ChartOptions};

// ================================================================================================
// CONVENIENCE ENTRY POINT
// ================================================================================================

/// Validate a run configuration and sweep every configured maturity.
///
/// # Errors
///
/// * `anyhow::Error` if the grid, contract or maturity sections are invalid
/// * `anyhow::Error` wrapping [`PricingError`] if any point fails to price
///
/// # Example
///
/// ```rust
/// use bs_curves::{price_curves, CurveConfig};
///
/// let curves = price_curves(&CurveConfig::default())?;
/// let labels: Vec<&str> = curves.iter().map(|c| c.label.as_str()).collect();
/// assert_eq!(labels, ["4", "3", "2", "1"]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price_curves(config: &CurveConfig) -> anyhow::Result<Vec<LabeledCurve>> {
    let (grid, contract, maturities) = config.validate()?;
    let curves = sweep_maturities(&grid, &contract, &maturities)?;

    tracing::info!(
        curves = curves.len(),
        samples = grid.len(),
        strike = contract.strike,
        volatility = contract.volatility,
        "priced value curves"
    );

    Ok(curves)
}
