use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::grid::SpotGrid;
use crate::models::bs::ContractParams;
use crate::models::curve::descending_maturities;

/// Spot grid bounds and step
#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_low")]
    pub low: f64,
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_delta")]
    pub delta: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
            delta: default_delta(),
        }
    }
}

/// Contract terms held fixed across every curve
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    #[serde(default = "default_strike")]
    pub strike: f64,
    /// Risk-free rate, may be zero or negative
    #[serde(default)]
    pub rate: f64,
    #[serde(default = "default_volatility")]
    pub volatility: f64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            strike: default_strike(),
            rate: 0.0,
            volatility: default_volatility(),
        }
    }
}

/// Which maturities to sweep.
///
/// When `values` is set it is used verbatim (in order); otherwise the sweep runs
/// from `horizon - 1` down to `1`.
#[derive(Debug, Clone, Deserialize)]
pub struct MaturityConfig {
    #[serde(default = "default_horizon")]
    pub horizon: u32,
    #[serde(default)]
    pub values: Option<Vec<f64>>,
}

impl Default for MaturityConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            values: None,
        }
    }
}

impl MaturityConfig {
    pub fn resolve(&self) -> Vec<f64> {
        match &self.values {
            Some(values) => values.clone(),
            None => descending_maturities(self.horizon),
        }
    }
}

/// Where and how the curves are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Set to `false` to skip the chart
    #[serde(default = "default_svg")]
    pub svg: bool,
    #[serde(default = "default_svg_path")]
    pub svg_path: PathBuf,
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_caption")]
    pub caption: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg: default_svg(),
            svg_path: default_svg_path(),
            csv_path: None,
            width: default_width(),
            height: default_height(),
            caption: default_caption(),
        }
    }
}

/// Complete run configuration, loadable from TOML.
///
/// ```toml
/// [grid]
/// low = 90.0
/// high = 110.0
/// delta = 1.0
///
/// [contract]
/// strike = 100.0
/// volatility = 0.05
///
/// [maturities]
/// horizon = 5
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurveConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub contract: ContractConfig,
    #[serde(default)]
    pub maturities: MaturityConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl CurveConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse curve configuration")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Build the grid and contract terms, checking every maturity up front so a
    /// bad file fails before any pricing is done.
    pub fn validate(&self) -> Result<(SpotGrid, ContractParams, Vec<f64>)> {
        let grid = SpotGrid::new(self.grid.low, self.grid.high, self.grid.delta)
            .context("invalid [grid] section")?;
        let contract = ContractParams::new(
            self.contract.strike,
            self.contract.rate,
            self.contract.volatility,
        )
        .context("invalid [contract] section")?;

        let maturities = self.maturities.resolve();
        for &t in &maturities {
            crate::error::ensure_positive("maturity", t).context("invalid [maturities] section")?;
        }

        Ok((grid, contract, maturities))
    }

    /// The classic value-curve setup: at-the-money strike, flat
    /// rate, 5% volatility and maturities 4, 3, 2, 1.
    pub fn at_the_money() -> Self {
        Self::default()
    }

    /// Wider spot range and a more volatile underlying, useful to see the
    /// curves converge to the payoff at the short end.
    pub fn wide() -> Self {
        Self {
            grid: GridConfig {
                low: 50.0,
                high: 150.0,
                delta: 0.5,
            },
            contract: ContractConfig {
                volatility: 0.2,
                ..ContractConfig::default()
            },
            maturities: MaturityConfig {
                horizon: 6,
                values: None,
            },
            output: OutputConfig::default(),
        }
    }
}

fn default_low() -> f64 {
    90.0
}

fn default_high() -> f64 {
    110.0
}

fn default_delta() -> f64 {
    1.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_volatility() -> f64 {
    0.05
}

fn default_horizon() -> u32 {
    5
}

fn default_svg() -> bool {
    true
}

fn default_svg_path() -> PathBuf {
    PathBuf::from("value_curves.svg")
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}

fn default_caption() -> String {
    "Black-Scholes value by maturity".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = CurveConfig::default();
        let (grid, contract, maturities) = config.validate().unwrap();

        assert_eq!(grid.len(), 20);
        assert_eq!(contract.strike, 100.0);
        assert_eq!(contract.rate, 0.0);
        assert_eq!(contract.volatility, 0.05);
        assert_eq!(maturities, vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = CurveConfig::from_toml_str(
            r#"
            [contract]
            volatility = 0.25

            [maturities]
            values = [0.5, 0.25]
            "#,
        )
        .unwrap();

        assert_eq!(config.grid.low, 90.0);
        assert_eq!(config.contract.strike, 100.0);
        assert_eq!(config.contract.volatility, 0.25);
        assert_eq!(config.maturities.resolve(), vec![0.5, 0.25]);
    }

    #[test]
    fn test_chart_can_be_switched_off() {
        let config = CurveConfig::from_toml_str("[output]\nsvg = false").unwrap();
        assert!(!config.output.svg);
        assert_eq!(config.output.svg_path, PathBuf::from("value_curves.svg"));

        let config = CurveConfig::from_toml_str("[output]\nsvg_path = \"out.svg\"").unwrap();
        assert!(config.output.svg);
        assert_eq!(config.output.svg_path, PathBuf::from("out.svg"));
    }

    #[test]
    fn test_oversized_grid_is_a_config_error() {
        let config =
            CurveConfig::from_toml_str("[grid]\nlow = 0.0\nhigh = 1e300\ndelta = 1e-300").unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("invalid [grid] section"));

        let mut config = CurveConfig::default();
        config.grid.delta = 1e-9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_sections() {
        let mut config = CurveConfig::default();
        config.grid.delta = 0.0;
        assert!(config.validate().is_err());

        let mut config = CurveConfig::default();
        config.contract.volatility = -0.1;
        assert!(config.validate().is_err());

        let mut config = CurveConfig::default();
        config.maturities.values = Some(vec![1.0, 0.0]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_types_fail_to_parse() {
        assert!(CurveConfig::from_toml_str("[grid]\nlow = \"ninety\"").is_err());
    }
}
