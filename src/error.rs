//! Error type shared by the pricing model and the spot grid.

/// Errors raised when pricing inputs or grid bounds are outside their domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// Spot, strike, volatility or maturity is not a finite positive number.
    #[error("{name} must be a finite positive number, got {value}")]
    NonPositiveInput { name: &'static str, value: f64 },

    /// The risk-free rate may be negative or zero but must be finite.
    #[error("rate must be finite, got {0}")]
    InvalidRate(f64),

    /// Grid bounds or step that cannot produce a bounded, ordered grid.
    #[error("invalid grid: low={low}, high={high}, delta={delta}")]
    InvalidGrid { low: f64, high: f64, delta: f64 },
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;

/// Reject anything that is not strictly positive and finite (NaN included).
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::NonPositiveInput { name, value })
    }
}
