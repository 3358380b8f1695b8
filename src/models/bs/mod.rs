// A small closed-form Black-Scholes pricer used to draw value curves.
// Only the call-style payoff is provided and the strike leg is not discounted:
// the value is N(d1) * S - N(d2) * K with the rate entering through d1 and d2.

use crate::error::{ensure_positive, PricingError, PricingResult};

/// Standard normal cumulative distribution function, `(1 + erf(x / sqrt(2))) / 2`.
pub fn cumulative_normal(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Strike, rate and volatility shared by every point of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractParams {
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
}

impl ContractParams {
    /// Checked constructor: strike and volatility positive, rate finite.
    pub fn new(strike: f64, rate: f64, volatility: f64) -> PricingResult<Self> {
        let params = Self {
            strike,
            rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> PricingResult<()> {
        ensure_positive("strike", self.strike)?;
        ensure_positive("volatility", self.volatility)?;
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidRate(self.rate));
        }
        Ok(())
    }

    /// Price at one spot and maturity with these contract terms.
    pub fn price_at(&self, spot: f64, maturity: f64) -> PricingResult<f64> {
        price(spot, self.strike, self.rate, self.volatility, maturity)
    }
}

/// Black-Scholes value of a European call-style option.
///
/// `spot`, `strike`, `volatility` and `maturity` must be finite and strictly
/// positive, `rate` must be finite. Violations return
/// [`PricingError::NonPositiveInput`] or [`PricingError::InvalidRate`]
/// instead of propagating NaN or infinity.
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> PricingResult<f64> {
    ensure_positive("spot", spot)?;
    ensure_positive("strike", strike)?;
    ensure_positive("volatility", volatility)?;
    ensure_positive("maturity", maturity)?;
    if !rate.is_finite() {
        return Err(PricingError::InvalidRate(rate));
    }

    let log_moneyness = (spot / strike).ln();
    let half_var = 0.5 * volatility * volatility;
    let vol_sqrt_t = volatility * maturity.sqrt();

    let d1 = (log_moneyness + (rate + half_var) * maturity) / vol_sqrt_t;
    let d2 = (log_moneyness + (rate - half_var) * maturity) / vol_sqrt_t;

    Ok(cumulative_normal(d1) * spot - cumulative_normal(d2) * strike)
}
