//! Price sources
//!
//! A [`PriceSource`] decides what a verified retailer charges. The only
//! implementation today is [`SyntheticPricing`], a deterministic formula
//! keyed on the retailer's position in the list.

use crate::catalog::RetailerDescriptor;
use crate::config::PricingConfig;

/// Produces a price for one retailer's listing
pub trait PriceSource: Send + Sync {
    /// Returns the price at `index`, or `None` if the source has no price
    fn price_for(&self, index: usize, retailer: &RetailerDescriptor, query: &str) -> Option<f64>;
}

/// Deterministic demo pricing: `base + index * step_up - index * step_down`
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticPricing {
    base_price: f64,
    step_up: f64,
    step_down: f64,
}

impl SyntheticPricing {
    pub fn new(base_price: f64, step_up: f64, step_down: f64) -> Self {
        Self {
            base_price,
            step_up,
            step_down,
        }
    }
}

impl Default for SyntheticPricing {
    fn default() -> Self {
        Self::from(&PricingConfig::default())
    }
}

impl From<&PricingConfig> for SyntheticPricing {
    fn from(config: &PricingConfig) -> Self {
        Self::new(config.base_price, config.step_up, config.step_down)
    }
}

impl PriceSource for SyntheticPricing {
    fn price_for(&self, index: usize, _retailer: &RetailerDescriptor, _query: &str) -> Option<f64> {
        let i = index as f64;
        Some(round_cents(
            self.base_price + i * self.step_up - i * self.step_down,
        ))
    }
}

/// Rounds to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
