//! Crossover evaluation parameters.

use crate::config::{DEFAULT_MAX_VALID_PRICE, DEFAULT_MIN_VALID_PRICE};
use serde::{Deserialize, Serialize};

/// Window sizes and price-sanity bounds for one evaluation.
///
/// The bounds are inclusive on both ends and default to the BTC/USD
/// range (1000–200000). Callers evaluating other assets supply their
/// own bounds through [`CrossoverParams::with_price_bounds`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossoverParams {
    pub short_window: u32,
    pub long_window: u32,
    #[serde(default = "default_min_valid_price")]
    pub min_valid_price: f64,
    #[serde(default = "default_max_valid_price")]
    pub max_valid_price: f64,
}

fn default_min_valid_price() -> f64 {
    DEFAULT_MIN_VALID_PRICE
}

fn default_max_valid_price() -> f64 {
    DEFAULT_MAX_VALID_PRICE
}

impl CrossoverParams {
    /// Create params with the default price bounds.
    pub fn new(short_window: u32, long_window: u32) -> Self {
        Self {
            short_window,
            long_window,
            min_valid_price: DEFAULT_MIN_VALID_PRICE,
            max_valid_price: DEFAULT_MAX_VALID_PRICE,
        }
    }

    pub fn with_price_bounds(mut self, min_valid_price: f64, max_valid_price: f64) -> Self {
        self.min_valid_price = min_valid_price;
        self.max_valid_price = max_valid_price;
        self
    }
}
