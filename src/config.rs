//! Evaluator defaults and environment helpers.

use std::env;

/// Lowest latest price considered sane by default (BTC/USD assumption).
pub const DEFAULT_MIN_VALID_PRICE: f64 = 1_000.0;
/// Highest latest price considered sane by default (BTC/USD assumption).
pub const DEFAULT_MAX_VALID_PRICE: f64 = 200_000.0;

pub const MIN_SHORT_WINDOW: u32 = 1;
pub const MAX_SHORT_WINDOW: u32 = 50;
pub const MAX_LONG_WINDOW: u32 = 200;

/// Get the current environment (defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Price-sanity bounds for the evaluator, overridable per deployment.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    pub min_valid_price: f64,
    pub max_valid_price: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            min_valid_price: DEFAULT_MIN_VALID_PRICE,
            max_valid_price: DEFAULT_MAX_VALID_PRICE,
        }
    }
}

impl EvaluatorConfig {
    /// Load bounds from the environment, falling back to the defaults.
    ///
    /// Reads `CROSSIX_MIN_VALID_PRICE` and `CROSSIX_MAX_VALID_PRICE`;
    /// unparseable values fall back as if unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let min_valid_price = env::var("CROSSIX_MIN_VALID_PRICE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_MIN_VALID_PRICE);

        let max_valid_price = env::var("CROSSIX_MAX_VALID_PRICE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_MAX_VALID_PRICE);

        Self {
            min_valid_price,
            max_valid_price,
        }
    }
}
