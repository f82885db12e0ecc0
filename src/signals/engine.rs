//! Crossover evaluation engine.

use crate::indicators::trend::sma::sma_over_last_offset;
use crate::models::params::CrossoverParams;
use crate::models::signal::Signal;
use crate::signals::crossover::{detect_crossover, CrossoverEvaluation};
use crate::signals::error::EvaluationError;
use crate::signals::validation::{validate_data_sufficiency, validate_prices, validate_windows};
use tracing::debug;

/// Evaluate with the default price bounds.
pub fn evaluate(
    prices: &[f64],
    short_window: u32,
    long_window: u32,
) -> Result<Signal, EvaluationError> {
    SignalEngine::evaluate(prices, &CrossoverParams::new(short_window, long_window))
}

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a crossover signal over `prices` (oldest first).
    ///
    /// Validation runs in a fixed order (input content, data
    /// sufficiency, window bounds) so a call violating several
    /// conditions always reports the same error. A latest price outside
    /// the sanity bounds holds immediately without computing averages.
    pub fn evaluate(prices: &[f64], params: &CrossoverParams) -> Result<Signal, EvaluationError> {
        Self::validate(prices, params)?;

        let latest_price = prices[prices.len() - 1];
        if !Self::price_in_bounds(latest_price, params) {
            debug!(
                latest_price,
                min_valid_price = params.min_valid_price,
                max_valid_price = params.max_valid_price,
                "latest price outside sanity bounds, holding"
            );
            return Ok(Signal::Hold);
        }

        let (short_current, short_prev, long_current, long_prev) =
            Self::window_averages(prices, params).ok_or(EvaluationError::InsufficientData {
                required: params.long_window as usize + 1,
                actual: prices.len(),
            })?;

        let crossover = detect_crossover(short_prev, long_prev, short_current, long_current);
        debug!(
            short_current,
            short_prev,
            long_current,
            long_prev,
            ?crossover,
            "window averages evaluated"
        );

        Ok(crossover.to_signal())
    }

    /// Evaluate and return the full breakdown (for API responses/debugging).
    ///
    /// Unlike [`SignalEngine::evaluate`], the averages are computed even
    /// when the sanity gate fires; the gate is reported through
    /// `price_in_bounds` and `signal` is forced to hold. The `signal`
    /// field always equals what `evaluate` returns for the same inputs.
    pub fn evaluate_with_indicators(
        prices: &[f64],
        params: &CrossoverParams,
    ) -> Result<CrossoverEvaluation, EvaluationError> {
        Self::validate(prices, params)?;

        let (short_current, short_prev, long_current, long_prev) =
            Self::window_averages(prices, params).ok_or(EvaluationError::InsufficientData {
                required: params.long_window as usize + 1,
                actual: prices.len(),
            })?;

        let crossover = detect_crossover(short_prev, long_prev, short_current, long_current);
        let latest_price = prices[prices.len() - 1];
        let price_in_bounds = Self::price_in_bounds(latest_price, params);

        let signal = if price_in_bounds {
            crossover.to_signal()
        } else {
            Signal::Hold
        };

        Ok(CrossoverEvaluation::new(
            crossover,
            short_current,
            short_prev,
            long_current,
            long_prev,
            latest_price,
            price_in_bounds,
            signal,
        ))
    }

    fn validate(prices: &[f64], params: &CrossoverParams) -> Result<(), EvaluationError> {
        validate_prices(prices)?;
        validate_data_sufficiency(prices, params.long_window)?;
        validate_windows(params.short_window, params.long_window)?;
        Ok(())
    }

    // Inclusive on both ends.
    fn price_in_bounds(latest_price: f64, params: &CrossoverParams) -> bool {
        latest_price >= params.min_valid_price && latest_price <= params.max_valid_price
    }

    fn window_averages(prices: &[f64], params: &CrossoverParams) -> Option<(f64, f64, f64, f64)> {
        let short = params.short_window as usize;
        let long = params.long_window as usize;

        let short_current = sma_over_last_offset(prices, short, 0)?;
        let short_prev = sma_over_last_offset(prices, short, 1)?;
        let long_current = sma_over_last_offset(prices, long, 0)?;
        let long_prev = sma_over_last_offset(prices, long, 1)?;

        Some((short_current, short_prev, long_current, long_prev))
    }
}
