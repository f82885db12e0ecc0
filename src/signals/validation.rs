//! Input validation for the crossover evaluator.

use crate::config::{MAX_LONG_WINDOW, MAX_SHORT_WINDOW, MIN_SHORT_WINDOW};
use crate::signals::error::EvaluationError;

/// Reject any price that is NaN or infinite.
pub fn validate_prices(prices: &[f64]) -> Result<(), EvaluationError> {
    for (index, price) in prices.iter().enumerate() {
        if !price.is_finite() {
            return Err(EvaluationError::InvalidInput(format!(
                "price at index {} is not a finite number: {}",
                index, price
            )));
        }
    }
    Ok(())
}

/// Require at least `long_window + 1` data points.
pub fn validate_data_sufficiency(prices: &[f64], long_window: u32) -> Result<(), EvaluationError> {
    let required = long_window as usize + 1;
    if prices.len() < required {
        return Err(EvaluationError::InsufficientData {
            required,
            actual: prices.len(),
        });
    }
    Ok(())
}

/// Check both windows against their bounds.
///
/// The short window is checked before the long window, so a call
/// violating both reports the short-window error.
pub fn validate_windows(short_window: u32, long_window: u32) -> Result<(), EvaluationError> {
    if !(MIN_SHORT_WINDOW..=MAX_SHORT_WINDOW).contains(&short_window) {
        return Err(EvaluationError::InvalidParameter(format!(
            "short_window must be between {} and {}, got {}",
            MIN_SHORT_WINDOW, MAX_SHORT_WINDOW, short_window
        )));
    }

    if long_window <= short_window || long_window > MAX_LONG_WINDOW {
        return Err(EvaluationError::InvalidParameter(format!(
            "long_window must be greater than short_window ({}) and no more than {}, got {}",
            short_window, MAX_LONG_WINDOW, long_window
        )));
    }

    Ok(())
}
