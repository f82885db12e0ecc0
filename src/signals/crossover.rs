use crate::models::signal::Signal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

impl CrossoverType {
    pub fn to_signal(self) -> Signal {
        match self {
            CrossoverType::Bullish => Signal::Buy,
            CrossoverType::Bearish => Signal::Sell,
            CrossoverType::None => Signal::Hold,
        }
    }
}

/// Classify the relation between the short and long averages across the
/// two most recent positions.
///
/// A bullish crossover requires the short average at or below the long
/// average on the previous position and strictly above it on the
/// current one; bearish is the mirror. Equality without a strict
/// current-position inequality is no crossover.
pub fn detect_crossover(
    short_prev: f64,
    long_prev: f64,
    short_current: f64,
    long_current: f64,
) -> CrossoverType {
    if short_prev <= long_prev && short_current > long_current {
        CrossoverType::Bullish
    } else if short_prev >= long_prev && short_current < long_current {
        CrossoverType::Bearish
    } else {
        CrossoverType::None
    }
}

/// Full breakdown of one evaluation (for API responses/debugging).
///
/// When `price_in_bounds` is false the sanity gate fired: the averages
/// and crossover are still reported, but `signal` is forced to hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossoverEvaluation {
    pub crossover_type: CrossoverType,
    pub short_current: f64,
    pub short_prev: f64,
    pub long_current: f64,
    pub long_prev: f64,
    pub latest_price: f64,
    pub price_in_bounds: bool,
    pub signal: Signal,
}

impl CrossoverEvaluation {
    pub fn new(
        crossover_type: CrossoverType,
        short_current: f64,
        short_prev: f64,
        long_current: f64,
        long_prev: f64,
        latest_price: f64,
        price_in_bounds: bool,
        signal: Signal,
    ) -> Self {
        Self {
            crossover_type,
            short_current,
            short_prev,
            long_current,
            long_prev,
            latest_price,
            price_in_bounds,
            signal,
        }
    }
}
