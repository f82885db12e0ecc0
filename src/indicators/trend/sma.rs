//! SMA (Simple Moving Average) indicator

use crate::models::indicators::SmaIndicator;

/// Mean of the last `period` prices.
pub fn sma_over_last(prices: &[f64], period: usize) -> Option<f64> {
    sma_over_last_offset(prices, period, 0)
}

/// Mean of the `period` prices ending `offset` positions before the end.
///
/// `offset = 0` is the window through the most recent price, `offset = 1`
/// the same window shifted back by one.
pub fn sma_over_last_offset(prices: &[f64], period: usize, offset: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + offset {
        return None;
    }

    let end = prices.len() - offset;
    let window = &prices[end - period..end];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Calculate SMA for a specific period
pub fn calculate_sma(prices: &[f64], period: u32) -> Option<SmaIndicator> {
    let value = sma_over_last(prices, period as usize)?;
    Some(SmaIndicator { value, period })
}
