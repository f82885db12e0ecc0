//! Unit tests for SMA indicator

use crossix::indicators::trend::{calculate_sma, sma_over_last, sma_over_last_offset};

fn climbing_prices(count: usize, base: f64) -> Vec<f64> {
    (0..count).map(|i| base + i as f64).collect()
}

#[test]
fn test_sma_insufficient_data() {
    let prices = climbing_prices(3, 100.0);
    assert!(sma_over_last(&prices, 4).is_none());
    assert!(calculate_sma(&prices, 4).is_none());
}

#[test]
fn test_sma_zero_period() {
    let prices = climbing_prices(5, 100.0);
    assert!(sma_over_last(&prices, 0).is_none());
}

#[test]
fn test_sma_exact_window() {
    let prices = vec![1.0, 2.0, 3.0];
    assert_eq!(sma_over_last(&prices, 3), Some(2.0));
}

#[test]
fn test_sma_uses_tail_window() {
    let prices = vec![10.0, 1.0, 2.0, 3.0];
    assert_eq!(sma_over_last(&prices, 3), Some(2.0));
}

#[test]
fn test_sma_offset_shifts_window_back() {
    let prices = vec![1.0, 2.0, 3.0, 4.0];
    assert_eq!(sma_over_last_offset(&prices, 2, 0), Some(3.5));
    assert_eq!(sma_over_last_offset(&prices, 2, 1), Some(2.5));
    assert_eq!(sma_over_last_offset(&prices, 2, 2), Some(1.5));
    assert!(sma_over_last_offset(&prices, 2, 3).is_none());
}

#[test]
fn test_sma_offset_matches_truncated_slice() {
    let prices = climbing_prices(10, 50.0);
    let truncated = &prices[..prices.len() - 1];
    assert_eq!(
        sma_over_last_offset(&prices, 4, 1),
        sma_over_last(truncated, 4)
    );
}

#[test]
fn test_calculate_sma_carries_period() {
    let prices = climbing_prices(20, 100.0);
    let sma = calculate_sma(&prices, 5).unwrap();
    assert_eq!(sma.period, 5);
    assert!(sma.value.is_finite());
}
