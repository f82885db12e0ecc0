//! Unit tests for evaluator configuration

use crossix::config::{
    EvaluatorConfig, DEFAULT_MAX_VALID_PRICE, DEFAULT_MIN_VALID_PRICE, MAX_LONG_WINDOW,
    MAX_SHORT_WINDOW, MIN_SHORT_WINDOW,
};

#[test]
fn test_default_bounds() {
    let config = EvaluatorConfig::default();
    assert_eq!(config.min_valid_price, DEFAULT_MIN_VALID_PRICE);
    assert_eq!(config.max_valid_price, DEFAULT_MAX_VALID_PRICE);
}

#[test]
fn test_window_limits() {
    assert_eq!(MIN_SHORT_WINDOW, 1);
    assert_eq!(MAX_SHORT_WINDOW, 50);
    assert_eq!(MAX_LONG_WINDOW, 200);
}

#[test]
fn test_from_env_falls_back_to_defaults() {
    // The override variables are not set in the test environment.
    let config = EvaluatorConfig::from_env();
    assert_eq!(config.min_valid_price, DEFAULT_MIN_VALID_PRICE);
    assert_eq!(config.max_valid_price, DEFAULT_MAX_VALID_PRICE);
}
