//! Unit tests for the signal output model

use crossix::models::signal::Signal;

#[test]
fn test_signal_serializes_to_uppercase_labels() {
    assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"BUY\"");
    assert_eq!(serde_json::to_string(&Signal::Sell).unwrap(), "\"SELL\"");
    assert_eq!(serde_json::to_string(&Signal::Hold).unwrap(), "\"HOLD\"");
}

#[test]
fn test_signal_deserializes_from_labels() {
    assert_eq!(
        serde_json::from_str::<Signal>("\"BUY\"").unwrap(),
        Signal::Buy
    );
    assert_eq!(
        serde_json::from_str::<Signal>("\"SELL\"").unwrap(),
        Signal::Sell
    );
    assert_eq!(
        serde_json::from_str::<Signal>("\"HOLD\"").unwrap(),
        Signal::Hold
    );
}

#[test]
fn test_signal_display() {
    assert_eq!(Signal::Buy.to_string(), "BUY");
    assert_eq!(Signal::Sell.to_string(), "SELL");
    assert_eq!(Signal::Hold.to_string(), "HOLD");
}
