use serde::{Deserialize, Serialize};

/// Computed simple moving average over the last `period` prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}
