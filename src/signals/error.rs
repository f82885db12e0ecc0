use thiserror::Error;

/// Validation failures surfaced to the caller of the evaluator.
///
/// Each variant maps to one failure category so callers can distinguish
/// bad data from bad configuration. An out-of-bounds latest price is
/// not represented here: the sanity gate absorbs it into a hold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The price series contained a value that is not a finite number.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer than `long_window + 1` price points were supplied.
    #[error("insufficient data: need at least {required} price points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A window parameter fell outside its allowed range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
