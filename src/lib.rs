//! Moving-average crossover signal evaluation.
//!
//! The crate computes a trading signal (BUY, SELL, HOLD) from a
//! chronological price series by comparing a short-window simple moving
//! average against a long-window one across the two most recent
//! positions. Evaluation is a pure function over the caller's slice:
//! no state survives a call and the input is never mutated.

pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use models::params::CrossoverParams;
pub use models::signal::Signal;
pub use signals::engine::{evaluate, SignalEngine};
pub use signals::error::EvaluationError;
