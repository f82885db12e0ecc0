//! Indicator computation primitives.

pub mod trend;

pub use trend::*;
