//! Error types raised at the edges of the engine.
//!
//! The engine operations themselves never fail; they degrade to empty or
//! trivial output. Errors exist only where a caller asks for a judgement:
//! validating a configuration or parsing a direction name.

use thiserror::Error;

/// Errors detected by [`PatternConfig::validate()`](crate::PatternConfig::validate).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Clustering tolerance is NaN, infinite, or negative.
    #[error("tolerance must be finite and non-negative, got {value}")]
    InvalidTolerance {
        /// The rejected tolerance.
        value: f64,
    },
    /// A numbering offset is zero; offsets are 1-based.
    #[error("{field} must be at least 1")]
    ZeroStart {
        /// Which offset was zero (`start_number`, `start_row`, `start_col`).
        field: &'static str,
    },
    /// The label pattern is empty.
    #[error("pattern is empty")]
    EmptyPattern,
}

/// A direction name did not match any [`TraversalDirection`](crate::TraversalDirection).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown traversal direction '{name}' (expected serpentine, sequential_rows, sequential_cols, or cross_aisle)")]
pub struct ParseDirectionError {
    /// The unrecognised name.
    pub name: String,
}
