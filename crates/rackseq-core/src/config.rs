//! Pattern configuration and validation.
//!
//! [`PatternConfig`] is the full, enumerable input a caller supplies next to
//! the entity list. [`validate()`](PatternConfig::validate) lets the caller
//! reject bad input up front; the preview pipeline never calls it and
//! degrades instead.

use crate::direction::TraversalDirection;
use crate::error::ConfigError;

/// Default clustering tolerance in layout units.
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Everything that controls one pattern preview.
///
/// # Examples
///
/// ```
/// use rackseq_core::{PatternConfig, TraversalDirection};
///
/// let config = PatternConfig {
///     direction: TraversalDirection::CrossAisle,
///     pattern: "A{ROW}-{###}".into(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tolerance, 10.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PatternConfig {
    /// Maximum coordinate deviation for two entities to share a row or
    /// column. Default: [`DEFAULT_TOLERANCE`].
    pub tolerance: f64,
    /// Numbering convention. Default: serpentine.
    pub direction: TraversalDirection,
    /// Label template, e.g. `"R{ROW}-{##}"`. Default: `"{#}"`.
    pub pattern: String,
    /// Value the first sequence number maps to. Default: 1.
    pub start_number: u32,
    /// Value the first row maps to. Default: 1.
    pub start_row: u32,
    /// Value the first column maps to. Default: 1.
    pub start_col: u32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            direction: TraversalDirection::default(),
            pattern: "{#}".to_owned(),
            start_number: 1,
            start_row: 1,
            start_col: 1,
        }
    }
}

impl PatternConfig {
    /// Check structural invariants.
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        if self.pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        for (field, value) in [
            ("start_number", self.start_number),
            ("start_row", self.start_row),
            ("start_col", self.start_col),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroStart { field });
            }
        }
        Ok(())
    }
}
