//! Numbering conventions for walking a 2D arrangement.

use crate::error::ParseDirectionError;
use std::fmt;
use std::str::FromStr;

/// How sequential identifiers are assigned across rows and columns.
///
/// The textual form (used by [`Display`](fmt::Display) and [`FromStr`]) is
/// the snake_case name, e.g. `"cross_aisle"`.
///
/// # Examples
///
/// ```
/// use rackseq_core::TraversalDirection;
///
/// let d: TraversalDirection = "serpentine".parse().unwrap();
/// assert_eq!(d, TraversalDirection::Serpentine);
/// assert_eq!(TraversalDirection::CrossAisle.to_string(), "cross_aisle");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalDirection {
    /// Boustrophedon: alternate direction on every row.
    #[default]
    Serpentine,
    /// Every row numbered left to right, restarting at 1.
    SequentialRows,
    /// Every column numbered top to bottom, restarting at 1.
    SequentialCols,
    /// Paired rows split into odd and even numbers, as on a double-sided aisle.
    CrossAisle,
}

impl TraversalDirection {
    /// All directions, in declaration order.
    pub const ALL: [TraversalDirection; 4] = [
        Self::Serpentine,
        Self::SequentialRows,
        Self::SequentialCols,
        Self::CrossAisle,
    ];

    /// The snake_case name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Serpentine => "serpentine",
            Self::SequentialRows => "sequential_rows",
            Self::SequentialCols => "sequential_cols",
            Self::CrossAisle => "cross_aisle",
        }
    }
}

impl fmt::Display for TraversalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseDirectionError {
                name: s.to_owned(),
            })
    }
}
