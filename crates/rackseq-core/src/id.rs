//! Strongly-typed entity identifiers.

use std::fmt;

/// Opaque identifier of a [`SpatialEntity`](crate::SpatialEntity).
///
/// The engine never interprets the contents; identifiers are owned by the
/// calling layout and echoed back in preview entries so the caller can
/// route each rename to the right object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub String);

impl EntityId {
    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<u64> for EntityId {
    fn from(v: u64) -> Self {
        Self(v.to_string())
    }
}
