//! Spatially-positioned entities read by the engine.

use crate::id::EntityId;

/// A storage location (or any labelled object) placed on the layout canvas.
///
/// Owned by the calling layout. The engine only reads its position and
/// current label; proposed labels come back as preview entries and the
/// entity itself is never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialEntity {
    /// Identifier echoed back in preview entries.
    pub id: EntityId,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position. Rows are formed along this axis.
    pub y: f64,
    /// Footprint width. Not used for clustering.
    pub width: f64,
    /// Footprint height. Not used for clustering.
    pub height: f64,
    /// Label currently shown on the layout.
    pub current_label: String,
}

impl SpatialEntity {
    /// Create an entity at `(x, y)` with a zero-size footprint.
    pub fn new(id: impl Into<EntityId>, x: f64, y: f64, current_label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width: 0.0,
            height: 0.0,
            current_label: current_label.into(),
        }
    }

    /// Set the footprint, returning the updated entity.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// `true` when both coordinates are finite and usable for clustering.
    pub fn has_finite_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }
}
