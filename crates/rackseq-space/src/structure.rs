//! Inferring row and column counts from raw coordinates.

use crate::cluster::{cluster_axis, Axis};
use rackseq_core::SpatialEntity;

/// Row and column counts inferred from entity positions.
///
/// Derived on demand and never stored by the engine. Both counts are zero
/// exactly when there are no entities with finite coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridStructure {
    /// Number of distinct rows (clusters along `y`).
    pub rows: u32,
    /// Number of distinct columns (clusters along `x`).
    pub cols: u32,
}

impl GridStructure {
    /// Create a structure with explicit counts.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Detect the structure of `entities`.
    ///
    /// Rows and columns are clustered independently with [`cluster_axis`];
    /// the counts are the number of buckets on each axis. Sparse or ragged
    /// layouts simply yield the counts of their occupied rows and columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackseq_core::SpatialEntity;
    /// use rackseq_space::GridStructure;
    ///
    /// let entities: Vec<_> = (0..6)
    ///     .map(|i| SpatialEntity::new(i as u64, (i % 3) as f64 * 50.0, (i / 3) as f64 * 100.0, ""))
    ///     .collect();
    /// assert_eq!(GridStructure::detect(&entities, 10.0), GridStructure::new(2, 3));
    /// ```
    pub fn detect(entities: &[SpatialEntity], tolerance: f64) -> Self {
        Self {
            rows: count(cluster_axis(entities, Axis::Y, tolerance).len()),
            cols: count(cluster_axis(entities, Axis::X, tolerance).len()),
        }
    }

    /// `rows * cols`.
    pub fn cell_count(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// A detected [`GridStructure`] plus the physical cell of every entity.
///
/// Cells are `(row, col)` bucket indices from [`cluster_axis`] along `y`
/// and `x` respectively, both 0-based. Entities with non-finite
/// coordinates have no cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridLayout {
    structure: GridStructure,
    cells: Vec<Option<(u32, u32)>>,
}

impl GridLayout {
    /// Cluster `entities` on both axes and record where each one landed.
    pub fn analyze(entities: &[SpatialEntity], tolerance: f64) -> Self {
        let rows = cluster_axis(entities, Axis::Y, tolerance);
        let cols = cluster_axis(entities, Axis::X, tolerance);

        let mut row_of = vec![None; entities.len()];
        for (r, bucket) in rows.iter().enumerate() {
            for &i in bucket {
                row_of[i] = Some(count(r));
            }
        }
        let mut cells = vec![None; entities.len()];
        for (c, bucket) in cols.iter().enumerate() {
            for &i in bucket {
                cells[i] = row_of[i].map(|r| (r, count(c)));
            }
        }

        Self {
            structure: GridStructure {
                rows: count(rows.len()),
                cols: count(cols.len()),
            },
            cells,
        }
    }

    /// The detected row and column counts.
    pub fn structure(&self) -> GridStructure {
        self.structure
    }

    /// The `(row, col)` of the entity at `index`, 0-based.
    pub fn cell(&self, index: usize) -> Option<(u32, u32)> {
        self.cells.get(index).copied().flatten()
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
