//! Tolerance-based clustering along a single axis.
//!
//! Grid detection and spatial sorting both bucket entities into rows the
//! same way; they share [`cluster_axis`] so the two can never disagree on
//! what a row is.

use rackseq_core::SpatialEntity;

/// Coordinate axis to cluster along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Cluster on `x`; buckets are columns.
    X,
    /// Cluster on `y`; buckets are rows.
    Y,
}

impl Axis {
    /// The coordinate of `entity` along this axis.
    pub fn of(self, entity: &SpatialEntity) -> f64 {
        match self {
            Self::X => entity.x,
            Self::Y => entity.y,
        }
    }
}

/// Bucket entities along `axis` with an anchor walk.
///
/// Entities are sorted ascending by their coordinate (stable, so ties keep
/// input order). The first coordinate becomes the anchor. Walking forward,
/// an entity farther than `tolerance` from the anchor opens a new bucket
/// and becomes the new anchor; otherwise it joins the current bucket.
///
/// Returns indices into `entities`, one `Vec` per bucket, buckets ascending.
/// Entities whose `x` or `y` is non-finite are left out entirely.
///
/// # Examples
///
/// ```
/// use rackseq_core::SpatialEntity;
/// use rackseq_space::{cluster_axis, Axis};
///
/// let entities = vec![
///     SpatialEntity::new("a", 0.0, 104.0, "A"),
///     SpatialEntity::new("b", 0.0, 2.0, "B"),
///     SpatialEntity::new("c", 0.0, 100.0, "C"),
/// ];
/// assert_eq!(cluster_axis(&entities, Axis::Y, 10.0), vec![vec![1], vec![2, 0]]);
/// ```
pub fn cluster_axis(entities: &[SpatialEntity], axis: Axis, tolerance: f64) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..entities.len())
        .filter(|&i| entities[i].has_finite_position())
        .collect();
    order.sort_by(|&a, &b| axis.of(&entities[a]).total_cmp(&axis.of(&entities[b])));

    let mut buckets: Vec<Vec<usize>> = Vec::new();
    let mut anchor = f64::NAN;
    for i in order {
        let v = axis.of(&entities[i]);
        match buckets.last_mut() {
            Some(bucket) if (v - anchor).abs() <= tolerance => bucket.push(i),
            _ => {
                anchor = v;
                buckets.push(vec![i]);
            }
        }
    }
    buckets
}
