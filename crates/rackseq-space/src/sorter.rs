//! Visiting order of entities for a traversal direction.

use crate::cluster::{cluster_axis, Axis};
use rackseq_core::{SpatialEntity, TraversalDirection};

/// Indices into `entities` in the order they are visited under `direction`.
///
/// Entities are bucketed into rows with [`cluster_axis`] along `y`, and
/// each row is sorted by `x` ascending. Rows are then flattened:
///
/// - **serpentine**: even rows forward, odd rows reversed
/// - **sequential_rows** / **sequential_cols**: every row forward. Both
///   conventions share this physical order; they differ only in how the
///   label pattern uses row and column numbers.
/// - **cross_aisle**: consecutive row pairs are interleaved position by
///   position (`a0, b0, a1, b1, ...`); a longer row's tail follows in
///   order and an unpaired last row is visited forward.
///
/// Entities with non-finite coordinates are not visited.
pub fn visit_order(
    entities: &[SpatialEntity],
    direction: TraversalDirection,
    tolerance: f64,
) -> Vec<usize> {
    let mut rows = cluster_axis(entities, Axis::Y, tolerance);
    for row in &mut rows {
        row.sort_by(|&a, &b| entities[a].x.total_cmp(&entities[b].x));
    }

    match direction {
        TraversalDirection::Serpentine => rows
            .into_iter()
            .enumerate()
            .flat_map(|(i, mut row)| {
                if i % 2 == 1 {
                    row.reverse();
                }
                row
            })
            .collect(),
        TraversalDirection::SequentialRows | TraversalDirection::SequentialCols => {
            rows.into_iter().flatten().collect()
        }
        TraversalDirection::CrossAisle => rows.chunks(2).flat_map(interleave).collect(),
    }
}

/// `entities` reordered by [`visit_order`].
///
/// # Examples
///
/// ```
/// use rackseq_core::{SpatialEntity, TraversalDirection};
/// use rackseq_space::sort_entities;
///
/// let entities = vec![
///     SpatialEntity::new("a", 0.0, 0.0, "A"),
///     SpatialEntity::new("b", 50.0, 0.0, "B"),
///     SpatialEntity::new("c", 0.0, 100.0, "C"),
///     SpatialEntity::new("d", 50.0, 100.0, "D"),
/// ];
/// let order: Vec<&str> = sort_entities(&entities, TraversalDirection::Serpentine, 10.0)
///     .iter()
///     .map(|e| e.id.as_str())
///     .collect();
/// assert_eq!(order, ["a", "b", "d", "c"]);
/// ```
pub fn sort_entities(
    entities: &[SpatialEntity],
    direction: TraversalDirection,
    tolerance: f64,
) -> Vec<&SpatialEntity> {
    visit_order(entities, direction, tolerance)
        .into_iter()
        .map(|i| &entities[i])
        .collect()
}

fn interleave(pair: &[Vec<usize>]) -> Vec<usize> {
    let longest = pair.iter().map(Vec::len).max().unwrap_or(0);
    (0..longest)
        .flat_map(|k| pair.iter().filter_map(move |row| row.get(k).copied()))
        .collect()
}
