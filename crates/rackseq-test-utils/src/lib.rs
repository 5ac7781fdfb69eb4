//! Layout fixtures for rackseq development.
//!
//! Builds entity lists shaped like real warehouse layouts: perfect grids,
//! grids with seeded positional jitter, and shuffled copies for checking
//! that ordering never depends on input order.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rackseq_core::SpatialEntity;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Entity at `(x, y)` whose id and current label are both `id`.
pub fn entity(id: &str, x: f64, y: f64) -> SpatialEntity {
    SpatialEntity::new(id, x, y, id)
}

/// A perfect `rows x cols` grid with `spacing` units between neighbours.
///
/// Entities are emitted row-major. Ids are `r{row}c{col}`, current labels
/// are `OLD-{n}` with `n` the 1-based row-major index.
pub fn grid_entities(rows: u32, cols: u32, spacing: f64) -> Vec<SpatialEntity> {
    let mut out = Vec::with_capacity((rows as usize) * (cols as usize));
    for r in 0..rows {
        for c in 0..cols {
            let n = r * cols + c + 1;
            out.push(
                SpatialEntity::new(
                    format!("r{r}c{c}"),
                    c as f64 * spacing,
                    r as f64 * spacing,
                    format!("OLD-{n}"),
                )
                .with_size(spacing / 2.0, spacing / 2.0),
            );
        }
    }
    out
}

/// Like [`grid_entities`], with every coordinate displaced by up to
/// `jitter` units in either direction. Deterministic per `seed`.
pub fn jittered_grid(
    rows: u32,
    cols: u32,
    spacing: f64,
    jitter: f64,
    seed: u64,
) -> Vec<SpatialEntity> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = grid_entities(rows, cols, spacing);
    for e in &mut out {
        e.x += unit_interval(&mut rng) * jitter;
        e.y += unit_interval(&mut rng) * jitter;
    }
    out
}

/// A deterministic Fisher-Yates shuffle of `entities`.
pub fn shuffled(entities: &[SpatialEntity], seed: u64) -> Vec<SpatialEntity> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = entities.to_vec();
    for i in (1..out.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }
    out
}

/// Uniform sample in `[-1, 1]`.
fn unit_interval(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() as f64 / u64::MAX as f64) * 2.0 - 1.0
}

/// `(x, y)` of each entity, in order.
pub fn positions(entities: &[SpatialEntity]) -> Vec<(f64, f64)> {
    entities.iter().map(|e| (e.x, e.y)).collect()
}
