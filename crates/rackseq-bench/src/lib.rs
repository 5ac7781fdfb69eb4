//! Benchmark profiles for the rackseq labeling engine.
//!
//! - [`reference_layout`]: 50x100 racks (5K entities) with mild jitter
//! - [`stress_layout`]: 200x250 racks (50K entities)
//! - [`reference_config`]: a typical aisle/bay pattern

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rackseq_core::{PatternConfig, SpatialEntity, TraversalDirection};
use rackseq_test_utils::{jittered_grid, shuffled};

/// 5K entities: 50 rows of 100, 30 units apart, shuffled.
pub fn reference_layout(seed: u64) -> Vec<SpatialEntity> {
    shuffled(&jittered_grid(50, 100, 30.0, 3.0, seed), seed)
}

/// 50K entities: 200 rows of 250, 30 units apart, shuffled.
pub fn stress_layout(seed: u64) -> Vec<SpatialEntity> {
    shuffled(&jittered_grid(200, 250, 30.0, 3.0, seed), seed)
}

/// Aisle/bay pattern under `direction`.
pub fn reference_config(direction: TraversalDirection) -> PatternConfig {
    PatternConfig {
        direction,
        pattern: "A{ROW##}-B{COL###}-{####}".into(),
        ..Default::default()
    }
}

/// Labels of every fifth entity, to seed a frozen set with some overlap.
pub fn frozen_labels(entities: &[SpatialEntity]) -> Vec<String> {
    entities
        .iter()
        .step_by(5)
        .map(|e| e.current_label.clone())
        .collect()
}
