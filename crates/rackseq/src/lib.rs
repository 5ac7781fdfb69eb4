//! rackseq: spatial pattern generation and resequencing for warehouse layouts.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all rackseq sub-crates. Given entities placed on a layout, it infers the
//! row/column structure, walks them in one of four numbering conventions,
//! expands a label pattern for each, and reports naming conflicts before
//! anything is renamed.
//!
//! # Quick start
//!
//! ```rust
//! use rackseq::prelude::*;
//!
//! let entities: Vec<SpatialEntity> = [(0.0, 0.0), (50.0, 0.0), (100.0, 0.0),
//!                                     (0.0, 100.0), (50.0, 100.0), (100.0, 100.0)]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &(x, y))| SpatialEntity::new(i as u64, x, y, format!("old-{i}")))
//!     .collect();
//!
//! let config = PatternConfig {
//!     direction: TraversalDirection::Serpentine,
//!     pattern: "R{##}".into(),
//!     ..Default::default()
//! };
//! config.validate().unwrap();
//!
//! let out = preview(&entities, std::iter::empty(), &config);
//! assert_eq!(out.structure, GridStructure::new(2, 3));
//! let labels: Vec<&str> = out.entries.iter().map(|e| e.new_label.as_str()).collect();
//! assert_eq!(labels, ["R01", "R02", "R03", "R04", "R05", "R06"]);
//! assert_eq!(out.entries[3].entity_id, EntityId::from(5u64));
//! assert!(out.renames().is_ok());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rackseq-core` | Entities, ids, directions, configuration, errors |
//! | [`space`] | `rackseq-space` | Clustering, grid detection, numbering, visiting order |
//! | [`pattern`] | `rackseq-pattern` | Label templates, conflict validation, previews |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, configuration, and errors (`rackseq-core`).
pub use rackseq_core as types;

/// Spatial analysis (`rackseq-space`).
///
/// [`space::GridStructure`] and [`space::GridLayout`] for detection,
/// [`space::NumberingGrid`] for per-cell numbers, and
/// [`space::visit_order`] for the order entities are walked in.
pub use rackseq_space as space;

/// Label generation and rename previews (`rackseq-pattern`).
///
/// [`pattern::expand`] for single labels, [`pattern::validate`] for
/// conflict checks, and [`pattern::preview`] for the whole pipeline.
pub use rackseq_pattern as pattern;

/// Common imports for typical rackseq usage.
///
/// ```rust
/// use rackseq::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use rackseq_core::{
        ConfigError, EntityId, PatternConfig, SpatialEntity, TraversalDirection,
        DEFAULT_TOLERANCE,
    };

    // Space
    pub use rackseq_space::{GridLayout, GridStructure, NumberingGrid};

    // Pattern
    pub use rackseq_pattern::{
        expand, preview, CommitBlocked, ConflictSource, LabelPosition, Offsets, PatternPreview,
        RenamePreviewEntry, RenameRequest,
    };
}
