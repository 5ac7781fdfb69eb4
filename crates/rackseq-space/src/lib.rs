//! Spatial analysis for rackseq.
//!
//! Turns raw entity coordinates into structure the labeling engine can use:
//!
//! - [`cluster_axis`]: tolerance-based bucketing along one axis, the single
//!   routine behind both grid detection and visiting order
//! - [`GridStructure`]: inferred row and column counts, and [`GridLayout`]
//!   for the cell each entity falls in
//! - [`NumberingGrid`]: per-cell sequence numbers for a [`TraversalDirection`]
//! - [`visit_order`] / [`sort_entities`]: the order entities are visited in
//!
//! Everything here is a pure function of its inputs. Entities with
//! non-finite coordinates are skipped rather than rejected.
//!
//! [`TraversalDirection`]: rackseq_core::TraversalDirection

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cluster;
pub mod numbering;
pub mod sorter;
pub mod structure;

pub use cluster::{cluster_axis, Axis};
pub use numbering::NumberingGrid;
pub use sorter::{sort_entities, visit_order};
pub use structure::{GridLayout, GridStructure};
