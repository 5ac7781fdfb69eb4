//! Core types for the rackseq labeling engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental values every other crate passes around: entity identifiers,
//! spatial entities, traversal directions, pattern configuration, and the
//! error types raised at the edges of the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod direction;
pub mod entity;
pub mod error;
pub mod id;

pub use config::{PatternConfig, DEFAULT_TOLERANCE};
pub use direction::TraversalDirection;
pub use entity::SpatialEntity;
pub use error::{ConfigError, ParseDirectionError};
pub use id::EntityId;
