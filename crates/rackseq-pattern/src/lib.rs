//! Label generation and rename previews for rackseq.
//!
//! - [`template`]: expands `{ROW}`, `{COL##}`, `{A}`, `{###}` and friends
//!   into concrete labels
//! - [`conflict`]: flags proposed labels that collide, case-insensitively,
//!   with untouched labels or earlier proposals
//! - [`preview`]: the end-to-end pipeline from entities and a
//!   [`PatternConfig`](rackseq_core::PatternConfig) to a rename preview
//!
//! The pipeline is a pure function of its inputs and is cheap enough to
//! re-run on every keystroke while a pattern is being typed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod conflict;
pub mod error;
pub mod preview;
pub mod template;

pub use conflict::{validate, ConflictSource, ProposedLabel, RenamePreviewEntry, UsedLabels};
pub use error::CommitBlocked;
pub use preview::{preview, PatternPreview, RenameRequest};
pub use template::{
    expand, has_sequence_placeholder, letters, placeholders, LabelPosition, Offsets, Placeholder,
    PlaceholderKind,
};
