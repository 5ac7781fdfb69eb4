//! The end-to-end pattern preview pipeline.
//!
//! `sort -> number -> expand -> validate`, as one pure function of the
//! entities, the labels outside the batch, and a [`PatternConfig`]. The
//! caller renders the result as a diff and, once confirmed, issues one
//! rename per [`RenameRequest`]; persisting those is not done here.

use crate::conflict::{validate, ProposedLabel, RenamePreviewEntry};
use crate::error::CommitBlocked;
use crate::template::{expand, LabelPosition, Offsets};
use rackseq_core::{EntityId, PatternConfig, SpatialEntity, TraversalDirection};
use rackseq_space::{visit_order, GridLayout, GridStructure, NumberingGrid};
use tracing::{debug, warn};

/// A single confirmed rename, ready to hand to the persistence layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameRequest {
    /// Entity to rename.
    pub entity_id: EntityId,
    /// Label to apply.
    pub new_label: String,
}

/// Result of [`preview()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternPreview {
    /// Detected row and column counts.
    pub structure: GridStructure,
    /// Direction the entries were numbered in.
    pub direction: TraversalDirection,
    /// One entry per visited entity, in visiting order.
    pub entries: Vec<RenamePreviewEntry>,
}

impl PatternPreview {
    /// Numbering diagram for `structure` under the previewed direction.
    ///
    /// Built on request: its size is `rows * cols`, which for scattered
    /// layouts approaches the square of the entity count.
    pub fn numbering(&self) -> NumberingGrid {
        NumberingGrid::for_structure(self.structure, self.direction)
    }

    /// `true` if any entry is in conflict. A preview with conflicts must
    /// not be committed.
    pub fn has_conflicts(&self) -> bool {
        self.entries.iter().any(|e| e.conflict)
    }

    /// Number of entries in conflict.
    pub fn conflict_count(&self) -> usize {
        self.conflicts().count()
    }

    /// Entries in conflict, in visiting order.
    pub fn conflicts(&self) -> impl Iterator<Item = &RenamePreviewEntry> {
        self.entries.iter().filter(|e| e.conflict)
    }

    /// Entries whose label would actually change.
    pub fn changed(&self) -> impl Iterator<Item = &RenamePreviewEntry> {
        self.entries.iter().filter(|e| e.is_change())
    }

    /// Rename requests for every changed entry.
    ///
    /// Refuses with [`CommitBlocked`] while any entry is in conflict.
    /// Entries whose label is unchanged produce no request.
    pub fn renames(&self) -> Result<Vec<RenameRequest>, CommitBlocked> {
        if let Some(first) = self.conflicts().next() {
            return Err(CommitBlocked {
                conflicts: self.conflict_count(),
                first: first.entity_id.clone(),
            });
        }
        Ok(self
            .changed()
            .map(|e| RenameRequest {
                entity_id: e.entity_id.clone(),
                new_label: e.new_label.clone(),
            })
            .collect())
    }
}

/// Build a rename preview for `entities` under `config`.
///
/// `frozen` holds the labels of entities outside the batch; a proposal
/// that matches one of them (ignoring case) is flagged. Entities with
/// non-finite coordinates keep their label, so their current labels are
/// treated as frozen too.
///
/// Each visited entity gets its 1-based position in visiting order as the
/// sequence number, and its physical row and column from [`GridLayout`]
/// (1-based) for `{ROW}` and `{COL}`. Entities with non-finite
/// coordinates are left out of the preview. The configuration is used
/// as given; call [`PatternConfig::validate`] first to reject bad input.
///
/// # Examples
///
/// ```
/// use rackseq_core::{PatternConfig, SpatialEntity};
/// use rackseq_pattern::preview;
///
/// let entities = vec![
///     SpatialEntity::new("a", 0.0, 0.0, "old-a"),
///     SpatialEntity::new("b", 50.0, 0.0, "old-b"),
/// ];
/// let config = PatternConfig { pattern: "BAY-{##}".into(), ..Default::default() };
/// let out = preview(&entities, ["BAY-02"], &config);
/// assert_eq!(out.entries[0].new_label, "BAY-01");
/// assert!(out.entries[1].conflict);
/// assert!(out.renames().is_err());
/// ```
pub fn preview<'a>(
    entities: &[SpatialEntity],
    frozen: impl IntoIterator<Item = &'a str>,
    config: &PatternConfig,
) -> PatternPreview {
    let mut reserved: Vec<&str> = entities
        .iter()
        .filter(|e| !e.has_finite_position())
        .map(|e| e.current_label.as_str())
        .collect();
    let skipped = reserved.len();
    if skipped > 0 {
        warn!(
            skipped,
            total = entities.len(),
            "entities with non-finite coordinates left out of preview"
        );
    }

    let layout = GridLayout::analyze(entities, config.tolerance);
    let structure = layout.structure();
    let offsets = Offsets::from(config);

    let proposed = visit_order(entities, config.direction, config.tolerance)
        .into_iter()
        .zip(1u64..)
        .map(|(index, sequence)| {
            let entity = &entities[index];
            let (row, col) = layout.cell(index).unwrap_or((0, 0));
            let at = LabelPosition {
                sequence,
                row: row as u64 + 1,
                col: col as u64 + 1,
            };
            ProposedLabel {
                entity_id: entity.id.clone(),
                old_label: entity.current_label.clone(),
                new_label: expand(&config.pattern, at, offsets),
            }
        });

    for label in frozen {
        reserved.push(label);
    }
    let entries = validate(proposed, reserved);
    let conflicts = entries.iter().filter(|e| e.conflict).count();
    debug!(
        entities = entries.len(),
        rows = structure.rows,
        cols = structure.cols,
        direction = %config.direction,
        conflicts,
        "built pattern preview"
    );

    PatternPreview {
        structure,
        direction: config.direction,
        entries,
    }
}
