//! Duplicate-label detection for a rename batch.

use indexmap::IndexMap;
use rackseq_core::EntityId;

/// A label proposed for one entity, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposedLabel {
    /// Entity to rename.
    pub entity_id: EntityId,
    /// Label the entity has now.
    pub old_label: String,
    /// Label the pattern produced.
    pub new_label: String,
}

/// What an entry's label collided with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConflictSource {
    /// A label on an entity outside the batch.
    Frozen,
    /// An earlier proposal in the same batch, for this entity.
    Batch(EntityId),
}

/// One row of a rename preview.
///
/// `conflict` is `true` exactly when `conflicts_with` is `Some`. Conflicting
/// entries are always reported, never dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenamePreviewEntry {
    /// Entity to rename.
    pub entity_id: EntityId,
    /// Label the entity has now.
    pub old_label: String,
    /// Proposed label.
    pub new_label: String,
    /// `true` if `new_label` is already taken.
    pub conflict: bool,
    /// The first claimant of `new_label`, when in conflict.
    pub conflicts_with: Option<ConflictSource>,
}

impl RenamePreviewEntry {
    /// `true` if applying this entry would change the label.
    pub fn is_change(&self) -> bool {
        self.old_label != self.new_label
    }
}

/// Case-insensitive registry of labels already claimed.
///
/// Keys are lower-cased labels. Claims are kept in the order they were
/// made, frozen labels first.
#[derive(Clone, Debug, Default)]
pub struct UsedLabels {
    claims: IndexMap<String, ConflictSource>,
}

impl UsedLabels {
    /// Seed the registry with labels of entities outside the batch.
    pub fn with_frozen<'a>(frozen: impl IntoIterator<Item = &'a str>) -> Self {
        let mut claims = IndexMap::new();
        for label in frozen {
            claims
                .entry(label.to_lowercase())
                .or_insert(ConflictSource::Frozen);
        }
        Self { claims }
    }

    /// Claim `label` for `entity`.
    ///
    /// Returns the existing claimant if the label (ignoring case) is
    /// already taken; the registry is left unchanged in that case.
    pub fn claim(&mut self, label: &str, entity: &EntityId) -> Option<ConflictSource> {
        let key = label.to_lowercase();
        if let Some(existing) = self.claims.get(&key) {
            return Some(existing.clone());
        }
        self.claims.insert(key, ConflictSource::Batch(entity.clone()));
        None
    }

    /// `true` if `label` (ignoring case) is claimed.
    pub fn contains(&self, label: &str) -> bool {
        self.claims.contains_key(&label.to_lowercase())
    }

    /// Number of distinct claimed labels.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// `true` if nothing is claimed.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Claims in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConflictSource)> {
        self.claims.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Flag proposals whose label is already taken.
///
/// Frozen labels are claimed first. Proposals are then claimed in order,
/// so of two identical proposals the later one is flagged and the earlier
/// one is not. Comparison ignores case.
///
/// # Examples
///
/// ```
/// use rackseq_pattern::{validate, ConflictSource, ProposedLabel};
///
/// let proposed = vec![
///     ProposedLabel { entity_id: "a".into(), old_label: "x".into(), new_label: "R1".into() },
///     ProposedLabel { entity_id: "b".into(), old_label: "y".into(), new_label: "r1".into() },
/// ];
/// let entries = validate(proposed, ["Q9"]);
/// assert!(!entries[0].conflict);
/// assert_eq!(entries[1].conflicts_with, Some(ConflictSource::Batch("a".into())));
/// ```
pub fn validate<'a>(
    proposed: impl IntoIterator<Item = ProposedLabel>,
    frozen: impl IntoIterator<Item = &'a str>,
) -> Vec<RenamePreviewEntry> {
    let mut used = UsedLabels::with_frozen(frozen);
    proposed
        .into_iter()
        .map(|p| {
            let conflicts_with = used.claim(&p.new_label, &p.entity_id);
            RenamePreviewEntry {
                entity_id: p.entity_id,
                old_label: p.old_label,
                new_label: p.new_label,
                conflict: conflicts_with.is_some(),
                conflicts_with,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn proposal(id: &str, new_label: &str) -> ProposedLabel {
        ProposedLabel {
            entity_id: id.into(),
            old_label: format!("old-{id}"),
            new_label: new_label.into(),
        }
    }

    #[test]
    fn distinct_labels_have_no_conflicts() {
        let out = validate(vec![proposal("a", "A1"), proposal("b", "A2")], NONE);
        assert!(out.iter().all(|e| !e.conflict));
        assert_eq!(out[1].old_label, "old-b");
    }

    #[test]
    fn second_duplicate_is_flagged_not_first() {
        let out = validate(
            vec![proposal("a", "A1"), proposal("b", "A1"), proposal("c", "A1")],
            NONE,
        );
        assert!(!out[0].conflict);
        assert!(out[1].conflict);
        assert!(out[2].conflict);
        assert_eq!(
            out[2].conflicts_with,
            Some(ConflictSource::Batch("a".into()))
        );
    }

    #[test]
    fn comparison_ignores_case() {
        let out = validate(vec![proposal("a", "bay-1"), proposal("b", "BAY-1")], NONE);
        assert!(out[1].conflict);
    }

    #[test]
    fn frozen_label_conflicts_with_first_proposal() {
        let out = validate(vec![proposal("a", "Dock")], ["DOCK"]);
        assert!(out[0].conflict);
        assert_eq!(out[0].conflicts_with, Some(ConflictSource::Frozen));
    }

    #[test]
    fn flagged_entries_are_kept_in_order() {
        let out = validate(
            vec![proposal("a", "X"), proposal("b", "X"), proposal("c", "Y")],
            NONE,
        );
        let ids: Vec<&str> = out.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn is_change_compares_labels_exactly() {
        let out = validate(
            vec![
                ProposedLabel {
                    entity_id: "a".into(),
                    old_label: "R1".into(),
                    new_label: "R1".into(),
                },
                ProposedLabel {
                    entity_id: "b".into(),
                    old_label: "r2".into(),
                    new_label: "R2".into(),
                },
            ],
            NONE,
        );
        assert!(!out[0].is_change());
        assert!(out[1].is_change());
    }

    #[test]
    fn used_labels_record_claims_in_order() {
        let mut used = UsedLabels::with_frozen(["Q", "q", "Z"]);
        assert_eq!(used.len(), 2);
        assert_eq!(used.claim("new", &"e1".into()), None);
        assert_eq!(used.claim("NEW", &"e2".into()), Some(ConflictSource::Batch("e1".into())));
        assert!(used.contains("z"));
        let keys: Vec<&str> = used.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["q", "z", "new"]);
    }

    #[test]
    fn empty_batch_yields_nothing() {
        assert!(validate(Vec::<ProposedLabel>::new(), ["A"]).is_empty());
    }
}
