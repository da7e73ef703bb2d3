use super::label::GenerationLabel;
use super::structure::Structure;
use std::collections::{HashMap, HashSet};

/// The per-label accumulation of discovered species.
///
/// Maps each [`GenerationLabel`] to a set of structures deduplicated by
/// structural identity. The pool only grows: structures are inserted by
/// seeding or by stage runs and never removed, so any two reads of the
/// same label observe consistent (monotonically non-decreasing) sets.
#[derive(Debug, Clone)]
pub struct SpeciesPool<S: Structure> {
    sets: HashMap<GenerationLabel, HashSet<S>>,
    empty: HashSet<S>,
}

impl<S: Structure> SpeciesPool<S> {
    pub fn new() -> Self {
        Self {
            sets: HashMap::new(),
            empty: HashSet::new(),
        }
    }

    /// Adds `structure` under `label` unless a structurally-equal member is
    /// already present. Returns `true` if the structure was newly inserted.
    ///
    /// Duplicate insertion is a silent no-op, never an error.
    pub fn insert(&mut self, label: impl Into<GenerationLabel>, structure: S) -> bool {
        self.sets.entry(label.into()).or_default().insert(structure)
    }

    /// The current set for `label`, or the empty set if the label has never
    /// been populated. Unknown labels are not an error; later stages of an
    /// exploratory run may simply not have run yet.
    pub fn get(&self, label: &GenerationLabel) -> &HashSet<S> {
        self.sets.get(label).unwrap_or(&self.empty)
    }

    /// The deduplicated union of the sets under `labels`.
    ///
    /// Stored sets are untouched; a structure equal to one already counted
    /// is not double-counted even when it appears under several labels.
    pub fn union(&self, labels: &[GenerationLabel]) -> HashSet<S> {
        let mut out = HashSet::new();
        for label in labels {
            out.extend(self.get(label).iter().cloned());
        }
        out
    }

    /// Number of structures currently stored under `label`.
    #[inline]
    pub fn len(&self, label: &GenerationLabel) -> usize {
        self.get(label).len()
    }

    #[inline]
    pub fn contains(&self, label: &GenerationLabel, structure: &S) -> bool {
        self.get(label).contains(structure)
    }

    /// All labels that have been populated so far, in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = &GenerationLabel> {
        self.sets.keys()
    }

    /// Total structure count across all labels (structures stored under two
    /// labels count twice; this is a diagnostic, not a species census).
    pub fn total(&self) -> usize {
        self.sets.values().map(HashSet::len).sum()
    }
}

impl<S: Structure> Default for SpeciesPool<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structure::testing::{decane, hydrogen_atom, FakeStructure};
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_is_idempotent() {
        let mut pool = SpeciesPool::new();
        assert!(pool.insert("fuel", decane()));
        assert!(!pool.insert("fuel", decane()));
        assert_eq!(pool.len(&"fuel".into()), 1);
    }

    #[test]
    fn get_unknown_label_is_empty_not_an_error() {
        let pool: SpeciesPool<FakeStructure> = SpeciesPool::new();
        assert!(pool.get(&"O2QOOH".into()).is_empty());
        assert_eq!(pool.len(&"O2QOOH".into()), 0);
    }

    #[test]
    fn union_deduplicates_across_labels() {
        let mut pool = SpeciesPool::new();
        pool.insert("fuel", decane());
        pool.insert("H", hydrogen_atom());
        // The same species also filed under a second label.
        pool.insert("H", decane());

        let merged = pool.union(&["fuel".into(), "H".into()]);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains(&decane()));
        assert!(merged.contains(&hydrogen_atom()));
    }

    #[test]
    fn union_does_not_mutate_stored_sets() {
        let mut pool = SpeciesPool::new();
        pool.insert("fuel", decane());
        pool.insert("H", hydrogen_atom());

        let mut merged = pool.union(&["fuel".into(), "H".into()]);
        merged.clear();

        assert_eq!(pool.len(&"fuel".into()), 1);
        assert_eq!(pool.len(&"H".into()), 1);
    }

    #[test]
    fn union_of_unknown_labels_is_empty() {
        let pool: SpeciesPool<FakeStructure> = SpeciesPool::new();
        assert!(pool.union(&["R".into(), "ROO".into()]).is_empty());
    }

    #[test]
    fn pool_only_grows() {
        let mut pool = SpeciesPool::new();
        pool.insert("R", FakeStructure::new("CC[CH2]", "C3H7"));
        let before: Vec<_> = pool.get(&"R".into()).iter().cloned().collect();

        pool.insert("R", FakeStructure::new("C[CH]C", "C3H7"));
        for s in &before {
            assert!(pool.contains(&"R".into(), s));
        }
        assert_eq!(pool.len(&"R".into()), 2);
    }

    #[test]
    fn total_counts_every_label() {
        let mut pool = SpeciesPool::new();
        pool.insert("fuel", decane());
        pool.insert("H", hydrogen_atom());
        assert_eq!(pool.total(), 2);
        assert_eq!(pool.labels().count(), 2);
    }
}
