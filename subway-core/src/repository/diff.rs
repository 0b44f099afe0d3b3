//! Row diffing for line updates.

use std::collections::HashSet;

use super::entities::SectionEntity;

/// The row changes an update must apply: rows to insert and rows to
/// delete. Rows present on both sides are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionDiff {
    added: Vec<SectionEntity>,
    removed: Vec<SectionEntity>,
}

impl SectionDiff {
    /// Symmetric difference between `stored` and `current`, keeping
    /// each side's row order.
    pub fn between(stored: &[SectionEntity], current: &[SectionEntity]) -> Self {
        let stored_set: HashSet<&SectionEntity> = stored.iter().collect();
        let current_set: HashSet<&SectionEntity> = current.iter().collect();

        let added = current
            .iter()
            .filter(|row| !stored_set.contains(*row))
            .cloned()
            .collect();
        let removed = stored
            .iter()
            .filter(|row| !current_set.contains(*row))
            .cloned()
            .collect();
        SectionDiff { added, removed }
    }

    /// Rows present only in the current line.
    pub fn added(&self) -> &[SectionEntity] {
        &self.added
    }

    /// Rows present only in storage.
    pub fn removed(&self) -> &[SectionEntity] {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
