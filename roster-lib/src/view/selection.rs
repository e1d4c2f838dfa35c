//! Row selection tracked by member id.

use std::collections::HashSet;

use crate::model::MemberId;

/// Tracks selected members by their ids.
///
/// Membership never depends on which page a member is projected onto, so a
/// selection survives re-slicing, searching and paging unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<MemberId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected.contains(id)
    }

    /// Toggle selection for an id. Returns true if the id is now selected.
    pub fn toggle(&mut self, id: MemberId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Remove a single id. Returns true if it was selected.
    pub fn remove(&mut self, id: &MemberId) -> bool {
        self.selected.remove(id)
    }

    /// Replace the whole selection.
    pub fn replace<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = MemberId>,
    {
        self.selected = ids.into_iter().collect();
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get all selected ids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &MemberId> {
        self.selected.iter()
    }
}
