//! Ordered click-selection over tweet ids.

use super::tweet::TweetId;

/// The set of currently selected tweets, newest-clicked first.
///
/// Membership is by id, so the selection survives re-layouts and even data
/// reloads; ids that no longer resolve against the loaded set are simply
/// skipped by whoever renders the selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    order: Vec<TweetId>,
}

impl Selection {
    /// Toggle membership of `id`: remove it when present, otherwise prepend
    /// it. Returns `true` when the id is selected afterwards.
    pub fn toggle(&mut self, id: TweetId) -> bool {
        if let Some(pos) = self.order.iter().position(|s| *s == id) {
            self.order.remove(pos);
            false
        } else {
            self.order.insert(0, id);
            true
        }
    }

    pub fn contains(&self, id: &TweetId) -> bool {
        self.order.iter().any(|s| s == id)
    }

    /// Selected ids, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &TweetId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop everything. Reloading data does NOT call this; clearing is an
    /// explicit user action.
    pub fn clear(&mut self) {
        self.order.clear();
    }
}
