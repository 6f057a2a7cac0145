use alloc::collections::BTreeSet;

use crate::ItemId;

/// The set of selected items.
///
/// Storage is set-shaped, but [`crate::RecycleList`] only ever keeps at most one entry in it:
/// selecting an item replaces the previous selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    items: BTreeSet<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, index: ItemId) -> bool {
        self.items.contains(&index)
    }

    /// The lowest selected index.
    pub fn first(&self) -> Option<ItemId> {
        self.items.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Makes `index` the only selected item and returns what was selected before it.
    pub(crate) fn replace(&mut self, index: ItemId) -> BTreeSet<ItemId> {
        let mut next = BTreeSet::new();
        next.insert(index);
        let mut prev = core::mem::replace(&mut self.items, next);
        prev.remove(&index);
        prev
    }

    pub(crate) fn remove(&mut self, index: ItemId) -> bool {
        self.items.remove(&index)
    }

    pub(crate) fn clear(&mut self) -> BTreeSet<ItemId> {
        core::mem::take(&mut self.items)
    }

    /// Drops every index `>= len` and returns the dropped indexes.
    pub(crate) fn truncate(&mut self, len: usize) -> BTreeSet<ItemId> {
        self.items.split_off(&len)
    }
}
