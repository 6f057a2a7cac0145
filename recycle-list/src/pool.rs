use alloc::vec::Vec;

use crate::{Highlight, ItemId, SlotId, Visual};

/// One reusable visual plus its current binding and interaction state.
#[derive(Clone, Debug)]
pub struct Slot<V> {
    visual: V,
    index: Option<ItemId>,
    selected: bool,
    hovered: bool,
}

impl<V: Visual> Slot<V> {
    fn new(visual: V) -> Self {
        Self {
            visual,
            index: None,
            selected: false,
            hovered: false,
        }
    }

    pub fn visual(&self) -> &V {
        &self.visual
    }

    /// The item this slot currently shows, or `None` when detached.
    pub fn index(&self) -> Option<ItemId> {
        self.index
    }

    pub fn is_attached(&self) -> bool {
        self.index.is_some()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn highlight(&self) -> Highlight {
        if self.selected {
            Highlight::Selected
        } else if self.hovered {
            Highlight::Hovered
        } else {
            Highlight::None
        }
    }

    pub(crate) fn visual_mut(&mut self) -> &mut V {
        &mut self.visual
    }

    /// Points the slot at `index`. Hover does not follow the slot to a different item.
    pub(crate) fn bind(&mut self, index: ItemId, selected: bool) {
        if self.index != Some(index) {
            self.hovered = false;
        }
        self.index = Some(index);
        self.selected = selected;
        self.sync_highlight();
    }

    pub(crate) fn detach(&mut self) {
        self.index = None;
        self.selected = false;
        self.hovered = false;
        self.sync_highlight();
    }

    /// Returns `true` if the flag changed.
    pub(crate) fn set_selected(&mut self, selected: bool) -> bool {
        if self.selected == selected {
            return false;
        }
        self.selected = selected;
        self.sync_highlight();
        true
    }

    /// Returns `true` if the flag changed.
    pub(crate) fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        self.sync_highlight();
        true
    }

    fn sync_highlight(&mut self) {
        let highlight = self.highlight();
        self.visual.set_highlight(highlight);
    }
}

/// The bounded set of visuals built by the template factory.
///
/// Slots are only ever appended; a slot lives as long as the pool.
#[derive(Clone, Debug)]
pub(crate) struct Pool<V> {
    slots: Vec<Slot<V>>,
}

impl<V: Visual> Pool<V> {
    pub(crate) fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn push(&mut self, visual: V) -> SlotId {
        let id = SlotId(self.slots.len());
        self.slots.push(Slot::new(visual));
        id
    }

    pub(crate) fn get(&self, slot: SlotId) -> Option<&Slot<V>> {
        self.slots.get(slot.0)
    }

    pub(crate) fn get_mut(&mut self, slot: SlotId) -> Option<&mut Slot<V>> {
        self.slots.get_mut(slot.0)
    }

    pub(crate) fn first(&self) -> Option<&Slot<V>> {
        self.slots.first()
    }
}
