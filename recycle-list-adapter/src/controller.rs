use recycle_list::{ItemId, ListOptions, RecycleList, Size, Visual};

use crate::{ListEvent, Response};

/// A framework-neutral controller that wraps a `recycle_list::RecycleList` and turns host
/// input into engine calls.
///
/// This type does not hold any UI objects. Adapters drive it by forwarding every input event
/// to [`Controller::handle`] and acting on the returned [`Response`]:
/// - `relayout`: the content height or viewport changed, re-run the host layout
/// - `repaint`: rows were rebound, scrolled or re-highlighted
///
/// Pointer handling follows the usual widget conventions: press and release over the same row
/// is a tap (which selects it, materialized or not), and at most one row is hovered at a time.
#[derive(Clone, Debug)]
pub struct Controller<V> {
    list: RecycleList<V>,
    pressed: Option<ItemId>,
    hovered: Option<ItemId>,
    pointer_y: Option<u64>,
}

impl<V: Visual> Controller<V> {
    pub fn new(options: ListOptions<V>) -> Self {
        Self::from_list(RecycleList::new(options))
    }

    pub fn from_list(list: RecycleList<V>) -> Self {
        Self {
            list,
            pressed: None,
            hovered: None,
            pointer_y: None,
        }
    }

    pub fn list(&self) -> &RecycleList<V> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut RecycleList<V> {
        &mut self.list
    }

    pub fn into_list(self) -> RecycleList<V> {
        self.list
    }

    /// The item under the pointer, if any.
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    /// The item a pointer press started on and that has not been released yet.
    pub fn pressed(&self) -> Option<ItemId> {
        self.pressed
    }

    /// Minimum size to report to the host layout.
    pub fn min_size(&mut self) -> Size {
        self.list.min_size()
    }

    /// Applies one input event and reports what the host has to redo.
    pub fn handle(&mut self, event: ListEvent) -> Response {
        let mut hover = self.hovered;
        let mut pressed = self.pressed;
        let mut pointer_y = self.pointer_y;

        let changes = self.list.batch_update(|list| {
            match event {
                ListEvent::Resize(size) => list.resize(size),
                ListEvent::Scroll { delta } => {
                    list.scroll_by(delta);
                }
                ListEvent::PointerDown { y } => {
                    pressed = list.index_at_position(y);
                }
                ListEvent::PointerUp { y } => {
                    let released = list.index_at_position(y);
                    if let Some(index) = pressed.take().filter(|&down| Some(down) == released) {
                        list.select(index);
                    }
                }
                ListEvent::PointerMove { y } => pointer_y = Some(y),
                ListEvent::PointerLeave => {
                    pointer_y = None;
                    pressed = None;
                }
                ListEvent::Refresh => list.refresh(),
                ListEvent::Select(index) => list.select(index),
                ListEvent::Unselect(index) => list.unselect(index),
                ListEvent::UnselectAll => list.unselect_all(),
            }
            // Any of the above may have moved the content under a resting pointer.
            rehover(list, &mut hover, pointer_y);
        });

        self.hovered = hover;
        self.pressed = pressed;
        self.pointer_y = pointer_y;
        Response::from_changes(changes)
    }
}

/// Moves the hover mark to the row under `pointer_y`.
///
/// The previously hovered row may have been recycled since it was marked; its slot already
/// dropped the mark in that case.
fn rehover<V: Visual>(
    list: &mut RecycleList<V>,
    hovered: &mut Option<ItemId>,
    pointer_y: Option<u64>,
) {
    let target = pointer_y.and_then(|y| list.index_at_position(y));
    let prev = *hovered;
    if let Some(slot) = prev.and_then(|index| list.slot_for_index(index)) {
        if target != prev {
            list.unhover_slot(slot);
        }
    }
    *hovered = target;
    if let Some(slot) = target.and_then(|index| list.slot_for_index(index)) {
        list.hover_slot(slot);
    }
}
