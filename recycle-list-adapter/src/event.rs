use recycle_list::{Changes, ItemId, Size};

/// Input the host forwards to a [`crate::Controller`].
///
/// Pointer positions are viewport-relative, with `y = 0` at the top edge of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListEvent {
    Resize(Size),
    /// Wheel-style scroll: a negative `delta` moves further down the content.
    Scroll {
        delta: i64,
    },
    PointerDown {
        y: u64,
    },
    PointerUp {
        y: u64,
    },
    PointerMove {
        y: u64,
    },
    PointerLeave,
    /// The data source changed.
    Refresh,
    Select(ItemId),
    Unselect(ItemId),
    UnselectAll,
}

/// What the host has to do after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    pub repaint: bool,
    pub relayout: bool,
    pub changes: Changes,
}

impl Response {
    pub fn from_changes(changes: Changes) -> Self {
        Self {
            repaint: !changes.is_empty(),
            relayout: changes.needs_relayout(),
            changes,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.repaint && !self.relayout
    }
}
