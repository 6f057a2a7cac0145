/// Index of an item in the data source.
///
/// Only stable while the data source is not mutated.
pub type ItemId = usize;

/// How to align an item inside the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Smallest scroll that brings the item fully into view (no scroll if it already is).
    Auto,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: ItemId,
    pub end_index: ItemId, // exclusive
}

impl VisibleRange {
    pub const EMPTY: VisibleRange = VisibleRange {
        start_index: 0,
        end_index: 0,
    };

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: ItemId) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Handle to one slot of the recycled-visual pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub usize);

/// One materialized row: an item index and the slot whose visual currently shows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRow {
    pub index: ItemId,
    pub slot: SlotId,
}

/// Interaction highlight the engine asks a visual to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Highlight {
    #[default]
    None,
    Hovered,
    Selected,
}

bitflags::bitflags! {
    /// Set of state changes reported to `on_change`.
    ///
    /// Several changes applied inside [`crate::RecycleList::batch_update`] are merged into one
    /// value.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Changes: u8 {
        /// The viewport was resized.
        const VIEWPORT = 1 << 0;
        /// The scroll offset moved.
        const SCROLL = 1 << 1;
        /// Data length or content was re-queried.
        const DATA = 1 << 2;
        const SELECTION = 1 << 3;
        const HOVER = 1 << 4;
        /// Options were replaced.
        const OPTIONS = 1 << 5;
    }
}

impl Changes {
    pub const NONE: Changes = Changes::empty();

    /// Whether the host has to lay the widget out again (not just repaint it).
    pub fn needs_relayout(self) -> bool {
        self.intersects(Changes::VIEWPORT.union(Changes::DATA).union(Changes::OPTIONS))
    }
}
