use crate::{ItemId, Size};

/// A lightweight, serializable snapshot of the list's view state.
///
/// It captures what the user sees (viewport, scroll offset, selection) without any visuals or
/// item data, which makes it suitable for restoring a list across sessions or rebuilds.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    pub viewport: Size,
    pub offset: u64,
    pub selected: Option<ItemId>,
}
