//! A headless virtualized list engine.
//!
//! For event-driven wrappers (pointer tap tracking, repaint/relayout responses), see the
//! `recycle-list-adapter` crate.
//!
//! A list over a million items should cost the same as a list over ten: this crate materializes
//! only the rows that fit in the viewport, reuses a bounded pool of row visuals as the viewport
//! scrolls, and keeps the selection as plain indexes so it survives rows scrolling out of view.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a data source: item count, a row template factory and an item-update callback
//! - viewport size and scroll input
//! - a [`Visual`] implementation for its row widgets
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod list;
mod options;
mod pool;
mod selection;
mod state;
mod types;
mod visual;


pub use list::RecycleList;
pub use options::{
    CreateItemFn, LengthFn, ListOptions, OnChangeCallback, SelectionCallback, UpdateItemFn,
};
pub use pool::Slot;
pub use selection::Selection;
pub use state::ListState;
pub use types::{Align, Changes, Highlight, ItemId, Size, SlotId, VisibleRange, VisibleRow};
pub use visual::Visual;
