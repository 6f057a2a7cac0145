//! Adapter utilities for the `recycle-list` crate.
//!
//! The `recycle-list` crate is UI-agnostic and focuses on recycling, geometry and selection
//! state. This crate turns host input into engine calls:
//!
//! - A [`ListEvent`] enum covering resize, wheel scroll, pointer and data events
//! - A [`Controller`] that hit-tests pointer positions, turns press+release into taps and keeps
//!   a single hovered row
//! - A [`Response`] telling the host whether to repaint or relayout
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod event;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use event::{ListEvent, Response};
