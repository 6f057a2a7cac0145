use crate::{Highlight, Size};

/// A row visual that can live in the recycled pool.
///
/// Visuals are built by the template factory and then rebound to different items as the list
/// scrolls. The engine only needs two things from them: how large the template wants to be,
/// and a place to show the interaction highlight. Everything else (text, icons, painting) is
/// done by the item-update callback and the host toolkit.
pub trait Visual {
    /// Minimum size of the visual. Measured once, on the first visual the factory builds.
    fn min_size(&self) -> Size;

    /// Called whenever the slot's highlight changes, including on every (re)bind.
    fn set_highlight(&mut self, highlight: Highlight) {
        let _ = highlight;
    }
}
