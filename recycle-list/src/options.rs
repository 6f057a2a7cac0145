use alloc::sync::Arc;

use crate::list::RecycleList;
use crate::{Changes, ItemId, Size};

/// Returns the current number of items in the data source.
pub type LengthFn = Arc<dyn Fn() -> usize + Send + Sync>;

/// Builds one fresh row visual (the item template).
pub type CreateItemFn<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// Populates a recycled visual with the data of item `id`.
///
/// May be called many times for the same `(id, visual)` pair, so it must only mutate `visual`.
pub type UpdateItemFn<V> = Arc<dyn Fn(ItemId, &mut V) + Send + Sync>;

/// A callback fired after state changes (possibly batched).
pub type OnChangeCallback<V> = Arc<dyn Fn(&RecycleList<V>, Changes) + Send + Sync>;

/// A callback fired when an item becomes selected or unselected.
pub type SelectionCallback = Arc<dyn Fn(ItemId) + Send + Sync>;

/// Configuration for [`crate::RecycleList`].
///
/// Closures are stored in `Arc`s so options stay cheap to clone: adapters can swap a single
/// callback and hand the result to `RecycleList::set_options`.
///
/// The default value has no data source at all. Such a list is inert: it stays empty, never
/// builds a visual and ignores selection requests.
pub struct ListOptions<V> {
    pub length: Option<LengthFn>,
    pub create_item: Option<CreateItemFn<V>>,
    pub update_item: Option<UpdateItemFn<V>>,

    /// Extra rows materialized after the last visible one.
    pub overscan: usize,

    /// Fixed row height. When `None`, the template's minimum height is used.
    pub row_height: Option<u32>,
    /// Separator space between two rows (not after the last row).
    pub row_gap: u32,

    /// Minimum size of the scrolling viewport, reported through `RecycleList::min_size`.
    pub min_viewport_size: Size,

    pub on_change: Option<OnChangeCallback<V>>,
    pub on_selected: Option<SelectionCallback>,
    pub on_unselected: Option<SelectionCallback>,
}

impl<V> Clone for ListOptions<V> {
    fn clone(&self) -> Self {
        Self {
            length: self.length.clone(),
            create_item: self.create_item.clone(),
            update_item: self.update_item.clone(),
            overscan: self.overscan,
            row_height: self.row_height,
            row_gap: self.row_gap,
            min_viewport_size: self.min_viewport_size,
            on_change: self.on_change.clone(),
            on_selected: self.on_selected.clone(),
            on_unselected: self.on_unselected.clone(),
        }
    }
}

impl<V> Default for ListOptions<V> {
    fn default() -> Self {
        Self {
            length: None,
            create_item: None,
            update_item: None,
            overscan: 1,
            row_height: None,
            row_gap: 0,
            min_viewport_size: Size::new(32, 32),
            on_change: None,
            on_selected: None,
            on_unselected: None,
        }
    }
}

impl<V> ListOptions<V> {
    /// Creates options from the three data-source callbacks.
    ///
    /// `create_item` is called once per pool slot, never once per item. `update_item` is called
    /// each time a slot is bound to an item and for every visible row on refresh.
    pub fn new(
        length: impl Fn() -> usize + Send + Sync + 'static,
        create_item: impl Fn() -> V + Send + Sync + 'static,
        update_item: impl Fn(ItemId, &mut V) + Send + Sync + 'static,
    ) -> Self {
        Self {
            length: Some(Arc::new(length)),
            create_item: Some(Arc::new(create_item)),
            update_item: Some(Arc::new(update_item)),
            ..Self::default()
        }
    }

    /// Whether all three data-source callbacks are present.
    pub fn is_configured(&self) -> bool {
        self.length.is_some() && self.create_item.is_some() && self.update_item.is_some()
    }

    pub fn with_length(mut self, length: impl Fn() -> usize + Send + Sync + 'static) -> Self {
        self.length = Some(Arc::new(length));
        self
    }

    pub fn with_create_item(mut self, create_item: impl Fn() -> V + Send + Sync + 'static) -> Self {
        self.create_item = Some(Arc::new(create_item));
        self
    }

    pub fn with_update_item(
        mut self,
        update_item: impl Fn(ItemId, &mut V) + Send + Sync + 'static,
    ) -> Self {
        self.update_item = Some(Arc::new(update_item));
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_row_height(mut self, row_height: Option<u32>) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_row_gap(mut self, row_gap: u32) -> Self {
        self.row_gap = row_gap;
        self
    }

    pub fn with_min_viewport_size(mut self, size: Size) -> Self {
        self.min_viewport_size = size;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&RecycleList<V>, Changes) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_selected(
        mut self,
        on_selected: Option<impl Fn(ItemId) + Send + Sync + 'static>,
    ) -> Self {
        self.on_selected = on_selected.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_unselected(
        mut self,
        on_unselected: Option<impl Fn(ItemId) + Send + Sync + 'static>,
    ) -> Self {
        self.on_unselected = on_unselected.map(|f| Arc::new(f) as _);
        self
    }
}

impl<V> core::fmt::Debug for ListOptions<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("length", &self.length.is_some())
            .field("create_item", &self.create_item.is_some())
            .field("update_item", &self.update_item.is_some())
            .field("overscan", &self.overscan)
            .field("row_height", &self.row_height)
            .field("row_gap", &self.row_gap)
            .field("min_viewport_size", &self.min_viewport_size)
            .finish_non_exhaustive()
    }
}
