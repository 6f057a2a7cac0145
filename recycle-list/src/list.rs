use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::pool::{Pool, Slot};
use crate::{
    Align, Changes, ItemId, ListOptions, ListState, Selection, Size, SlotId, VisibleRange,
    VisibleRow, Visual,
};

/// A headless virtualized list.
///
/// The list materializes only the rows that fit in its viewport. Row visuals come from a small
/// pool that is filled lazily through the template factory and then recycled: when the viewport
/// scrolls, slots whose item left the window are rebound to the items that entered it.
///
/// It is UI-agnostic:
/// - Your adapter feeds it viewport sizes, scroll deltas and pointer interactions.
/// - It owns the visuals, never the item data.
/// - It reports state changes through `on_change` so the host can repaint or relayout.
///
/// See the `recycle-list-adapter` crate for an event-driven wrapper.
#[derive(Clone, Debug)]
pub struct RecycleList<V> {
    options: ListOptions<V>,
    viewport: Size,
    offset: u64,
    len: usize,
    template_min: Option<Size>,

    pool: Pool<V>,
    window: Vec<VisibleRow>, // ascending by index
    selection: Selection,

    notify_depth: Cell<usize>,
    notify_pending: Cell<Changes>,
}

impl<V: Visual> RecycleList<V> {
    /// Creates a new list. No visual is built until the first layout.
    pub fn new(options: ListOptions<V>) -> Self {
        rdebug!(
            configured = options.is_configured(),
            overscan = options.overscan,
            row_gap = options.row_gap,
            "RecycleList::new"
        );
        let mut list = Self {
            options,
            viewport: Size::ZERO,
            offset: 0,
            len: 0,
            template_min: None,
            pool: Pool::new(),
            window: Vec::new(),
            selection: Selection::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(Changes::NONE),
        };
        list.len = list.data_len();
        list
    }

    pub fn options(&self) -> &ListOptions<V> {
        &self.options
    }

    /// Replaces the options and refreshes the list.
    ///
    /// Replacing the template factory discards the pool: visuals built by the old factory are
    /// dropped and the new factory fills the pool again on the next layout.
    pub fn set_options(&mut self, options: ListOptions<V>) {
        let factory_changed = !same_callback(&self.options.create_item, &options.create_item);
        self.options = options;
        rdebug!(
            configured = self.options.is_configured(),
            overscan = self.options.overscan,
            factory_changed,
            "RecycleList::set_options"
        );

        if factory_changed {
            self.pool = Pool::new();
            self.window.clear();
            self.template_min = None;
        }

        let prev_offset = self.offset;
        self.selection.truncate(self.data_len());
        let mut changes = Changes::OPTIONS | self.apply_layout(true);
        if self.offset != prev_offset {
            changes |= Changes::SCROLL;
        }
        self.notify(changes);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions<V>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Swaps the data-length provider and refreshes.
    pub fn set_length(&mut self, length: impl Fn() -> usize + Send + Sync + 'static) {
        self.update_options(|o| o.length = Some(Arc::new(length)));
    }

    /// Swaps the item-update callback and refreshes.
    pub fn set_update_item(
        &mut self,
        update_item: impl Fn(ItemId, &mut V) + Send + Sync + 'static,
    ) {
        self.update_options(|o| o.update_item = Some(Arc::new(update_item)));
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&RecycleList<V>, Changes) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.apply_geometry_option();
    }

    pub fn set_row_gap(&mut self, row_gap: u32) {
        if self.options.row_gap == row_gap {
            return;
        }
        self.options.row_gap = row_gap;
        self.apply_geometry_option();
    }

    pub fn set_row_height(&mut self, row_height: Option<u32>) {
        if self.options.row_height == row_height {
            return;
        }
        self.options.row_height = row_height;
        self.apply_geometry_option();
    }

    fn apply_geometry_option(&mut self) {
        let prev_offset = self.offset;
        let mut changes = Changes::OPTIONS | self.apply_layout(false);
        if self.offset != prev_offset {
            changes |= Changes::SCROLL;
        }
        self.notify(changes);
    }

    fn notify_now(&self, changes: Changes) {
        if let Some(cb) = &self.options.on_change {
            cb(self, changes);
        }
    }

    fn notify(&self, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(self.notify_pending.get() | changes);
            return;
        }
        self.notify_now(changes);
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// The notification carries the union of every change made inside `f`, which is also
    /// returned. Nested calls return `Changes::NONE` and leave reporting to the outermost one.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) -> Changes {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next > 0 {
            return Changes::NONE;
        }
        let pending = self.notify_pending.replace(Changes::NONE);
        if !pending.is_empty() {
            self.notify_now(pending);
        }
        pending
    }

    /// Whether the length, factory and update callbacks are all present.
    pub fn is_configured(&self) -> bool {
        self.options.is_configured()
    }

    /// Item count the current window was laid out for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Queries the data source. An unconfigured list always reports zero items.
    pub fn data_len(&self) -> usize {
        if !self.options.is_configured() {
            return 0;
        }
        self.options.length.as_ref().map_or(0, |length| length())
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Minimum size of the template, if one has been measured.
    pub fn template_min_size(&self) -> Option<Size> {
        self.template_min
    }

    /// Height of one row. At least 1, even for a zero-height template.
    pub fn row_height(&self) -> u32 {
        self.options
            .row_height
            .unwrap_or_else(|| self.template_min.map_or(0, |s| s.height))
            .max(1)
    }

    pub fn row_gap(&self) -> u32 {
        self.options.row_gap
    }

    /// Distance between the tops of two consecutive rows.
    pub fn pitch(&self) -> u64 {
        self.row_height() as u64 + self.options.row_gap as u64
    }

    /// Height of the full, unmaterialized content.
    pub fn content_height(&self) -> u64 {
        if self.len == 0 {
            return 0;
        }
        (self.len as u64)
            .saturating_mul(self.pitch())
            .saturating_sub(self.options.row_gap as u64)
    }

    pub fn max_offset(&self) -> u64 {
        self.content_height()
            .saturating_sub(self.viewport.height as u64)
    }

    pub fn clamp_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_offset())
    }

    /// Largest number of rows the current viewport can materialize.
    pub fn capacity(&self) -> usize {
        self.capacity_for(self.viewport.height)
    }

    /// `ceil(viewport_height / pitch) + overscan`, or zero for an empty viewport.
    pub fn capacity_for(&self, viewport_height: u32) -> usize {
        if viewport_height == 0 {
            return 0;
        }
        let rows = (viewport_height as u64).div_ceil(self.pitch());
        (rows as usize).saturating_add(self.options.overscan)
    }

    /// Index range for a given offset and viewport height, using the current length.
    pub fn visible_range_for(&self, offset: u64, viewport_height: u32) -> VisibleRange {
        if self.len == 0 || viewport_height == 0 {
            return VisibleRange::EMPTY;
        }
        let max_offset = self
            .content_height()
            .saturating_sub(viewport_height as u64);
        let first = (offset.min(max_offset) / self.pitch()) as usize;
        let start_index = first.min(self.len);
        let end_index = start_index
            .saturating_add(self.capacity_for(viewport_height))
            .min(self.len);
        VisibleRange {
            start_index,
            end_index,
        }
    }

    /// Index range of the materialized window.
    pub fn visible_range(&self) -> VisibleRange {
        match (self.window.first(), self.window.last()) {
            (Some(first), Some(last)) => VisibleRange {
                start_index: first.index,
                end_index: last.index + 1,
            },
            _ => VisibleRange::EMPTY,
        }
    }

    /// The materialized window, ordered by item index.
    pub fn visible_rows(&self) -> &[VisibleRow] {
        &self.window
    }

    /// Iterates the window together with the slot bound to each row.
    pub fn iter_visible(&self) -> impl Iterator<Item = (VisibleRow, &Slot<V>)> + '_ {
        self.window
            .iter()
            .filter_map(|row| self.pool.get(row.slot).map(|slot| (*row, slot)))
    }

    /// Number of visuals built so far. Equals the number of template factory calls.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn slot(&self, slot: SlotId) -> Option<&Slot<V>> {
        self.pool.get(slot)
    }

    pub fn slot_for_index(&self, index: ItemId) -> Option<SlotId> {
        self.window
            .binary_search_by_key(&index, |row| row.index)
            .ok()
            .map(|pos| self.window[pos].slot)
    }

    pub fn visual_for_index(&self, index: ItemId) -> Option<&V> {
        let slot = self.slot_for_index(index)?;
        self.pool.get(slot).map(Slot::visual)
    }

    /// Content-space top of an item.
    pub fn item_top(&self, index: ItemId) -> Option<u64> {
        if index >= self.len {
            return None;
        }
        Some((index as u64).saturating_mul(self.pitch()))
    }

    /// Maps a viewport-relative `y` to the item under it.
    ///
    /// Returns `None` for positions inside a row gap or past the last item.
    pub fn index_at_position(&self, y: u64) -> Option<ItemId> {
        let abs = self.offset.saturating_add(y);
        if abs >= self.content_height() {
            return None;
        }
        let pitch = self.pitch();
        let index = (abs / pitch) as usize;
        if index >= self.len || abs % pitch >= self.row_height() as u64 {
            return None;
        }
        Some(index)
    }

    /// Slot showing the item under a viewport-relative `y`, if it is materialized.
    pub fn slot_at_position(&self, y: u64) -> Option<SlotId> {
        self.index_at_position(y)
            .and_then(|index| self.slot_for_index(index))
    }

    /// Reports `max(template minimum size, viewport minimum size)`.
    ///
    /// Measuring the template may build the first pool slot.
    pub fn min_size(&mut self) -> Size {
        self.ensure_template();
        self.template_min
            .unwrap_or_default()
            .max(self.options.min_viewport_size)
    }

    /// Lays the list out for `offset` and `viewport`, and returns the new window.
    ///
    /// `offset` is clamped to `[0, max_offset]`.
    pub fn layout(&mut self, offset: u64, viewport: Size) -> &[VisibleRow] {
        let prev_offset = self.offset;
        let mut changes = Changes::NONE;
        if self.viewport != viewport {
            self.viewport = viewport;
            changes |= Changes::VIEWPORT;
        }
        self.offset = offset;
        changes |= self.apply_layout(false);
        if self.offset != prev_offset {
            changes |= Changes::SCROLL;
        }
        self.notify(changes);
        &self.window
    }

    /// Lays the list out again with the current offset and viewport.
    pub fn relayout(&mut self) {
        let prev_offset = self.offset;
        let mut changes = self.apply_layout(false);
        if self.offset != prev_offset {
            changes |= Changes::SCROLL;
        }
        self.notify(changes);
    }

    pub fn resize(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        rtrace!(
            width = viewport.width,
            height = viewport.height,
            "RecycleList::resize"
        );
        let offset = self.offset;
        self.layout(offset, viewport);
    }

    /// Re-queries the data source and rebinds every visible row.
    ///
    /// The offset is clamped to the new content height and selections past the new end are
    /// dropped before anything is rebound, so no slot is ever left pointing at a removed item.
    pub fn refresh(&mut self) {
        let prev_offset = self.offset;
        let len = self.data_len();
        let evicted = self.selection.truncate(len);
        if !evicted.is_empty() {
            rdebug!(len, evicted = evicted.len(), "refresh: dropped selections past end");
        }

        let mut changes = Changes::DATA | self.apply_layout(true);
        if !evicted.is_empty() {
            changes |= Changes::SELECTION;
        }
        if self.offset != prev_offset {
            changes |= Changes::SCROLL;
        }
        rtrace!(
            len = self.len,
            offset = self.offset,
            rows = self.window.len(),
            "RecycleList::refresh"
        );
        self.notify(changes);
    }

    /// Scrolls by a wheel-style delta: a negative `delta` moves further down the content.
    ///
    /// Returns the new (clamped) offset.
    pub fn scroll_by(&mut self, delta: i64) -> u64 {
        let target = if delta < 0 {
            self.offset.saturating_add(delta.unsigned_abs())
        } else {
            self.offset.saturating_sub(delta as u64)
        };
        self.scroll_to_offset(target)
    }

    /// Returns the new (clamped) offset.
    pub fn scroll_to_offset(&mut self, offset: u64) -> u64 {
        let viewport = self.viewport;
        self.layout(offset, viewport);
        self.offset
    }

    pub fn scroll_to_top(&mut self) -> u64 {
        self.scroll_to_offset(0)
    }

    pub fn scroll_to_bottom(&mut self) -> u64 {
        self.scroll_to_offset(u64::MAX)
    }

    /// Scrolls so that `index` is aligned as requested. Returns the new offset.
    pub fn scroll_to_index(&mut self, index: ItemId, align: Align) -> u64 {
        let target = self.scroll_to_index_offset(index, align);
        self.scroll_to_offset(target)
    }

    /// Computes the offset `scroll_to_index` would apply, without scrolling.
    pub fn scroll_to_index_offset(&self, index: ItemId, align: Align) -> u64 {
        if self.len == 0 {
            return 0;
        }
        let index = index.min(self.len - 1);
        let top = (index as u64).saturating_mul(self.pitch());
        let bottom = top.saturating_add(self.row_height() as u64);
        let view = self.viewport.height as u64;

        let target = match align {
            Align::Start => top,
            Align::End => bottom.saturating_sub(view),
            Align::Center => top
                .saturating_add(self.row_height() as u64 / 2)
                .saturating_sub(view / 2),
            Align::Auto => {
                let cur = self.offset;
                if top < cur {
                    top
                } else if bottom > cur.saturating_add(view) {
                    bottom.saturating_sub(view)
                } else {
                    cur
                }
            }
        };

        self.clamp_offset(target)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selection.first()
    }

    pub fn is_selected(&self, index: ItemId) -> bool {
        self.selection.contains(index)
    }

    /// Selects `index`, replacing any previous selection, and scrolls it into view.
    ///
    /// Out-of-range indexes are ignored. The item does not need to be materialized.
    pub fn select(&mut self, index: ItemId) {
        let len = self.data_len();
        if index >= len {
            rtrace!(index, len, "select: index out of range, ignored");
            return;
        }
        if self.selection.len() == 1 && self.selection.contains(index) {
            return;
        }

        let mut prev = Vec::new();
        self.batch_update(|l| {
            if l.len != len {
                l.relayout();
            }
            prev.extend(l.selection.replace(index));
            for &p in &prev {
                l.set_row_selected(p, false);
            }
            l.set_row_selected(index, true);
            l.notify(Changes::SELECTION);
            l.scroll_to_index(index, Align::Auto);
        });
        rtrace!(index, offset = self.offset, "RecycleList::select");

        if let Some(cb) = self.options.on_unselected.clone() {
            for p in prev {
                cb(p);
            }
        }
        if let Some(cb) = self.options.on_selected.clone() {
            cb(index);
        }
    }

    /// Removes `index` from the selection. No-op when it is not selected.
    pub fn unselect(&mut self, index: ItemId) {
        if !self.selection.remove(index) {
            return;
        }
        self.set_row_selected(index, false);
        self.notify(Changes::SELECTION);
        if let Some(cb) = self.options.on_unselected.clone() {
            cb(index);
        }
    }

    pub fn unselect_all(&mut self) {
        let prev = self.selection.clear();
        if prev.is_empty() {
            return;
        }
        for &p in &prev {
            self.set_row_selected(p, false);
        }
        self.notify(Changes::SELECTION);
        if let Some(cb) = self.options.on_unselected.clone() {
            for p in prev {
                cb(p);
            }
        }
    }

    /// Selects the item shown by `slot`, as a tap on that row would.
    pub fn tap_slot(&mut self, slot: SlotId) {
        match self.pool.get(slot).and_then(Slot::index) {
            Some(index) => self.select(index),
            None => {
                rwarn!(slot = slot.0, "tap_slot: slot is not bound to an item");
            }
        }
    }

    /// Marks a bound slot as hovered. Returns `true` if its state changed.
    pub fn hover_slot(&mut self, slot: SlotId) -> bool {
        self.set_slot_hovered(slot, true)
    }

    /// Clears the hover mark of a slot. Returns `true` if its state changed.
    pub fn unhover_slot(&mut self, slot: SlotId) -> bool {
        self.set_slot_hovered(slot, false)
    }

    fn set_slot_hovered(&mut self, slot: SlotId, hovered: bool) -> bool {
        let Some(s) = self.pool.get_mut(slot) else {
            rwarn!(slot = slot.0, pool = self.pool.len(), "hover: unknown slot");
            return false;
        };
        if hovered && !s.is_attached() {
            return false;
        }
        let changed = s.set_hovered(hovered);
        if changed {
            self.notify(Changes::HOVER);
        }
        changed
    }

    /// Captures viewport, offset and selection.
    pub fn state(&self) -> ListState {
        ListState {
            viewport: self.viewport,
            offset: self.offset,
            selected: self.selection.first(),
        }
    }

    /// Restores a snapshot taken with [`Self::state`].
    ///
    /// The offset is clamped and an out-of-range selection is dropped. Selection callbacks do
    /// not fire.
    pub fn restore_state(&mut self, state: ListState) {
        let prev_offset = self.offset;
        let prev_selected = self.selection.first();
        let mut changes = Changes::NONE;

        let len = self.data_len();
        self.selection.clear();
        if let Some(index) = state.selected.filter(|&i| i < len) {
            self.selection.replace(index);
        }
        if self.viewport != state.viewport {
            self.viewport = state.viewport;
            changes |= Changes::VIEWPORT;
        }
        self.offset = state.offset;
        changes |= self.apply_layout(false);
        self.sync_selection_flags();

        if self.offset != prev_offset {
            changes |= Changes::SCROLL;
        }
        if self.selection.first() != prev_selected {
            changes |= Changes::SELECTION;
        }
        self.notify(changes);
    }

    fn set_row_selected(&mut self, index: ItemId, selected: bool) {
        let Some(slot) = self.slot_for_index(index) else {
            return;
        };
        if let Some(s) = self.pool.get_mut(slot) {
            s.set_selected(selected);
        }
    }

    fn sync_selection_flags(&mut self) {
        for row in &self.window {
            if let Some(s) = self.pool.get_mut(row.slot) {
                s.set_selected(self.selection.contains(row.index));
            }
        }
    }

    fn ensure_template(&mut self) {
        if self.template_min.is_some() {
            return;
        }
        if let Some(first) = self.pool.first() {
            self.template_min = Some(first.visual().min_size());
            return;
        }
        self.create_slot();
    }

    fn create_slot(&mut self) -> Option<SlotId> {
        let create = self.options.create_item.clone()?;
        let visual = create();
        if self.template_min.is_none() {
            self.template_min = Some(visual.min_size());
        }
        let slot = self.pool.push(visual);
        rdebug!(slot = slot.0, "created pool slot");
        Some(slot)
    }

    fn bind(&mut self, slot: SlotId, index: ItemId) {
        let selected = self.selection.contains(index);
        let Some(update) = self.options.update_item.clone() else {
            return;
        };
        let Some(s) = self.pool.get_mut(slot) else {
            return;
        };
        update(index, s.visual_mut());
        s.bind(index, selected);
    }

    /// Re-queries the length, clamps the offset and recycles slots into the new window.
    ///
    /// With `rebind_all`, rows that stay in the window are rebound too, so every visible row
    /// gets exactly one update call. Reports `DATA` when the length changed.
    fn apply_layout(&mut self, rebind_all: bool) -> Changes {
        let prev_len = self.len;
        self.len = self.data_len();
        if self.is_configured() {
            self.ensure_template();
        }
        self.offset = self.clamp_offset(self.offset);
        let range = self.visible_range_for(self.offset, self.viewport.height);
        rtrace!(
            offset = self.offset,
            start = range.start_index,
            end = range.end_index,
            len = self.len,
            "apply_layout"
        );

        let prev_window = core::mem::take(&mut self.window);
        let mut in_use = vec![false; self.pool.len()];
        for row in &prev_window {
            if !range.contains(row.index) {
                continue;
            }
            if let Some(flag) = in_use.get_mut(row.slot.0) {
                *flag = true;
            }
        }
        let mut free = (0..in_use.len())
            .filter(|&i| !in_use[i])
            .map(SlotId)
            .collect::<Vec<_>>()
            .into_iter();

        let mut window = Vec::with_capacity(range.len());
        for index in range.start_index..range.end_index {
            let kept = prev_window
                .binary_search_by_key(&index, |row| row.index)
                .ok()
                .map(|pos| prev_window[pos].slot);
            let slot = match kept {
                Some(slot) => {
                    if rebind_all {
                        self.bind(slot, index);
                    }
                    slot
                }
                None => {
                    let Some(slot) = free.next().or_else(|| self.create_slot()) else {
                        rwarn!(index, "apply_layout: no template factory, window truncated");
                        break;
                    };
                    self.bind(slot, index);
                    slot
                }
            };
            window.push(VisibleRow { index, slot });
        }

        for slot in free {
            if let Some(s) = self.pool.get_mut(slot) {
                if s.is_attached() {
                    s.detach();
                }
            }
        }
        self.window = window;

        if self.len != prev_len {
            Changes::DATA
        } else {
            Changes::NONE
        }
    }
}

fn same_callback<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
