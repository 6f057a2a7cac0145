use crate::*;

use recycle_list::{Changes, Highlight, ItemId, ListOptions, Size, Visual};
use std::format;
use std::string::String;
use std::sync::{Arc, Mutex};
use std::vec::Vec;

#[derive(Clone, Debug, Default)]
struct Row {
    text: String,
    highlight: Highlight,
}

impl Visual for Row {
    fn min_size(&self) -> Size {
        Size::new(80, 20)
    }

    fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = highlight;
    }
}

fn controller(len: usize) -> (Arc<Mutex<usize>>, Controller<Row>) {
    let count = Arc::new(Mutex::new(len));
    let length = Arc::clone(&count);
    let options = ListOptions::new(
        move || *length.lock().unwrap(),
        Row::default,
        |id: ItemId, row: &mut Row| row.text = format!("row {id}"),
    )
    .with_overscan(0);
    let mut c = Controller::new(options);
    c.handle(ListEvent::Resize(Size::new(100, 100)));
    (count, c)
}

fn highlight(c: &Controller<Row>, index: ItemId) -> Option<Highlight> {
    c.list().visual_for_index(index).map(|r| r.highlight)
}

#[test]
fn resize_asks_for_relayout() {
    let (_count, mut c) = controller(50);
    let r = c.handle(ListEvent::Resize(Size::new(100, 200)));
    assert!(r.relayout);
    assert!(r.repaint);
    assert_eq!(c.list().visible_rows().len(), 10);

    let r = c.handle(ListEvent::Resize(Size::new(100, 200)));
    assert!(r.is_idle());
}

#[test]
fn scroll_only_repaints() {
    let (_count, mut c) = controller(50);
    let r = c.handle(ListEvent::Scroll { delta: -45 });
    assert!(r.repaint);
    assert!(!r.relayout);
    assert!(r.changes.contains(Changes::SCROLL));
    assert_eq!(c.list().offset(), 45);
    assert_eq!(c.list().visible_range().start_index, 2);

    // Already at the top.
    let r = c.handle(ListEvent::Scroll { delta: 1_000 });
    assert_eq!(c.list().offset(), 0);
    assert!(r.changes.contains(Changes::SCROLL));
    assert!(c.handle(ListEvent::Scroll { delta: 10 }).is_idle());
}

#[test]
fn press_and_release_on_the_same_row_selects_it() {
    let (_count, mut c) = controller(50);
    c.handle(ListEvent::PointerDown { y: 25 });
    assert_eq!(c.pressed(), Some(1));
    let r = c.handle(ListEvent::PointerUp { y: 39 });
    assert!(r.changes.contains(Changes::SELECTION));
    assert_eq!(c.list().selected(), Some(1));
    assert_eq!(highlight(&c, 1), Some(Highlight::Selected));
    assert_eq!(c.pressed(), None);
}

#[test]
fn release_on_another_row_is_not_a_tap() {
    let (_count, mut c) = controller(50);
    c.handle(ListEvent::PointerDown { y: 5 });
    let r = c.handle(ListEvent::PointerUp { y: 65 });
    assert!(r.is_idle());
    assert_eq!(c.list().selected(), None);
}

#[test]
fn pointer_below_the_data_hits_nothing() {
    let (_count, mut c) = controller(2);
    c.handle(ListEvent::PointerDown { y: 90 });
    assert_eq!(c.pressed(), None);
    c.handle(ListEvent::PointerUp { y: 90 });
    assert_eq!(c.list().selected(), None);
}

#[test]
fn hover_follows_the_pointer() {
    let (_count, mut c) = controller(50);
    let r = c.handle(ListEvent::PointerMove { y: 10 });
    assert!(r.changes.contains(Changes::HOVER));
    assert_eq!(c.hovered(), Some(0));
    assert_eq!(highlight(&c, 0), Some(Highlight::Hovered));

    c.handle(ListEvent::PointerMove { y: 30 });
    assert_eq!(c.hovered(), Some(1));
    assert_eq!(highlight(&c, 0), Some(Highlight::None));
    assert_eq!(highlight(&c, 1), Some(Highlight::Hovered));

    // Moving within the same row changes nothing.
    assert!(c.handle(ListEvent::PointerMove { y: 35 }).is_idle());

    c.handle(ListEvent::PointerLeave);
    assert_eq!(c.hovered(), None);
    assert_eq!(highlight(&c, 1), Some(Highlight::None));
}

#[test]
fn scrolling_under_a_still_pointer_moves_the_hover() {
    let (_count, mut c) = controller(50);
    c.handle(ListEvent::PointerMove { y: 10 });
    c.handle(ListEvent::Scroll { delta: -40 });
    assert_eq!(c.hovered(), Some(2));
    assert_eq!(highlight(&c, 2), Some(Highlight::Hovered));
    let hovered = c
        .list()
        .iter_visible()
        .filter(|(_, slot)| slot.is_hovered())
        .count();
    assert_eq!(hovered, 1);
}

#[test]
fn selecting_far_away_moves_the_hover_with_the_content() {
    let (_count, mut c) = controller(50);
    c.handle(ListEvent::PointerMove { y: 10 });
    assert_eq!(c.hovered(), Some(0));

    let r = c.handle(ListEvent::Select(40));
    assert!(r.changes.contains(Changes::SCROLL | Changes::HOVER));
    assert_eq!(c.list().offset(), 720);
    assert_eq!(c.list().index_at_position(10), Some(36));
    assert_eq!(c.hovered(), Some(36));
    assert_eq!(highlight(&c, 36), Some(Highlight::Hovered));
    assert_eq!(highlight(&c, 40), Some(Highlight::Selected));
    let hovered = c
        .list()
        .iter_visible()
        .filter(|(_, slot)| slot.is_hovered())
        .count();
    assert_eq!(hovered, 1);
}

#[test]
fn tap_on_a_partly_visible_row_selects_it() {
    let (_count, mut c) = controller(50);
    c.handle(ListEvent::Scroll { delta: -10 });
    assert_eq!(c.list().visible_range().end_index, 5);
    assert_eq!(c.list().index_at_position(95), Some(5));
    assert_eq!(c.list().slot_for_index(5), None);

    c.handle(ListEvent::PointerDown { y: 95 });
    let r = c.handle(ListEvent::PointerUp { y: 95 });
    assert!(r.changes.contains(Changes::SELECTION));
    assert_eq!(c.list().selected(), Some(5));
    // Selecting scrolls the row fully into view.
    assert_eq!(c.list().offset(), 20);
    assert_eq!(highlight(&c, 5), Some(Highlight::Selected));
}

#[test]
fn refresh_after_shrink_drops_hover_and_selection() {
    let (count, mut c) = controller(50);
    c.handle(ListEvent::Select(40));
    c.handle(ListEvent::PointerMove { y: 90 });
    let hovered = c.hovered().unwrap();

    *count.lock().unwrap() = 3;
    let r = c.handle(ListEvent::Refresh);
    assert!(r.relayout);
    assert!(r.changes.contains(Changes::DATA | Changes::SELECTION));
    assert_eq!(c.list().selected(), None);
    assert_eq!(c.list().offset(), 0);
    assert_eq!(c.list().visible_rows().len(), 3);
    assert!(hovered > 3);
    assert_eq!(c.hovered(), None);
}

#[test]
fn explicit_selection_events() {
    let (_count, mut c) = controller(50);
    let r = c.handle(ListEvent::Select(30));
    assert!(r.changes.contains(Changes::SELECTION | Changes::SCROLL));
    assert_eq!(c.list().offset(), 31 * 20 - 100);

    assert!(c.handle(ListEvent::Select(99)).is_idle());
    assert!(c.handle(ListEvent::Unselect(7)).is_idle());

    let r = c.handle(ListEvent::Unselect(30));
    assert!(r.changes.contains(Changes::SELECTION));
    assert!(!r.relayout);
    assert_eq!(c.list().selected(), None);

    c.handle(ListEvent::Select(29));
    c.handle(ListEvent::UnselectAll);
    assert!(c.list().selection().is_empty());
}

#[test]
fn min_size_and_on_change_pass_through() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let options = ListOptions::new(|| 10, Row::default, |_: ItemId, _: &mut Row| {})
        .with_min_viewport_size(Size::new(120, 10))
        .with_on_change(Some(move |_: &recycle_list::RecycleList<Row>, c: Changes| {
            log.lock().unwrap().push(c)
        }));
    let mut c = Controller::new(options);
    assert_eq!(c.min_size(), Size::new(120, 20));

    let r = c.handle(ListEvent::Resize(Size::new(100, 60)));
    assert_eq!(*seen.lock().unwrap(), [r.changes]);
}
