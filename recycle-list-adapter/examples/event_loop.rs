// Example: feeding host input events through a controller.
use recycle_list::{Highlight, ItemId, ListOptions, Size, Visual};
use recycle_list_adapter::{Controller, ListEvent};

#[derive(Debug, Default)]
struct Row {
    text: String,
    highlight: Highlight,
}

impl Visual for Row {
    fn min_size(&self) -> Size {
        Size::new(100, 24)
    }

    fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = highlight;
    }
}

fn main() {
    let mut c = Controller::new(
        ListOptions::new(
            || 500,
            Row::default,
            |id: ItemId, row: &mut Row| row.text = format!("Item {id}"),
        )
        .with_row_gap(1),
    );
    println!("min_size={:?}", c.min_size());

    let events = [
        ListEvent::Resize(Size::new(200, 300)),
        ListEvent::Scroll { delta: -280 },
        ListEvent::PointerMove { y: 30 },
        ListEvent::PointerDown { y: 30 },
        ListEvent::PointerUp { y: 32 },
        ListEvent::Select(250),
        ListEvent::PointerLeave,
        ListEvent::Refresh,
    ];
    for event in events {
        let r = c.handle(event);
        println!(
            "{event:?} -> repaint={} relayout={} offset={} hovered={:?} selected={:?}",
            r.repaint,
            r.relayout,
            c.list().offset(),
            c.hovered(),
            c.list().selected()
        );
    }
}
