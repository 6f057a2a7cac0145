// Example: a million-row list materializes only what fits in the viewport.
use recycle_list::{Highlight, ItemId, ListOptions, RecycleList, Size, Visual};

#[derive(Debug, Default)]
struct Line {
    text: String,
    highlight: Highlight,
}

impl Visual for Line {
    fn min_size(&self) -> Size {
        Size::new(40, 1)
    }

    fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = highlight;
    }
}

fn main() {
    let mut list = RecycleList::new(ListOptions::new(
        || 1_000_000,
        Line::default,
        |id: ItemId, line: &mut Line| line.text = format!("line {id}"),
    ));
    list.resize(Size::new(40, 10));
    println!("content_height={}", list.content_height());
    println!("visible_range={:?}", list.visible_range());

    list.scroll_by(-123_456);
    for (row, slot) in list.iter_visible() {
        println!("{:>4?} {}", row.slot, slot.visual().text);
    }

    list.select(999_999);
    println!(
        "after select: offset={} pool={} selected={:?}",
        list.offset(),
        list.pool_len(),
        list.selected()
    );
}
