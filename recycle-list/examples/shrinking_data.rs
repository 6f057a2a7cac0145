// Example: the data source shrinks under a scrolled, selected list.
use std::sync::{Arc, Mutex};

use recycle_list::{Changes, Highlight, ItemId, ListOptions, RecycleList, Size, Visual};

#[derive(Debug, Default)]
struct Cell {
    text: String,
    selected: bool,
}

impl Visual for Cell {
    fn min_size(&self) -> Size {
        Size::new(20, 2)
    }

    fn set_highlight(&mut self, highlight: Highlight) {
        self.selected = highlight == Highlight::Selected;
    }
}

fn main() {
    let data = Arc::new(Mutex::new((0..20).map(|i| format!("Data {i}")).collect::<Vec<_>>()));
    let (len_data, item_data) = (Arc::clone(&data), Arc::clone(&data));

    let mut list = RecycleList::new(
        ListOptions::new(
            move || len_data.lock().map_or(0, |d| d.len()),
            Cell::default,
            move |id: ItemId, cell: &mut Cell| {
                if let Some(text) = item_data.lock().ok().and_then(|d| d.get(id).cloned()) {
                    cell.text = text;
                }
            },
        )
        .with_on_selected(Some(|id: ItemId| println!("selected {id}")))
        .with_on_change(Some(|l: &RecycleList<Cell>, c: Changes| {
            println!("changed {c:?}: offset={} rows={}", l.offset(), l.visible_rows().len())
        })),
    );
    list.resize(Size::new(20, 12));
    list.select(18);

    if let Ok(mut d) = data.lock() {
        d.truncate(4);
    }
    list.refresh();
    for (row, slot) in list.iter_visible() {
        println!("{} {} selected={}", row.index, slot.visual().text, slot.visual().selected);
    }
    println!("selection after shrink: {:?}", list.selected());
}
