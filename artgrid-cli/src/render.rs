//! Text rendering of a session frame.

use std::fmt::Write;

use artgrid_lib::SessionView;
use artgrid_lib::model::Artwork;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

const TITLE: &str = "Art Institute of Chicago – Artworks";
const MAX_CELL: usize = 40;

/// Renders the whole frame: counters, table, paginator line and popover.
pub fn frame(view: &SessionView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "Selected: {} rows", view.selected_count);

    if view.loading {
        let _ = writeln!(out, "Loading page {}…", view.page_number);
    }
    if let Some(error) = view.error {
        let _ = writeln!(out, "Error: {error}");
    }

    let _ = writeln!(out, "{}", table(view));
    let _ = writeln!(out, "{}", paginator(view));

    if view.bulk_open {
        let pending = view.bulk_input.map(|n| n.to_string()).unwrap_or_default();
        let _ = writeln!(out, "Custom select: rows to select? [{pending}]  (bulk N to apply)");
    }
    out
}

/// The record table with a checkbox column.
pub fn table(view: &SessionView<'_>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_box = checkbox(view.is_all_current_page_selected);
    table.set_header(vec![
        header_cell("#"),
        header_cell(header_box),
        header_cell("Title"),
        header_cell("Origin"),
        header_cell("Artist"),
        header_cell("Inscriptions"),
        header_cell("Start Year"),
        header_cell("End Year"),
    ]);

    for (index, record) in view.records.iter().enumerate() {
        let selected = view.visible_selection.iter().any(|s| s.id == record.id);
        table.add_row(row(index + 1, record, selected));
    }

    for column in [0, 6, 7] {
        if let Some(column) = table.column_mut(column) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// "Showing {first} to {last} of {total} entries", plus page position.
pub fn paginator(view: &SessionView<'_>) -> String {
    let shown = match view.page_range {
        Some(range) => format!(
            "Showing {} to {} of {} entries",
            range.first, range.last, view.total_records
        ),
        None => format!("Showing 0 of {} entries", view.total_records),
    };
    format!("{shown}  ·  page {} of {}", view.page_number, view.total_pages.max(1))
}

fn row(number: usize, record: &Artwork, selected: bool) -> Vec<Cell> {
    vec![
        Cell::new(number),
        Cell::new(checkbox(selected)),
        Cell::new(text(record.title.as_deref())),
        Cell::new(text(record.place_of_origin.as_deref())),
        Cell::new(text(record.artist_display.as_deref())),
        Cell::new(text(record.inscriptions.as_deref())),
        Cell::new(year(record.date_start)),
        Cell::new(year(record.date_end)),
    ]
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn year(value: Option<i32>) -> String {
    value.map(|y| y.to_string()).unwrap_or_default()
}

/// First line only, shortened to `MAX_CELL` characters.
fn text(value: Option<&str>) -> String {
    let line = value.unwrap_or_default().lines().next().unwrap_or_default();
    if line.chars().count() <= MAX_CELL {
        return line.to_string();
    }
    let mut short: String = line.chars().take(MAX_CELL - 1).collect();
    short.push('…');
    short
}
