use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

/// Table and cell creation helpers
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn color_coded_failed_cell(failed: u64) -> Cell {
    if failed > 0 {
        Cell::new(failed.to_string()).fg(TableColor::Red)
    } else {
        Cell::new(failed.to_string()).fg(TableColor::Green)
    }
}

pub fn color_coded_skipped_cell(skipped: u64) -> Cell {
    if skipped > 0 {
        Cell::new(skipped.to_string()).fg(TableColor::Yellow)
    } else {
        Cell::new(skipped.to_string()).fg(TableColor::Green)
    }
}

pub fn color_coded_duration_cell(seconds: u64) -> Cell {
    #[allow(clippy::cast_precision_loss)]
    let minutes = seconds as f64 / 60.0;
    let text = format!("{minutes:.1}min");
    if minutes <= 10.0 {
        Cell::new(text).fg(TableColor::Green)
    } else if minutes <= 15.0 {
        Cell::new(text).fg(TableColor::Yellow)
    } else {
        Cell::new(text).fg(TableColor::Red)
    }
}
