//! Plain text views of the grid and a route for the console.

use crate::town::{Cell, TownGrid};


/// Grid listing for inspection, one row per line
pub fn render_grid(grid: &TownGrid) -> String {
    grid.to_string()
}

/// Path as `[(0, 0), (0, 1), ...]`
pub fn render_path(path: &[Cell]) -> String {
    let cells: Vec<String> = path.iter().map(Cell::to_string).collect();
    format!("[{}]", cells.join(", "))
}

/// Grid with every path cell tagged by its step number, `Park#0`, `Mall#1`, ...
pub fn render_overlay(grid: &TownGrid, path: &[Cell]) -> String {
    let tagged: Vec<String> = grid
        .cells()
        .map(|(cell, label)| {
            // a cell visited twice shows its first step
            match path.iter().position(|&p| p == cell) {
                Some(step) => format!("{label}#{step}"),
                None => format!("{label} ."),
            }
        })
        .collect();

    let width = tagged.iter().map(String::len).max().unwrap_or(0);
    let mut out = String::new();
    for row in tagged.chunks(grid.size()) {
        let line: Vec<String> = row.iter().map(|t| format!("{t:<width$}")).collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }
    out
}
