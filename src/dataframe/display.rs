//! Plain-text rendering of a DataFrame for terminal output

use std::fmt::{self, Write};

use crate::dataframe::base::DataFrame;

/// Maximum characters shown for a single cell before it is truncated
const MAX_CELL_WIDTH: usize = 32;

impl DataFrame {
    /// Render the frame as an aligned text table, showing at most `max_rows`
    /// rows followed by an elision line when rows were left out.
    pub fn to_text(&self, max_rows: usize) -> String {
        let names = self.column_names();
        let shown = self.row_count().min(max_rows);

        let mut cells: Vec<Vec<String>> = Vec::with_capacity(shown);
        for row in self.rows().take(shown) {
            cells.push(row.into_iter().map(clip).collect());
        }

        let mut widths: Vec<usize> = names.iter().map(|n| clip(n).chars().count()).collect();
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let header: Vec<String> = names.iter().map(|n| clip(n)).collect();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &cells {
            push_line(&mut out, row, &widths);
        }
        if shown < self.row_count() {
            let _ = writeln!(out, "... {} more rows", self.row_count() - shown);
        }
        out
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(self.row_count()))
    }
}

fn clip(value: &str) -> String {
    if value.chars().count() > MAX_CELL_WIDTH {
        let mut s: String = value.chars().take(MAX_CELL_WIDTH - 1).collect();
        s.push('…');
        s
    } else {
        value.to_string()
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}
