//! Renderers turning a [`RenderPayload`] into a display.

use super::pagination::{NavIntent, PageDescriptor};
use super::session::RenderPayload;
use std::fmt::Write;

/// Consumer of render payloads.
pub trait Renderer {
    type Output;

    /// Render one cycle.
    fn render(&mut self, payload: &RenderPayload) -> Self::Output;
}

/// Plain-text table with a pagination bar underneath.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    max_cell_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { max_cell_width: 32 }
    }
}

impl TextRenderer {
    /// Create a renderer with the default cell width
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncate cells wider than `width` characters
    pub fn with_max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width.max(1);
        self
    }

    fn cell(&self, text: &str) -> String {
        // Line breaks inside a cell would break the grid
        let flat: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .collect();

        if flat.chars().count() <= self.max_cell_width {
            flat
        } else {
            let mut cut: String = flat.chars().take(self.max_cell_width - 1).collect();
            cut.push('…');
            cut
        }
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&mut self, payload: &RenderPayload) -> String {
        let header: Vec<String> = payload.columns.iter().map(|name| self.cell(name)).collect();
        let body: Vec<Vec<String>> = payload
            .rows
            .iter()
            .map(|row| row.cells().iter().map(|cell| self.cell(&cell.display_text())).collect())
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &body {
            for (idx, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(idx) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        write_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        write_line(&mut out, &rule, &widths);
        for row in &body {
            write_line(&mut out, row, &widths);
        }
        if body.is_empty() {
            out.push_str("(no matching rows)\n");
        }

        out.push_str(&pagination_bar(&payload.page));
        out
    }
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (idx, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if idx > 0 {
            line.push_str(" | ");
        }
        let _ = write!(line, "{:<width$}", cell, width = width);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One-line pagination summary, e.g. `start previous 1 [2] next end`.
pub fn pagination_bar(page: &PageDescriptor) -> String {
    let mut parts: Vec<String> = Vec::new();

    for intent in [NavIntent::First, NavIntent::Previous] {
        if page.has(intent) {
            parts.push(intent.label().to_string());
        }
    }
    for &n in &page.window {
        if page.is_current(n) {
            parts.push(format!("[{}]", n));
        } else {
            parts.push(n.to_string());
        }
    }
    for intent in [NavIntent::Next, NavIntent::Last] {
        if page.has(intent) {
            parts.push(intent.label().to_string());
        }
    }

    format!(
        "{}  ({} records, page {} of {})\n",
        parts.join(" "),
        page.total_records,
        if page.total_pages == 0 { 0 } else { page.current_page },
        page.total_pages
    )
}
