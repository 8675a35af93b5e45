//! Plain-text table for terminals and pipes.

use super::view::TableView;

const HEADERS: [&str; 5] = ["URL", "UP", "HTTP", "LATENCY (ms)", "CHECKED AT"];

/// Renders the view as aligned columns. Placeholders print as a single line.
pub fn render_text(view: &TableView) -> String {
    if let Some(text) = view.placeholder() {
        return format!("{}\n", text);
    }

    let cells: Vec<[String; 5]> = view
        .rows()
        .iter()
        .map(|row| {
            [
                row.url.clone(),
                row.up.symbol().to_string(),
                row.http_status_text(),
                row.latency_text(),
                row.checked_at_text().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
