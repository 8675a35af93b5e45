//! HTML markup for the dashboard table, message line and page.
//!
//! Every string that reaches the markup goes through [`escape_html`].

use super::rows::RowViewModel;
use super::view::TableView;
use crate::events::Event;
use std::fmt::Write;

const COLUMN_COUNT: usize = 5;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn render_row(out: &mut String, row: &RowViewModel) {
    let up_cell = match &row.reason {
        Some(reason) => format!(
            r#"<td class="py-2 pr-4" title="{}">{}</td>"#,
            escape_html(reason),
            row.up.symbol()
        ),
        None => format!(r#"<td class="py-2 pr-4">{}</td>"#, row.up.symbol()),
    };
    let _ = write!(
        out,
        r#"<tr><td class="py-2 pr-4">{}</td>{}<td class="py-2 pr-4">{}</td><td class="py-2 pr-4">{}</td><td class="py-2">{}</td></tr>"#,
        escape_html(&row.url),
        up_cell,
        escape_html(&row.http_status_text()),
        escape_html(&row.latency_text()),
        escape_html(row.checked_at_text()),
    );
    out.push('\n');
}

/// Inner markup of the table body.
///
/// Placeholders (loading, empty, failure) are a single row spanning every
/// column.
pub fn render_table_body(view: &TableView) -> String {
    let mut out = String::new();
    match view {
        TableView::Rows(rows) => rows.iter().for_each(|row| render_row(&mut out, row)),
        TableView::LoadFailed => {
            let _ = writeln!(
                out,
                r#"<tr><td colspan="{}" class="py-3 text-red-600">{}</td></tr>"#,
                COLUMN_COUNT,
                escape_html(super::view::LOAD_FAILED_TEXT)
            );
        }
        other => {
            let text = other.placeholder().unwrap_or_default();
            let _ = writeln!(
                out,
                r#"<tr><td colspan="{}" class="py-3 text-slate-500">{}</td></tr>"#,
                COLUMN_COUNT,
                escape_html(text)
            );
        }
    }
    out
}

/// The add-form message line, green for success and red for errors.
pub fn render_message(event: &Event) -> String {
    let color = if event.is_error() {
        "text-red-600"
    } else {
        "text-green-600"
    };
    format!(
        r#"<p id="add-msg" class="text-sm mt-2 {}">{}</p>"#,
        color,
        escape_html(&event.msg)
    )
}

/// A standalone snapshot page: message line and the targets table.
///
/// The page carries no add form; targets are added through the `add`
/// command, which applies the trimming and refresh rules.
pub fn render_page(api_base: &str, view: &TableView, message: Option<&Event>) -> String {
    let message = message
        .map(render_message)
        .unwrap_or_else(|| r#"<p id="add-msg" class="text-sm mt-2"></p>"#.to_string());
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Uptime Dashboard</title>
</head>
<body class="p-6">
<h1 class="text-xl font-semibold mb-4">Uptime Dashboard</h1>
<p class="text-sm text-slate-500">Snapshot of {base}. Add targets with <code>uptime-dashboard add &lt;URL&gt;</code>.</p>
{message}
<table class="w-full mt-6">
<thead><tr><th class="text-left">URL</th><th class="text-left">Up</th><th class="text-left">HTTP</th><th class="text-left">Latency (ms)</th><th class="text-left">Checked at</th></tr></thead>
<tbody id="rows">
{rows}</tbody>
</table>
</body>
</html>
"#,
        base = escape_html(api_base),
        message = message,
        rows = render_table_body(view),
    )
}
