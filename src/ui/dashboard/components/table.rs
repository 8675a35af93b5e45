//! Dashboard targets table component

use super::super::state::DashboardState;
use super::super::utils::get_up_color;
use crate::dashboard::TableView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the targets table, or its single full-width placeholder.
pub fn render_targets_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("TARGETS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if let Some(text) = state.table.placeholder() {
        let color = match state.table {
            TableView::LoadFailed => Color::Red,
            _ => Color::DarkGray,
        };
        let text = match state.table {
            TableView::Loading => format!("{} {}", SPINNER[state.tick % SPINNER.len()], text),
            _ => text.to_string(),
        };
        let placeholder = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(["URL", "UP", "HTTP", "LATENCY (ms)", "CHECKED AT", "REASON"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let rows = state.table.rows().iter().map(|row| {
        Row::new(vec![
            Cell::from(row.url.clone()),
            Cell::from(row.up.symbol()).style(Style::default().fg(get_up_color(row.up))),
            Cell::from(row.http_status_text()),
            Cell::from(row.latency_text()),
            Cell::from(row.checked_at_text().to_string()),
            Cell::from(row.reason.clone().unwrap_or_default())
                .style(Style::default().fg(Color::DarkGray)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(3),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(13),
            Constraint::Length(20),
            Constraint::Fill(2),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
