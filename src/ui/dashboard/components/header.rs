//! Dashboard header component
//!
//! Renders the title and the share of targets currently up

use super::super::state::DashboardState;
use crate::dashboard::rows::UpIndicator;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and availability gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("UPTIME DASHBOARD v{}  ·  {}", version, state.api_base))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let rows = state.table.rows();
    let up = rows.iter().filter(|r| r.up == UpIndicator::Up).count();
    let down = rows.iter().filter(|r| r.up == UpIndicator::Down).count();
    let (label, color, percent) = match state.table.placeholder() {
        Some(text) => (text.to_string(), Color::DarkGray, 0),
        None => {
            let percent = (up * 100 / rows.len().max(1)) as u16;
            let refreshed = state.last_refreshed.as_deref().unwrap_or("never");
            let color = if down > 0 {
                Color::LightRed
            } else {
                Color::LightGreen
            };
            (
                format!(
                    "{} UP / {} DOWN / {} TOTAL  -  refreshed {}",
                    up,
                    down,
                    rows.len(),
                    refreshed
                ),
                color,
                percent.min(100),
            )
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, header_chunks[1]);
}
