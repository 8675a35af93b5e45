//! Dashboard add-target form component
//!
//! Renders the URL input line and the message from the last add attempt

use super::super::state::{DashboardState, InputMode};
use super::super::utils::get_event_color;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_add_form(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let editing = state.input_mode == InputMode::Editing;
    let border_color = if editing { Color::Yellow } else { Color::DarkGray };
    let title = if editing {
        "ADD TARGET  [Enter] submit  [Esc] cancel"
    } else {
        "ADD TARGET  [A] edit"
    };

    let input = Paragraph::new(state.input.as_str()).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, chunks[0]);

    if editing {
        let x = chunks[0].x + 1 + state.input.chars().count() as u16;
        let max_x = chunks[0].right().saturating_sub(2);
        f.set_cursor_position(Position::new(x.min(max_x), chunks[0].y + 1));
    }

    if let Some(message) = &state.message {
        let line = Line::from(vec![Span::styled(
            message.msg.clone(),
            Style::default().fg(get_event_color(message)),
        )]);
        f.render_widget(Paragraph::new(line), chunks[1]);
    }
}
