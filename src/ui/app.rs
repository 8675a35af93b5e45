//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::key_poll_interval;
use crate::dashboard::DashboardViewModel;
use crate::ui::dashboard::{DashboardState, InputMode, SharedDashboard, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// What the loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    Refresh,
    /// Submit the add-target input.
    Submit(String),
}

/// Application state
pub struct App {
    /// State shared with in-flight view model operations.
    dashboard: SharedDashboard,

    /// Drives refreshes and adds; renders into `dashboard`.
    view_model: DashboardViewModel,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(dashboard: SharedDashboard, view_model: DashboardViewModel) -> Self {
        Self {
            dashboard,
            view_model,
        }
    }

    fn spawn_refresh(&self) {
        let view_model = self.view_model.clone();
        tokio::spawn(async move {
            view_model.refresh().await;
        });
    }

    fn spawn_add(&self, input: String) {
        let view_model = self.view_model.clone();
        tokio::spawn(async move {
            view_model.add_target(&input).await;
        });
    }
}

/// Maps a key press onto the dashboard state.
///
/// In editing mode every character goes to the input line, so `q` and `r`
/// only act as shortcuts in normal mode.
pub fn handle_key(state: &mut DashboardState, code: KeyCode) -> KeyAction {
    match state.input_mode {
        InputMode::Normal => match code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') => KeyAction::Refresh,
            KeyCode::Char('a') => {
                state.input_mode = InputMode::Editing;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        InputMode::Editing => match code {
            KeyCode::Enter => {
                state.input_mode = InputMode::Normal;
                KeyAction::Submit(state.input.clone())
            }
            KeyCode::Esc => {
                state.input_mode = InputMode::Normal;
                KeyAction::None
            }
            KeyCode::Backspace => {
                state.input.pop();
                KeyAction::None
            }
            KeyCode::Char(c) => {
                state.input.push(c);
                KeyAction::None
            }
            _ => KeyAction::None,
        },
    }
}

/// Runs the application UI in a loop, handling key presses and redrawing the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, app: App) -> std::io::Result<()> {
    // Initial load
    app.spawn_refresh();

    loop {
        {
            let mut state = app.dashboard.lock();
            state.tick = state.tick.wrapping_add(1);
            terminal.draw(|f| render_dashboard(f, &state))?;
        }

        // Poll for key events
        if event::poll(key_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                let action = handle_key(&mut app.dashboard.lock(), key.code);
                match action {
                    KeyAction::None => {}
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Refresh => app.spawn_refresh(),
                    KeyAction::Submit(input) => app.spawn_add(input),
                }
            }
        }

        // Let spawned operations make progress between redraws
        tokio::task::yield_now().await;
    }
}
