//! TUI mode execution

use super::SessionData;
use crate::environment::ApiBase;
use crate::{print_cmd_info, print_cmd_success};
use crate::ui::dashboard::{DashboardState, SharedDashboard};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::time::Instant;
use std::{error::Error, io};

/// Runs the interactive terminal dashboard
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. Wiring the view model into the shared dashboard state
/// 3. Running the UI loop until the user quits
///
/// # Arguments
/// * `api_base` - The API the dashboard talks to
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    api_base: ApiBase,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Starting TUI mode", "against {}", api_base);

    let dashboard = SharedDashboard::new(DashboardState::new(
        api_base.clone(),
        Instant::now(),
        UIConfig::new(with_background),
    ));
    let SessionData { view_model, .. } =
        super::setup_session(api_base, Arc::new(dashboard.clone()), None)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(dashboard, view_model);
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    print_cmd_success!("Uptime dashboard exited", "");

    Ok(())
}
