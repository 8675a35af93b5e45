//! Dashboard state management
//!
//! Contains the terminal dashboard state and the shared handle the view
//! model renders into.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dashboard::TableView;
use crate::environment::ApiBase;
use crate::events::Event;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Whether key presses go to the add-target input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug)]
pub struct DashboardState {
    /// The API the dashboard is connected to.
    pub api_base: ApiBase,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The current table body.
    pub table: TableView,
    /// The add-form message line.
    pub message: Option<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Text typed into the add-target input.
    pub input: String,
    pub input_mode: InputMode,
    /// When the table was last replaced, local time.
    pub last_refreshed: Option<String>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(api_base: ApiBase, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            api_base,
            start_time,
            table: TableView::Loading,
            message: None,
            activity_logs: VecDeque::new(),
            input: String::new(),
            input_mode: InputMode::Normal,
            last_refreshed: None,
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

/// Handle shared between the UI loop and in-flight view model operations.
#[derive(Debug, Clone)]
pub struct SharedDashboard(Arc<Mutex<DashboardState>>);

impl SharedDashboard {
    pub fn new(state: DashboardState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }

    pub fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
