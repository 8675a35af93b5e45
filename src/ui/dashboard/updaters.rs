//! Dashboard state update logic
//!
//! Applies view model output to the shared terminal dashboard state.

use super::state::SharedDashboard;
use crate::dashboard::{DashboardSink, TableView};
use crate::events::Event;
use crate::logging::LogLevel;
use chrono::Local;

impl DashboardSink for SharedDashboard {
    fn replace_table(&self, view: TableView) {
        let mut state = self.lock();
        let summary = match &view {
            TableView::Rows(rows) => Event::refresh(
                format!("Loaded {} target(s)", rows.len()),
                LogLevel::Debug,
            ),
            TableView::Empty => Event::refresh("No targets yet".to_string(), LogLevel::Debug),
            TableView::LoadFailed => {
                Event::error("Failed to load data.".to_string(), LogLevel::Warn)
            }
            TableView::Loading => return,
        };
        state.table = view;
        state.last_refreshed = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
        state.add_to_activity_log(summary);
    }

    fn show_message(&self, event: Event) {
        let mut state = self.lock();
        state.add_to_activity_log(event.clone());
        state.message = Some(event);
    }

    fn clear_input(&self) {
        self.lock().input.clear();
    }
}
