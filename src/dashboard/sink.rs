//! Displays the view model writes into.

use super::view::TableView;
use crate::events::Event;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
use mockall::automock;

/// Where the dashboard's output goes. Every call replaces what was shown
/// before; nothing is patched incrementally.
#[cfg_attr(test, automock)]
pub trait DashboardSink: Send + Sync {
    /// Replace the whole table body.
    fn replace_table(&self, view: TableView);

    /// Replace the add-form message line.
    fn show_message(&self, event: Event);

    /// Clear the add-target input.
    fn clear_input(&self);
}

/// Keeps the latest table and message in memory, for the one-shot commands
/// that render once after an operation finishes.
#[derive(Debug, Default)]
pub struct RecordingSink {
    table: Mutex<TableView>,
    message: Mutex<Option<Event>>,
    tables_rendered: AtomicUsize,
    inputs_cleared: AtomicUsize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> TableView {
        self.table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn message(&self) -> Option<Event> {
        self.message
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// How many times the table has been replaced.
    #[cfg(test)]
    pub fn tables_rendered(&self) -> usize {
        self.tables_rendered.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn inputs_cleared(&self) -> usize {
        self.inputs_cleared.load(Ordering::SeqCst)
    }
}

impl DashboardSink for RecordingSink {
    fn replace_table(&self, view: TableView) {
        *self
            .table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = view;
        self.tables_rendered.fetch_add(1, Ordering::SeqCst);
    }

    fn show_message(&self, event: Event) {
        *self
            .message
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(event);
    }

    fn clear_input(&self) {
        self.inputs_cleared.fetch_add(1, Ordering::SeqCst);
    }
}
