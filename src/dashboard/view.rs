//! The table as a whole, as handed to a display.

use super::rows::RowViewModel;

pub const LOAD_FAILED_TEXT: &str = "Failed to load data.";
pub const EMPTY_TEXT: &str = "No targets yet. Add one above.";
pub const LOADING_TEXT: &str = "Loading…";

/// Everything the table body can show. Each refresh produces a fresh value
/// that replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TableView {
    /// Nothing fetched yet.
    #[default]
    Loading,
    Rows(Vec<RowViewModel>),
    /// The fetch succeeded but there are no targets.
    Empty,
    /// Either request failed; a single full-width error row.
    LoadFailed,
}

impl TableView {
    pub fn from_rows(rows: Vec<RowViewModel>) -> Self {
        if rows.is_empty() {
            TableView::Empty
        } else {
            TableView::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[RowViewModel] {
        match self {
            TableView::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Text of the single full-width row shown instead of data rows, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            TableView::Loading => Some(LOADING_TEXT),
            TableView::Empty => Some(EMPTY_TEXT),
            TableView::LoadFailed => Some(LOAD_FAILED_TEXT),
            TableView::Rows(_) => None,
        }
    }
}
