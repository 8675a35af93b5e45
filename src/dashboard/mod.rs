//! Targets/results dashboard
//!
//! The view model and the renderers that turn its output into markup or text.

pub mod html;
pub mod rows;
pub mod sink;
pub mod text;
pub mod view;
pub mod view_model;

pub use sink::{DashboardSink, RecordingSink};
pub use view::TableView;
pub use view_model::{AddOutcome, DashboardViewModel, RefreshOutcome};
