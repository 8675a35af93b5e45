pub mod headless_mode;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::{OutputFormat, run_add, run_health, run_prompt, run_show};
pub use setup::{SessionData, setup_session};
pub use tui_mode::run_tui_mode;
