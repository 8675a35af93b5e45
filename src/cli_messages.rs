//! Console output for the one-shot commands and session start/exit.

use crate::events::{Event, EventType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Info,
    Error,
    Success,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "\x1b[1;36m[INFO]\x1b[0m",
            Tag::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            Tag::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// One tagged line; `details` follows the title after a tab when present.
pub fn format_line(tag: Tag, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag.label(), title)
    } else {
        format!("{} {}\t {}", tag.label(), title, details)
    }
}

pub fn print_line(tag: Tag, title: &str, details: &str) {
    println!("{}", format_line(tag, title, details));
}

/// Print a dashboard message with the tag matching its type.
pub fn print_event(event: &Event) {
    let tag = match event.event_type {
        EventType::Success => Tag::Success,
        EventType::Error => Tag::Error,
        EventType::Refresh => Tag::Info,
    };
    print_line(tag, &event.msg, "");
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tag::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tag::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tag::Error, $title, $details)
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tag::Success, $title, &format!($($details)*))
    };
}
