//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::dashboard::rows::UpIndicator;
use crate::events::{Event, EventType};
use ratatui::prelude::Color;

/// Get a ratatui color for a target's up state
pub fn get_up_color(up: UpIndicator) -> Color {
    match up {
        UpIndicator::Up => Color::Green,
        UpIndicator::Down => Color::Red,
        UpIndicator::Unknown => Color::DarkGray,
    }
}

/// Get a ratatui color for a message
pub fn get_event_color(event: &Event) -> Color {
    match event.event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::Red,
        EventType::Refresh => Color::Cyan,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
