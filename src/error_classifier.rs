use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Maps API failures to the level they are logged and displayed at.
#[derive(Debug, Clone, Copy)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, error: &ApiError) -> LogLevel {
        match error.status() {
            // Rate limiting - low priority
            Some(429) => LogLevel::Debug,

            // Server errors - temporary issues
            Some(500..=599) => LogLevel::Warn,

            // Authentication errors - critical
            Some(401 | 403) => LogLevel::Error,

            Some(_) => LogLevel::Warn,

            // Malformed payloads point at a contract mismatch with the backend
            None if matches!(error, ApiError::Decode(_)) => LogLevel::Error,

            // Network issues
            None => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
