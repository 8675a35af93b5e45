//! Row view models and the targets/results join.

use crate::api::types::{CheckResult, Target, TargetId};
use chrono::{DateTime, Local};
use std::collections::HashMap;

/// Display text for any field the backend has no data for.
pub const UNKNOWN: &str = "—";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpIndicator {
    Up,
    Down,
    Unknown,
}

impl UpIndicator {
    pub fn from_flag(up: Option<bool>) -> Self {
        match up {
            Some(true) => UpIndicator::Up,
            Some(false) => UpIndicator::Down,
            None => UpIndicator::Unknown,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UpIndicator::Up => "✅",
            UpIndicator::Down => "❌",
            UpIndicator::Unknown => UNKNOWN,
        }
    }
}

/// One rendered table row. `None` fields display as [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowViewModel {
    pub url: String,
    pub up: UpIndicator,
    pub http_status: Option<i64>,
    pub latency_ms: Option<f64>,
    pub checked_at_display: Option<String>,
    pub reason: Option<String>,
}

impl RowViewModel {
    /// Row for a target that has never been checked.
    pub fn unknown(url: &str) -> Self {
        Self {
            url: url.to_string(),
            up: UpIndicator::Unknown,
            http_status: None,
            latency_ms: None,
            checked_at_display: None,
            reason: None,
        }
    }

    pub fn from_result(url: &str, result: &CheckResult) -> Self {
        Self {
            url: url.to_string(),
            up: UpIndicator::from_flag(result.up),
            http_status: result.http_status,
            latency_ms: result.latency_ms,
            checked_at_display: result.checked_at.as_deref().and_then(localize_timestamp),
            reason: result.reason.clone().filter(|r| !r.is_empty()),
        }
    }

    pub fn http_status_text(&self) -> String {
        self.http_status
            .map(|s| s.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn latency_text(&self) -> String {
        self.latency_ms
            .map(|l| l.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn checked_at_text(&self) -> &str {
        self.checked_at_display.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Renders an RFC 3339 timestamp in the local time zone.
///
/// Returns `None` for text that does not parse, which displays as unknown.
pub fn localize_timestamp(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|ts| {
            ts.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
}

/// Left-joins targets with their latest results.
///
/// One pass builds the id → result map (a later duplicate overwrites an
/// earlier one), one pass walks the targets in service order. The output
/// always has exactly one row per target.
pub fn build_rows(targets: &[Target], results: Vec<CheckResult>) -> Vec<RowViewModel> {
    let mut latest_by_id: HashMap<TargetId, CheckResult> = HashMap::with_capacity(results.len());
    for result in results {
        if let Some(id) = result.target_id.clone() {
            latest_by_id.insert(id, result);
        }
    }

    targets
        .iter()
        .map(|target| match latest_by_id.get(&target.id) {
            Some(result) => RowViewModel::from_result(&target.url, result),
            None => RowViewModel::unknown(&target.url),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn target(id: &str, url: &str) -> Target {
        Target {
            id: TargetId::from(id),
            url: url.to_string(),
        }
    }

    fn result(id: &str, up: Option<bool>) -> CheckResult {
        CheckResult {
            target_id: Some(TargetId::from(id)),
            up,
            ..Default::default()
        }
    }

    #[test]
    fn test_row_count_follows_targets_not_results() {
        let targets = vec![target("a", "https://a"), target("b", "https://b")];
        let results = vec![
            result("a", Some(true)),
            result("x", Some(false)),
            result("y", None),
        ];
        assert_eq!(build_rows(&targets, results).len(), 2);

        let lonely = vec![target("a", "https://a")];
        assert_eq!(build_rows(&lonely, Vec::new()).len(), 1);
        assert!(build_rows(&[], vec![result("a", Some(true))]).is_empty());
    }

    #[test]
    fn test_target_without_result_is_all_unknown() {
        let rows = build_rows(&[target("a", "https://a")], vec![result("b", Some(true))]);
        let row = &rows[0];
        assert_eq!(row.url, "https://a");
        assert_eq!(row.up, UpIndicator::Unknown);
        assert_eq!(row.http_status_text(), UNKNOWN);
        assert_eq!(row.latency_text(), UNKNOWN);
        assert_eq!(row.checked_at_text(), UNKNOWN);
    }

    #[test]
    fn test_matching_result_fields_are_passed_through() {
        let checked_at = "2024-05-01T10:00:00Z";
        let results = vec![CheckResult {
            target_id: Some(TargetId::from("a")),
            up: Some(false),
            http_status: Some(503),
            latency_ms: Some(87.25),
            reason: Some("status 503".to_string()),
            checked_at: Some(checked_at.to_string()),
        }];
        let rows = build_rows(&[target("a", "https://a")], results);
        let row = &rows[0];

        assert_eq!(row.up.symbol(), "❌");
        assert_eq!(row.http_status_text(), "503");
        assert_eq!(row.latency_text(), "87.25");
        let expected = chrono::Utc
            .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(row.checked_at_text(), expected);
        assert_eq!(row.reason.as_deref(), Some("status 503"));
    }

    #[test]
    fn test_up_indicator_symbols() {
        assert_eq!(UpIndicator::from_flag(Some(true)).symbol(), "✅");
        assert_eq!(UpIndicator::from_flag(Some(false)).symbol(), "❌");
        assert_eq!(UpIndicator::from_flag(None).symbol(), "—");
    }

    #[test]
    fn test_later_duplicate_result_wins() {
        let results = vec![result("a", Some(true)), result("a", Some(false))];
        let rows = build_rows(&[target("a", "https://a")], results);
        assert_eq!(rows[0].up, UpIndicator::Down);
    }

    #[test]
    fn test_rows_keep_service_order() {
        let targets = vec![
            target("c", "https://c"),
            target("a", "https://a"),
            target("b", "https://b"),
        ];
        let urls: Vec<String> = build_rows(&targets, Vec::new())
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls, vec!["https://c", "https://a", "https://b"]);
    }

    #[test]
    fn test_unparsable_timestamp_is_unknown() {
        let results = vec![CheckResult {
            target_id: Some(TargetId::from("a")),
            checked_at: Some("yesterday".to_string()),
            ..Default::default()
        }];
        let rows = build_rows(&[target("a", "https://a")], results);
        assert_eq!(rows[0].checked_at_text(), UNKNOWN);
    }

    #[test]
    fn test_result_without_target_id_is_ignored() {
        let results = vec![CheckResult {
            target_id: None,
            up: Some(true),
            ..Default::default()
        }];
        let rows = build_rows(&[target("a", "https://a")], results);
        assert_eq!(rows[0].up, UpIndicator::Unknown);
    }
}
