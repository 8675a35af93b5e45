//! Dashboard view model
//!
//! Fetches targets and their latest results, joins them into rows, and
//! pushes the outcome to a [`DashboardSink`]. Also owns the add-target flow.

use super::rows::build_rows;
use super::sink::DashboardSink;
use super::view::TableView;
use crate::api::UptimeApi;
use crate::api::error::ApiError;
use crate::credentials::CredentialProvider;
use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// What a refresh ended up showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Rendered this many rows.
    Rendered(usize),
    /// Rendered the no-targets placeholder.
    Empty,
    /// Rendered the load-failure row.
    Failed,
    /// A newer refresh was issued while this one was in flight; nothing rendered.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Blank input; nothing was sent.
    Ignored,
    Added,
    /// The service answered with a non-success status.
    Rejected,
    /// The request could not be sent or completed.
    Failed,
}

/// Cheap to clone; clones share the API, the display and the refresh
/// generation counter.
#[derive(Clone)]
pub struct DashboardViewModel {
    api: Arc<dyn UptimeApi>,
    credentials: Arc<dyn CredentialProvider>,
    sink: Arc<dyn DashboardSink>,
    /// Generation of the most recently issued refresh.
    issued: Arc<AtomicU64>,
    /// Serializes the "is this still the latest?" check with the render.
    apply_lock: Arc<Mutex<()>>,
    classifier: ErrorClassifier,
}

impl DashboardViewModel {
    pub fn new(
        api: Arc<dyn UptimeApi>,
        credentials: Arc<dyn CredentialProvider>,
        sink: Arc<dyn DashboardSink>,
    ) -> Self {
        Self {
            api,
            credentials,
            sink,
            issued: Arc::new(AtomicU64::new(0)),
            apply_lock: Arc::new(Mutex::new(())),
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn api(&self) -> &dyn UptimeApi {
        self.api.as_ref()
    }

    /// Re-fetches both collections concurrently and replaces the table.
    ///
    /// Either request failing fails the whole refresh. Only the most recently
    /// issued refresh may render; an older one finishing late is dropped.
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let (targets, results) = tokio::join!(self.api.list_targets(), self.api.latest_results());

        let (view, outcome) = match (targets, results) {
            (Ok(targets), Ok(results)) => {
                let view = TableView::from_rows(build_rows(&targets, results));
                let outcome = match &view {
                    TableView::Rows(rows) => RefreshOutcome::Rendered(rows.len()),
                    _ => RefreshOutcome::Empty,
                };
                (view, outcome)
            }
            (Err(e), _) | (_, Err(e)) => {
                let level = self.classifier.classify(&e);
                log::log!(log::Level::from(level), "Failed to load dashboard data: {}", e);
                (TableView::LoadFailed, RefreshOutcome::Failed)
            }
        };

        let _guard = self
            .apply_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.issued.load(Ordering::SeqCst) != generation {
            log::debug!("Dropping refresh #{}: superseded", generation);
            return RefreshOutcome::Superseded;
        }
        self.sink.replace_table(view);
        outcome
    }

    /// Registers a new target and, on success, refreshes the table.
    ///
    /// Blank input (after trimming) is ignored without any feedback.
    pub async fn add_target(&self, input: &str) -> AddOutcome {
        let url = input.trim();
        if url.is_empty() {
            return AddOutcome::Ignored;
        }

        let token = self.credentials.bearer_token();
        match self.api.add_target(url, token).await {
            Ok(()) => {
                log::info!("Added target {}", url);
                self.sink.show_message(Event::success(format!("Added: {}", url)));
                self.sink.clear_input();
                self.refresh().await;
                AddOutcome::Added
            }
            Err(e) => {
                let level = self.classifier.classify(&e);
                log::log!(log::Level::from(level), "Failed to add target {}: {}", url, e);
                let (msg, outcome) = match &e {
                    ApiError::Http { message, .. } => {
                        (format!("Add failed: {}", message), AddOutcome::Rejected)
                    }
                    _ => (format!("Error: {}", e.user_message()), AddOutcome::Failed),
                };
                self.sink.show_message(Event::error(msg, level));
                outcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockUptimeApi;
    use crate::api::types::{CheckResult, Target, TargetId};
    use crate::credentials::{MockCredentialProvider, StaticCredentials};
    use crate::dashboard::rows::UpIndicator;
    use crate::dashboard::sink::{MockDashboardSink, RecordingSink};
    use crate::dashboard::view::TableView;
    use crate::environment::ApiBase;
    use crate::events::EventType;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn target(id: &str, url: &str) -> Target {
        Target {
            id: TargetId::from(id),
            url: url.to_string(),
        }
    }

    fn http_error(status: u16, body: &str) -> ApiError {
        ApiError::Http {
            status,
            message: body.to_string(),
        }
    }

    fn view_model(api: MockUptimeApi, sink: Arc<RecordingSink>) -> DashboardViewModel {
        DashboardViewModel::new(Arc::new(api), Arc::new(StaticCredentials(None)), sink)
    }

    #[tokio::test]
    async fn test_refresh_renders_one_row_per_target() {
        let mut api = MockUptimeApi::new();
        api.expect_list_targets()
            .times(1)
            .returning(|| Ok(vec![target("a", "https://a"), target("b", "https://b")]));
        api.expect_latest_results().times(1).returning(|| {
            Ok(vec![CheckResult {
                target_id: Some(TargetId::from("a")),
                up: Some(true),
                http_status: Some(200),
                ..Default::default()
            }])
        });
        let sink = Arc::new(RecordingSink::new());

        let outcome = view_model(api, sink.clone()).refresh().await;

        assert_eq!(outcome, RefreshOutcome::Rendered(2));
        let table = sink.table();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].up, UpIndicator::Up);
        assert_eq!(table.rows()[1].up, UpIndicator::Unknown);
    }

    #[tokio::test]
    async fn test_refresh_with_no_targets_shows_placeholder() {
        let mut api = MockUptimeApi::new();
        api.expect_list_targets().returning(|| Ok(Vec::new()));
        api.expect_latest_results().returning(|| Ok(Vec::new()));
        let sink = Arc::new(RecordingSink::new());

        let outcome = view_model(api, sink.clone()).refresh().await;

        assert_eq!(outcome, RefreshOutcome::Empty);
        assert_eq!(sink.table(), TableView::Empty);
    }

    #[tokio::test]
    async fn test_refresh_fails_whole_table_when_either_request_fails() {
        for targets_fail in [true, false] {
            let mut api = MockUptimeApi::new();
            api.expect_list_targets().returning(move || {
                if targets_fail {
                    Err(http_error(500, "list error"))
                } else {
                    Ok(vec![target("a", "https://a")])
                }
            });
            api.expect_latest_results().returning(move || {
                if targets_fail {
                    Ok(Vec::new())
                } else {
                    Err(http_error(502, "bad gateway"))
                }
            });
            let sink = Arc::new(RecordingSink::new());

            let outcome = view_model(api, sink.clone()).refresh().await;

            assert_eq!(outcome, RefreshOutcome::Failed);
            assert_eq!(sink.table(), TableView::LoadFailed);
        }
    }

    #[tokio::test]
    async fn test_add_blank_url_sends_nothing() {
        let mut api = MockUptimeApi::new();
        api.expect_add_target().never();
        api.expect_list_targets().never();
        api.expect_latest_results().never();
        let sink = Arc::new(RecordingSink::new());
        let vm = view_model(api, sink.clone());

        assert_eq!(vm.add_target("").await, AddOutcome::Ignored);
        assert_eq!(vm.add_target("   ").await, AddOutcome::Ignored);
        assert!(sink.message().is_none());
        assert_eq!(sink.tables_rendered(), 0);
        assert_eq!(sink.inputs_cleared(), 0);
    }

    #[tokio::test]
    async fn test_add_success_confirms_clears_and_refreshes_once() {
        let mut api = MockUptimeApi::new();
        api.expect_add_target()
            .withf(|url, token| url == "http://example.com" && token.is_none())
            .times(1)
            .returning(|_, _| Ok(()));
        api.expect_list_targets()
            .times(1)
            .returning(|| Ok(vec![target("a", "http://example.com")]));
        api.expect_latest_results()
            .times(1)
            .returning(|| Ok(Vec::new()));
        let sink = Arc::new(RecordingSink::new());

        let outcome = view_model(api, sink.clone())
            .add_target("  http://example.com ")
            .await;

        assert_eq!(outcome, AddOutcome::Added);
        let message = sink.message().unwrap();
        assert_eq!(message.event_type, EventType::Success);
        assert_eq!(message.msg, "Added: http://example.com");
        assert_eq!(sink.inputs_cleared(), 1);
        assert_eq!(sink.tables_rendered(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_replaces_table_once_and_leaves_message() {
        let mut api = MockUptimeApi::new();
        api.expect_list_targets()
            .returning(|| Ok(vec![target("a", "https://a")]));
        api.expect_latest_results()
            .returning(|| Err(http_error(503, "unavailable")));
        let mut sink = MockDashboardSink::new();
        sink.expect_replace_table()
            .withf(|view| *view == TableView::LoadFailed)
            .times(1)
            .return_const(());
        sink.expect_show_message().never();
        sink.expect_clear_input().never();

        let vm = DashboardViewModel::new(
            Arc::new(api),
            Arc::new(StaticCredentials(None)),
            Arc::new(sink),
        );

        assert_eq!(vm.refresh().await, RefreshOutcome::Failed);
    }

    #[tokio::test]
    async fn test_blank_add_never_touches_the_display() {
        let mut api = MockUptimeApi::new();
        api.expect_add_target().never();
        let mut sink = MockDashboardSink::new();
        sink.expect_replace_table().never();
        sink.expect_show_message().never();
        sink.expect_clear_input().never();

        let vm = DashboardViewModel::new(
            Arc::new(api),
            Arc::new(StaticCredentials(None)),
            Arc::new(sink),
        );

        assert_eq!(vm.add_target(" \t ").await, AddOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_add_rejection_shows_body_and_does_not_refresh() {
        let mut api = MockUptimeApi::new();
        api.expect_add_target()
            .times(1)
            .returning(|_, _| Err(http_error(400, "{\"error\":\"invalid url\"}")));
        api.expect_list_targets().never();
        api.expect_latest_results().never();
        let sink = Arc::new(RecordingSink::new());

        let outcome = view_model(api, sink.clone()).add_target("nope").await;

        assert_eq!(outcome, AddOutcome::Rejected);
        let message = sink.message().unwrap();
        assert!(message.is_error());
        assert_eq!(message.msg, "Add failed: {\"error\":\"invalid url\"}");
        assert_eq!(sink.inputs_cleared(), 0);
        assert_eq!(sink.tables_rendered(), 0);
    }

    #[tokio::test]
    async fn test_add_network_failure_shows_error_description() {
        // Nothing listens on port 1, so the request fails before any response.
        let client = crate::api::ApiClient::new("http://127.0.0.1:1".parse().unwrap()).unwrap();
        let sink = Arc::new(RecordingSink::new());
        let vm = DashboardViewModel::new(
            Arc::new(client),
            Arc::new(StaticCredentials(None)),
            sink.clone(),
        );

        let outcome = vm.add_target("http://example.com").await;

        assert_eq!(outcome, AddOutcome::Failed);
        let message = sink.message().unwrap();
        assert!(message.is_error());
        assert!(message.msg.starts_with("Error: "));
        assert_eq!(sink.tables_rendered(), 0);
    }

    #[tokio::test]
    async fn test_add_attaches_token_from_provider() {
        let mut creds = MockCredentialProvider::new();
        creds
            .expect_bearer_token()
            .times(1)
            .returning(|| Some("s3cret".to_string()));
        let mut api = MockUptimeApi::new();
        api.expect_add_target()
            .withf(|_, token| token.as_deref() == Some("s3cret"))
            .times(1)
            .returning(|_, _| Err(http_error(403, "forbidden")));
        let sink = Arc::new(RecordingSink::new());
        let vm = DashboardViewModel::new(Arc::new(api), Arc::new(creds), sink.clone());

        assert_eq!(vm.add_target("http://example.com").await, AddOutcome::Rejected);
    }

    /// First `list_targets` call blocks until released; later calls return at once.
    struct GatedApi {
        api_base: ApiBase,
        calls: AtomicUsize,
        gate: Notify,
    }

    #[async_trait::async_trait]
    impl UptimeApi for GatedApi {
        fn api_base(&self) -> &ApiBase {
            &self.api_base
        }

        async fn list_targets(&self) -> Result<Vec<Target>, ApiError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                self.gate.notified().await;
                return Ok(vec![target("old", "https://stale.example")]);
            }
            Ok(vec![target("new", "https://fresh.example")])
        }

        async fn latest_results(&self) -> Result<Vec<CheckResult>, ApiError> {
            Ok(Vec::new())
        }

        async fn add_target(&self, _url: &str, _token: Option<String>) -> Result<(), ApiError> {
            Ok(())
        }

        async fn health(&self) -> Result<String, ApiError> {
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn test_late_stale_refresh_does_not_overwrite_newer_one() {
        let api = Arc::new(GatedApi {
            api_base: ApiBase::default(),
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
        });
        let sink = Arc::new(RecordingSink::new());
        let vm = DashboardViewModel::new(
            api.clone(),
            Arc::new(StaticCredentials(None)),
            sink.clone(),
        );

        let stale_vm = vm.clone();
        let stale = tokio::spawn(async move { stale_vm.refresh().await });
        while api.calls.load(Ordering::SeqCst) < 1 {
            tokio::task::yield_now().await;
        }

        assert_eq!(vm.refresh().await, RefreshOutcome::Rendered(1));
        api.gate.notify_one();
        assert_eq!(stale.await.unwrap(), RefreshOutcome::Superseded);

        assert_eq!(sink.tables_rendered(), 1);
        assert_eq!(sink.table().rows()[0].url, "https://fresh.example");
    }
}
