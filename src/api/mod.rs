use crate::api::error::ApiError;
use crate::api::types::{CheckResult, Target};
use crate::environment::ApiBase;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UptimeApi: Send + Sync {
    fn api_base(&self) -> &ApiBase;

    /// Lists all monitored targets, in the order the service returns them.
    async fn list_targets(&self) -> Result<Vec<Target>, ApiError>;

    /// Lists the latest known check result per target.
    async fn latest_results(&self) -> Result<Vec<CheckResult>, ApiError>;

    /// Registers a new target URL, optionally authenticated with a bearer token.
    async fn add_target(&self, url: &str, bearer_token: Option<String>) -> Result<(), ApiError>;

    /// Probes the service liveness endpoint and returns its body.
    async fn health(&self) -> Result<String, ApiError>;
}
