//! Uptime API Client
//!
//! A JSON-over-HTTP client for the uptime service: target listing, latest
//! results, and target registration.

use crate::api::UptimeApi;
use crate::api::error::ApiError;
use crate::api::types::{AddTargetRequest, CheckResult, Target};
use crate::consts::cli_consts::endpoints;
use crate::environment::ApiBase;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT_VALUE: &str = concat!("uptime-dashboard/", env!("CARGO_PKG_VERSION"));

/// No request or connect timeout is configured: a hung request hangs the
/// operation that issued it and nothing else.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_base: ApiBase,
}

impl ApiClient {
    pub fn new(api_base: ApiBase) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new().build()?,
            api_base,
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.api_base.url(endpoint);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl UptimeApi for ApiClient {
    fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    async fn list_targets(&self) -> Result<Vec<Target>, ApiError> {
        // The service encodes an empty store as `null`.
        let targets: Option<Vec<Target>> = self.get_json(endpoints::TARGETS).await?;
        Ok(targets.unwrap_or_default())
    }

    async fn latest_results(&self) -> Result<Vec<CheckResult>, ApiError> {
        let results: Option<Vec<CheckResult>> =
            self.get_json(endpoints::LATEST_RESULTS).await?;
        Ok(results.unwrap_or_default())
    }

    async fn add_target(&self, url: &str, bearer_token: Option<String>) -> Result<(), ApiError> {
        let endpoint = self.api_base.url(endpoints::TARGETS);
        let body = serde_json::to_vec(&AddTargetRequest { url })?;
        log::debug!("POST {}", endpoint);

        let mut request = self
            .client
            .post(&endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .body(body);
        if let Some(token) = bearer_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        // The success body is not part of the contract; only the status is.
        Self::handle_response_status(request.send().await?).await?;
        Ok(())
    }

    async fn health(&self) -> Result<String, ApiError> {
        let url = self.api_base.url(endpoints::HEALTH);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(server.url().parse().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_list_targets_decodes_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/targets")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"t1","url":"https://a.example","created_at":"2024-05-01T10:00:00Z"}]"#)
            .create_async()
            .await;

        let targets = client_for(&server).list_targets().await.unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].url, "https://a.example");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unparsable_created_at_does_not_fail_targets() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/targets")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"t1","url":"https://a.example","created_at":"2024-05-01 10:00:00"}]"#)
            .create_async()
            .await;

        let targets = client_for(&server).list_targets().await.unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id.to_string(), "t1");
    }

    #[tokio::test]
    async fn test_null_payload_is_empty_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/results/latest")
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let results = client_for(&server).latest_results().await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/targets")
            .with_status(500)
            .with_body(r#"{"error":"list error"}"#)
            .create_async()
            .await;

        match client_for(&server).list_targets().await {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, r#"{"error":"list error"}"#);
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/targets")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let result = client_for(&server).list_targets().await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_add_target_sends_json_and_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/targets")
            .match_header("content-type", "application/json")
            .match_header("authorization", "Bearer s3cret")
            .match_body(Matcher::JsonString(
                r#"{"url":"http://example.com"}"#.to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"target":{},"summary":{}}"#)
            .create_async()
            .await;

        client_for(&server)
            .add_target("http://example.com", Some("s3cret".to_string()))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_target_without_token_sends_no_authorization() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/targets")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .create_async()
            .await;

        client_for(&server)
            .add_target("http://example.com", None)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_target_rejection_carries_body_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/targets")
            .with_status(400)
            .with_body(r#"{"error":"invalid url"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .add_target("nope", None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), r#"{"error":"invalid url"}"#);
    }

    #[tokio::test]
    async fn test_health_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/healthz")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        assert_eq!(client_for(&server).health().await.unwrap(), "ok");
    }
}
