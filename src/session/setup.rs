//! Session setup and initialization

use crate::api::ApiClient;
use crate::credentials::{CredentialProvider, StaticCredentials, StoredCredentials};
use crate::dashboard::{DashboardSink, DashboardViewModel};
use crate::environment::ApiBase;
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and one-shot modes
pub struct SessionData {
    /// The API the session talks to
    pub api_base: ApiBase,
    /// View model rendering into the session's sink
    pub view_model: DashboardViewModel,
}

/// Wires the HTTP client, the stored credentials and the given display
/// into a view model.
///
/// # Arguments
/// * `api_base` - Base URL of the uptime API
/// * `sink` - Where tables and messages are rendered
/// * `token` - Token used instead of the stored one, if given
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(
    api_base: ApiBase,
    sink: Arc<dyn DashboardSink>,
    token: Option<String>,
) -> Result<SessionData, Box<dyn Error>> {
    let client = ApiClient::new(api_base.clone())?;
    let credentials: Arc<dyn CredentialProvider> = match token {
        Some(token) => Arc::new(StaticCredentials(Some(token))),
        None => Arc::new(StoredCredentials::in_home_dir()),
    };
    log::debug!("Session connected to {}", api_base);

    let view_model = DashboardViewModel::new(Arc::new(client), credentials, sink);

    Ok(SessionData {
        api_base,
        view_model,
    })
}
