//! Credential providers for write requests.

use crate::config::{ClientState, get_config_path};
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// Supplies the optional bearer token attached to add-target requests.
#[cfg_attr(test, automock)]
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Reads `api_token` from the client state file on every call, so a
/// `login` in another shell takes effect without restarting.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    /// `None` means the default location under the home directory, looked
    /// up only when a token is actually needed.
    path: Option<PathBuf>,
}

impl StoredCredentials {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn in_home_dir() -> Self {
        Self { path: None }
    }

    fn resolve_path(&self) -> Option<PathBuf> {
        match &self.path {
            Some(path) => Some(path.clone()),
            None => match get_config_path() {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("No client state location, sending no token: {}", e);
                    None
                }
            },
        }
    }
}

impl CredentialProvider for StoredCredentials {
    fn bearer_token(&self) -> Option<String> {
        let path = self.resolve_path()?;
        match ClientState::load_or_default(&path) {
            Ok(state) => state.api_token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                log::warn!("Ignoring unreadable client state {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// A fixed token, or none.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub Option<String>);

impl CredentialProvider for StaticCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_stored_credentials_absent_by_default() {
        let dir = tempdir().unwrap();
        let creds = StoredCredentials::new(dir.path().join("client.json"));
        assert_eq!(creds.bearer_token(), None);
    }

    #[test]
    fn test_stored_credentials_reads_saved_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.json");
        ClientState::with_token("abc123").save(&path).unwrap();

        let creds = StoredCredentials::new(path);
        assert_eq!(creds.bearer_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_stored_credentials_ignores_blank_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.json");
        ClientState::with_token("  ").save(&path).unwrap();

        assert_eq!(StoredCredentials::new(path).bearer_token(), None);
    }

    #[test]
    fn test_stored_credentials_tolerates_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(StoredCredentials::new(path).bearer_token(), None);
    }
}
