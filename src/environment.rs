use crate::consts::cli_consts::{API_BASE_ENV_VAR, DEFAULT_API_BASE};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The base URL of the uptime API the dashboard talks to.
///
/// Stored without a trailing slash so endpoint paths can be appended directly.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Resolves the API base from, in order of precedence: an explicit value
    /// (usually the `--api-base` flag), the `UPTIME_API_BASE` environment
    /// variable, and finally the built-in default.
    pub fn resolve(explicit: Option<&str>) -> Self {
        let from_env = std::env::var(API_BASE_ENV_VAR).ok();
        Self::resolve_from(explicit, from_env.as_deref())
    }

    fn resolve_from(explicit: Option<&str>, from_env: Option<&str>) -> Self {
        explicit
            .or(from_env)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Joins an endpoint path onto the base.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.0, endpoint.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        ApiBase(DEFAULT_API_BASE.to_string())
    }
}

impl FromStr for ApiBase {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ApiBase(s.trim().trim_end_matches('/').to_string()))
    }
}

impl Display for ApiBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for ApiBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiBase({})", self.0)
    }
}
