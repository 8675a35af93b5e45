pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Organized by functional area: API endpoints, client state, and the
    //! terminal dashboard.

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// API base used when neither `--api-base` nor `UPTIME_API_BASE` is set.
    pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";

    /// Environment variable overriding the API base.
    pub const API_BASE_ENV_VAR: &str = "UPTIME_API_BASE";

    /// API endpoint paths, relative to the API base.
    pub mod endpoints {
        pub const TARGETS: &str = "api/targets";
        pub const LATEST_RESULTS: &str = "api/results/latest";
        pub const HEALTH: &str = "healthz";
    }

    // =============================================================================
    // CLIENT STATE
    // =============================================================================

    /// Directory under the home directory holding the client state file.
    pub const CLIENT_STATE_DIR: &str = ".uptime-dashboard";

    /// Client state file name.
    pub const CLIENT_STATE_FILE: &str = "client.json";

    // =============================================================================
    // TERMINAL DASHBOARD
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// How long the UI loop waits for a key press before redrawing (milliseconds).
    pub const KEY_POLL_INTERVAL_MS: u64 = 100;

    /// Helper function to get the key poll interval
    pub const fn key_poll_interval() -> std::time::Duration {
        std::time::Duration::from_millis(KEY_POLL_INTERVAL_MS)
    }
}
