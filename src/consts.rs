pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed values the dashboard runs with,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of entries to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying events from actions back to the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // BACKEND CONFIGURATION
    // =============================================================================

    /// Base URL used when neither the CLI, the environment nor the config file names one.
    pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

    /// Environment variable overriding the configured base URL.
    pub const BASE_URL_ENV_VAR: &str = "BOT_DASHBOARD_URL";

    /// Status polling configuration
    pub mod polling {
        use std::time::Duration;

        /// Fixed interval between status polls (milliseconds)
        pub const STATUS_INTERVAL_MS: u64 = 5_000;

        /// Helper function to get the status polling interval
        pub const fn status_interval() -> Duration {
            Duration::from_millis(STATUS_INTERVAL_MS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up unless a key is pressed.
        pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

        /// Frame/input poll period of the UI loop.
        pub const FRAME_POLL: Duration = Duration::from_millis(100);

        /// Shown in the accounts panel when the backend has no accounts.
        pub const NO_ACCOUNTS_PLACEHOLDER: &str = "No accounts added";

        /// Shown in the URLs panel when the backend has no URLs.
        pub const NO_URLS_PLACEHOLDER: &str = "No URLs added";
    }
}
