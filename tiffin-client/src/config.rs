//! Client configuration

use std::time::Duration;

/// Timing knobs for the cart synchronization engine
#[derive(Debug, Clone, Copy)]
pub struct SyncConfig {
    /// Quiet period after the last cart edit before a push is attempted
    pub debounce: Duration,
    /// Minimum gap between consecutive order reads/writes for a group
    pub cooldown: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1000),
            cooldown: Duration::from_millis(5000),
        }
    }
}

/// Client configuration for connecting to the booking backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin (e.g., "http://localhost:3001"); `/api` is appended
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Cart sync timings
    pub sync: SyncConfig,

    /// Minimum wait between OTP resend attempts, in seconds
    pub otp_resend_secs: u64,
}

impl ClientConfig {
    /// Create a configuration with default timings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 10,
            sync: SyncConfig::default(),
            otp_resend_secs: 60,
        }
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | TIFFIN_API_URL | http://localhost:3001 |
    /// | TIFFIN_REQUEST_TIMEOUT_SECS | 10 |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TIFFIN_API_URL").unwrap_or_else(|_| "http://localhost:3001".into());
        let mut config = Self::new(base_url);
        if let Some(timeout) = std::env::var("TIFFIN_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the cart sync timings
    pub fn with_sync(mut self, sync: SyncConfig) -> Self {
        self.sync = sync;
        self
    }

    /// Set the OTP resend window
    pub fn with_otp_resend_secs(mut self, seconds: u64) -> Self {
        self.otp_resend_secs = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
    }
}
