pub mod cli;

use std::time::Duration;

pub use cli::CliConfig;

/// Production calculator host.
pub const PRODUCTION_BASE_URL: &str = "https://api.cdek.ru/v2";
/// Sandbox host used when the test flag is set.
pub const SANDBOX_BASE_URL: &str = "https://api.edu.cdek.ru/v2";

/// Fixed configuration of a [`crate::PriceCalculator`]. Built once, never
/// mutated afterwards; the base URL is resolved from the test flag at
/// construction time.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub account: String,
    pub secure: String,
    pub test: bool,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// No credential validation happens here; the remote service is the
    /// authority on whether the pair is accepted.
    pub fn new(account: impl Into<String>, secure: impl Into<String>, test: bool) -> Self {
        let base_url = if test {
            SANDBOX_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        };
        Self {
            account: account.into(),
            secure: secure.into(),
            test,
            base_url: base_url.to_string(),
            timeout: None,
        }
    }

    /// Point the client at another host, keeping the test flag as-is.
    /// Intended for integration tests and self-hosted mirrors.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whole-request deadline applied to every call made by the client.
    /// The default is no timeout, matching the original service behavior.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
