//! Client configuration

use crate::constants;

/// Prediction backend configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL, no trailing slash
    pub backend_url: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::new(constants::get_backend_url(), constants::get_request_timeout())
    }

    pub fn new(backend_url: impl Into<String>, timeout_seconds: u64) -> Self {
        let backend_url = backend_url.into().trim_end_matches('/').to_string();
        Self { backend_url, timeout_seconds }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}
