//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default prediction backend, only edit this file.

/// Default prediction backend URL
///
/// This is the fallback URL when no environment variable is set.
/// For development: http://localhost:5000
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Default HTTP request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Number of SHAP attributions kept per prediction
pub const SHAP_TOP_K: usize = 15;

/// Number of risk factors shown before the rest fold into "Other"
pub const BREAKDOWN_TOP_N: usize = 4;

/// Label of the synthetic bucket holding the folded tail
pub const OTHER_LABEL: &str = "Other";

/// FAQ entries revealed per "show more"
pub const FAQ_PAGE_STEP: usize = 5;

/// Snackbar auto-hide delay (milliseconds)
pub const SNACKBAR_AUTO_HIDE_MS: u64 = 6000;

/// Feature labels are cut to this many characters on chart axes
pub const LABEL_MAX_LEN: usize = 20;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Alzheimer's Genetic Risk Explorer";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get backend URL from environment or use default
pub fn get_backend_url() -> String {
    std::env::var("RISK_BACKEND_URL")
        .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

/// Get request timeout from environment or use default
pub fn get_request_timeout() -> u64 {
    std::env::var("RISK_REQUEST_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
}
