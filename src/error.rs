//! Error types
//!
//! Three families: what the explanation pipeline rejects, what the
//! prediction transport reports, and what the input form refuses to send.

use thiserror::Error;

pub type ViewResult<T> = Result<T, ViewError>;

/// Pipeline outcome that prevents a view from rendering a chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// Shape/length mismatch or structurally broken entries. Terminal for the view.
    #[error("Cannot display {0}")]
    InvalidPayload(String),

    /// Well-formed payload with nothing left after filtering.
    #[error("No {0} to display")]
    EmptyResult(&'static str),
}

impl ViewError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ViewError::InvalidPayload(msg.into())
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, ViewError::EmptyResult(_))
    }
}

/// Prediction backend failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Parse(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Researcher input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ViewError::EmptyResult("SHAP values").to_string(),
            "No SHAP values to display"
        );
        assert_eq!(
            TransportError::Server { status: 400, message: "Missing required fields".into() }.to_string(),
            "Server error (400): Missing required fields"
        );
        assert!(ViewError::EmptyResult("x").is_empty_result());
        assert!(!ViewError::invalid("x").is_empty_result());
    }
}
