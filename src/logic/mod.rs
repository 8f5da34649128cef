//! Logic Module - Explanation pipeline & prediction state
//!
//! - `explain/` - sanitize, rank, select, group and disclose attributions
//! - `views/` - SHAP, breakdown and importance presentation models
//! - `faq/` - FAQ corpus and search
//! - `predict/` - researcher inputs, responses, risk bands
//! - `backend/` - HTTP client for the prediction service

pub mod explain;
pub mod views;
pub mod faq;
pub mod predict;

pub mod config;
pub mod backend;
pub mod snackbar;
pub mod session;
