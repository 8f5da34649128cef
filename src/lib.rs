//! Alzheimer's genetic risk client core
//!
//! Turns prediction-service payloads into ranked, bounded and grouped
//! explanation views with their disclosure state.

pub mod api;
pub mod constants;
pub mod error;
pub mod logic;
