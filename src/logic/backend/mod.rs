//! Backend Module - prediction service client
//!
//! This module handles:
//! - Risk prediction requests
//! - Sample input retrieval
//! - Global feature importance retrieval

pub mod client;

pub use client::PredictClient;
