//! API Module
//!
//! Synchronous commands over a shared prediction session and FAQ search.
//! Async work (network requests) lives in `logic::session`.

pub mod commands;

pub use commands::*;
