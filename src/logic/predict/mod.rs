//! Predict Module - inputs, backend payloads and the risk gauge

pub mod inputs;
pub mod response;
pub mod risk;

pub use inputs::{field_help, field_label, ResearcherInputs, FIELD_KEYS};
pub use response::{ErrorResponse, PredictionResponse};
pub use risk::{RiskBand, RiskGauge};
