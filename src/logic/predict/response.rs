//! Prediction backend payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::logic::views::breakdown::RiskBreakdownPayload;

/// `POST /predict` response
///
/// Explanation fields stay raw JSON: the sanitizer decides whether they
/// are usable, not serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Risk percentage, 0-100
    pub risk: f64,
    #[serde(default)]
    pub shap_values: Value,
    #[serde(default)]
    pub feature_names: Value,
    #[serde(default, rename = "riskBreakdown")]
    pub risk_breakdown: Option<RiskBreakdownPayload>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl PredictionResponse {
    pub fn has_shap(&self) -> bool {
        !self.shap_values.is_null() && !self.feature_names.is_null()
    }

    /// Backend timestamps are naive ISO-8601 local times; fall back to RFC 3339.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|t| t.and_utc())
            })
    }
}

/// Body of a non-2xx backend answer
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
