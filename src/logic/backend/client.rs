//! Prediction API Client
//!
//! HTTP client for the remote risk prediction service.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::error::TransportError;
use crate::logic::config::ClientConfig;
use crate::logic::predict::{ErrorResponse, PredictionResponse, ResearcherInputs};

/// Prediction API client
pub struct PredictClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl PredictClient {
    /// Create new prediction client
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http_client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request a risk prediction for the given inputs
    pub async fn predict(&self, inputs: &ResearcherInputs) -> Result<PredictionResponse, TransportError> {
        let url = self.config.endpoint("/predict");
        log::info!("Requesting prediction from {}", url);

        let response = self.http_client
            .post(&url)
            .json(inputs)
            .send()
            .await?;

        let prediction: PredictionResponse = Self::read_json(response).await?;
        log::info!("Prediction received: {:.2}%", prediction.risk);
        Ok(prediction)
    }

    /// Fetch sample inputs (bodiless POST to the prediction endpoint)
    pub async fn sample_inputs(&self) -> Result<ResearcherInputs, TransportError> {
        let url = self.config.endpoint("/predict");
        log::debug!("Requesting sample inputs from {}", url);

        let response = self.http_client.post(&url).send().await?;
        Self::read_json(response).await
    }

    /// Fetch global feature importances as raw JSON
    pub async fn feature_importance(&self) -> Result<Value, TransportError> {
        let url = self.config.endpoint("/feature_importance");
        log::debug!("Requesting feature importance from {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::server_error(response).await);
        }

        // The endpoint may answer with a plain-text placeholder; keep it as a
        // JSON string so the sanitizer reports it as an invalid payload.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TransportError> {
        if response.status().is_success() {
            response.json().await
                .map_err(|e| TransportError::Parse(e.to_string()))
        } else {
            Err(Self::server_error(response).await)
        }
    }

    async fn server_error(response: reqwest::Response) -> TransportError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);

        log::error!("Backend request failed ({}): {}", status, message);
        TransportError::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Bytes,
        http::StatusCode,
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;

    async fn fake_predict(body: Bytes) -> axum::response::Response {
        if body.is_empty() {
            return Json(json!({
                "snpRiskAllele": "rs429358-C",
                "pValue": "1e-50",
                "orBeta": 3.2,
                "riskAlleleFrequency": "0.14",
                "pValueMlog": "50"
            }))
            .into_response();
        }

        let input: Value = match serde_json::from_slice(&body) {
            Ok(v) => v,
            Err(_) => return (StatusCode::BAD_REQUEST, "not json").into_response(),
        };
        if input.get("orBeta").and_then(Value::as_str).unwrap_or("").is_empty() {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": "Missing required fields"}))).into_response();
        }

        Json(json!({
            "risk": 37.5,
            "shap_values": [0.2, -0.1],
            "feature_names": ["OR or BETA", "P-VALUE"],
            "timestamp": "2024-06-01T10:20:30.123456"
        }))
        .into_response()
    }

    async fn spawn_backend() -> String {
        let router = Router::new()
            .route("/predict", post(fake_predict))
            .route(
                "/feature_importance",
                get(|| async { "Feature importance route is a placeholder." }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn inputs(or_beta: &str) -> ResearcherInputs {
        ResearcherInputs {
            snp_risk_allele: "rs429358-C".into(),
            p_value: "1e-50".into(),
            or_beta: or_beta.into(),
            risk_allele_frequency: "0.14".into(),
            p_value_mlog: "50".into(),
        }
    }

    #[tokio::test]
    async fn test_predict_roundtrip() {
        let client = PredictClient::new(ClientConfig::new(spawn_backend().await, 5)).unwrap();
        let response = client.predict(&inputs("3.2")).await.unwrap();
        assert_eq!(response.risk, 37.5);
        assert!(response.has_shap());
    }

    #[tokio::test]
    async fn test_server_error_message() {
        let client = PredictClient::new(ClientConfig::new(spawn_backend().await, 5)).unwrap();
        let err = client.predict(&inputs("")).await.unwrap_err();
        assert_eq!(
            err,
            TransportError::Server { status: 400, message: "Missing required fields".into() }
        );
    }

    #[tokio::test]
    async fn test_sample_inputs() {
        let client = PredictClient::new(ClientConfig::new(spawn_backend().await, 5)).unwrap();
        let sample = client.sample_inputs().await.unwrap();
        assert_eq!(sample.or_beta, "3.2");
        assert!(sample.validate().is_ok());
    }

    #[tokio::test]
    async fn test_placeholder_importance() {
        let client = PredictClient::new(ClientConfig::new(spawn_backend().await, 5)).unwrap();
        let raw = client.feature_importance().await.unwrap();
        assert!(raw.is_string());
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let client = PredictClient::new(ClientConfig::new("http://127.0.0.1:9", 2)).unwrap();
        let err = client.predict(&inputs("3.2")).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
