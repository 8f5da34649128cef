//! Prediction Session - state behind the prediction page
//!
//! Owns the latest prediction and its explanation views. Every submission
//! is stamped with a monotonically increasing sequence number; only the
//! response to the newest submission is applied, older ones are dropped.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{InputError, TransportError, ViewResult};
use crate::logic::backend::PredictClient;
use crate::logic::predict::{PredictionResponse, ResearcherInputs, RiskGauge};
use crate::logic::snackbar::Snackbar;
use crate::logic::views::{BreakdownView, ImportanceView, ShapView};

pub type SharedSession = Arc<RwLock<PredictSession>>;

/// Identifies one in-flight prediction request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestTicket {
    pub seq: u64,
    pub request_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued meanwhile; response dropped
    Stale,
    /// Transport failed; previous results kept
    Failed,
    /// Inputs did not validate; nothing was sent
    Rejected,
}

#[derive(Debug, Default)]
pub struct PredictSession {
    issued: u64,
    loading: bool,
    inputs: ResearcherInputs,
    gauge: Option<RiskGauge>,
    shap: Option<ViewResult<ShapView>>,
    breakdown: Option<ViewResult<BreakdownView>>,
    importance: Option<ViewResult<ImportanceView>>,
    error: Option<String>,
    snackbar: Snackbar,
    updated_at: Option<DateTime<Utc>>,
}

impl PredictSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSession {
        Arc::new(RwLock::new(Self::new()))
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    pub fn inputs(&self) -> &ResearcherInputs {
        &self.inputs
    }

    pub fn set_input(&mut self, key: &str, value: impl Into<String>) -> bool {
        self.inputs.set(key, value)
    }

    pub fn apply_sample(&mut self, result: Result<ResearcherInputs, TransportError>) {
        match result {
            Ok(sample) => {
                self.inputs = sample;
                self.snackbar.show("Sample data loaded successfully");
            }
            Err(e) => {
                log::error!("Error fetching sample data: {}", e);
                self.snackbar.show("Failed to load sample data");
            }
        }
    }

    // ------------------------------------------------------------------
    // Prediction lifecycle
    // ------------------------------------------------------------------

    /// Validate current inputs; on failure the error line is set.
    pub fn check_inputs(&mut self) -> Result<(), InputError> {
        self.inputs.validate().map_err(|e| {
            self.error = Some(format!("An error occurred: {}", e));
            e
        })
    }

    pub fn begin_request(&mut self) -> RequestTicket {
        self.issued += 1;
        self.loading = true;
        self.error = None;

        let ticket = RequestTicket {
            seq: self.issued,
            request_id: Uuid::new_v4(),
        };
        log::info!("Prediction request #{} ({}) submitted", ticket.seq, ticket.request_id);
        ticket
    }

    pub fn apply_prediction(
        &mut self,
        ticket: RequestTicket,
        result: Result<PredictionResponse, TransportError>,
    ) -> ApplyOutcome {
        if ticket.seq != self.issued {
            log::info!(
                "Discarding stale response #{} ({}); newest is #{}",
                ticket.seq,
                ticket.request_id,
                self.issued
            );
            return ApplyOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(response) => {
                self.replace_results(&response);
                self.snackbar.show("Prediction completed successfully");
                log::info!("Response #{} applied", ticket.seq);
                ApplyOutcome::Applied
            }
            Err(e) => {
                log::error!("Prediction request #{} failed: {}", ticket.seq, e);
                let detail = match &e {
                    TransportError::Server { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                self.error = Some(format!("An error occurred: {}", detail));
                self.snackbar.show("Error occurred during prediction");
                ApplyOutcome::Failed
            }
        }
    }

    /// Every view is rebuilt from the new response; nothing carries over.
    fn replace_results(&mut self, response: &PredictionResponse) {
        self.gauge = Some(RiskGauge::new(response.risk));

        self.shap = response
            .has_shap()
            .then(|| ShapView::from_payload(&response.shap_values, &response.feature_names));
        self.breakdown = response.risk_breakdown.as_ref().map(BreakdownView::from_payload);

        for err in [
            self.shap.as_ref().and_then(|r| r.as_ref().err()),
            self.breakdown.as_ref().and_then(|r| r.as_ref().err()),
        ]
        .into_iter()
        .flatten()
        {
            log::warn!("View unavailable: {}", err);
        }

        self.updated_at = Some(response.timestamp().unwrap_or_else(Utc::now));
    }

    pub fn apply_importance(&mut self, result: Result<Value, TransportError>) {
        match result {
            Ok(raw) => {
                let view = ImportanceView::from_payload(&raw);
                if let Err(e) = &view {
                    log::warn!("Feature importance unavailable: {}", e);
                }
                self.importance = Some(view);
            }
            Err(e) => {
                log::error!("Error fetching feature importance: {}", e);
                self.snackbar.show("Failed to load feature importance");
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    pub fn gauge(&self) -> Option<&RiskGauge> {
        self.gauge.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn shap(&self) -> Option<&ViewResult<ShapView>> {
        self.shap.as_ref()
    }

    pub fn shap_mut(&mut self) -> Option<&mut ShapView> {
        self.shap.as_mut().and_then(|r| r.as_mut().ok())
    }

    pub fn breakdown(&self) -> Option<&ViewResult<BreakdownView>> {
        self.breakdown.as_ref()
    }

    pub fn breakdown_mut(&mut self) -> Option<&mut BreakdownView> {
        self.breakdown.as_mut().and_then(|r| r.as_mut().ok())
    }

    pub fn importance(&self) -> Option<&ViewResult<ImportanceView>> {
        self.importance.as_ref()
    }

    pub fn importance_mut(&mut self) -> Option<&mut ImportanceView> {
        self.importance.as_mut().and_then(|r| r.as_mut().ok())
    }

    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    pub fn snackbar_mut(&mut self) -> &mut Snackbar {
        &mut self.snackbar
    }
}

// ============================================================================
// ASYNC HELPERS
// ============================================================================

/// Submit the session's current inputs.
pub async fn submit(session: &SharedSession, client: &PredictClient) -> ApplyOutcome {
    let inputs = {
        let mut guard = session.write();
        if guard.check_inputs().is_err() {
            return ApplyOutcome::Rejected;
        }
        guard.inputs.clone()
    };
    submit_with(session, client, inputs).await
}

/// Submit explicit inputs. The lock is never held across the request.
pub async fn submit_with(
    session: &SharedSession,
    client: &PredictClient,
    inputs: ResearcherInputs,
) -> ApplyOutcome {
    let ticket = session.write().begin_request();
    let result = client.predict(&inputs).await;
    session.write().apply_prediction(ticket, result)
}

pub async fn load_sample(session: &SharedSession, client: &PredictClient) {
    let result = client.sample_inputs().await;
    session.write().apply_sample(result);
}

pub async fn load_importance(session: &SharedSession, client: &PredictClient) {
    let result = client.feature_importance().await;
    session.write().apply_importance(result);
}
