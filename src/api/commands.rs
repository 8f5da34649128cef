//! Commands - API for the presentation layer
//!
//! Serializable snapshots of every view plus the interaction commands
//! that drive them. Errors are returned as display strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ViewError;
use crate::logic::explain::types::BreakdownFactor;
use crate::logic::faq::SearchState;
use crate::logic::predict::{field_help, field_label, RiskGauge};
use crate::logic::session::{PredictSession, SharedSession};
use crate::logic::snackbar::CloseReason;
use crate::logic::views::{
    BreakdownRow, BreakdownSlice, ImportanceBar, ImportanceDetail, ShapBar, ShapDetail,
};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Render status of one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelStatus {
    Ready,
    /// Valid payload, nothing to show
    Empty,
    /// Payload rejected; show "cannot display"
    Invalid,
    /// No data received yet
    Absent,
}

#[derive(Debug, Clone, Serialize)]
pub struct Panel<T> {
    pub status: PanelStatus,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Panel<T> {
    fn from_view<V>(view: Option<&Result<V, ViewError>>, project: impl FnOnce(&V) -> T) -> Self {
        match view {
            None => Self { status: PanelStatus::Absent, message: None, data: None },
            Some(Ok(v)) => Self { status: PanelStatus::Ready, message: None, data: Some(project(v)) },
            Some(Err(e @ ViewError::EmptyResult(_))) => Self {
                status: PanelStatus::Empty,
                message: Some(e.to_string()),
                data: None,
            },
            Some(Err(e)) => Self {
                status: PanelStatus::Invalid,
                message: Some(e.to_string()),
                data: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionSummary {
    pub loading: bool,
    pub gauge: Option<RiskGauge>,
    pub error: Option<String>,
    pub notification: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputField {
    pub key: &'static str,
    pub label: String,
    pub value: String,
    pub help: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapPanel {
    pub bars: Vec<ShapBar>,
    pub axis_extent: f64,
    pub detail: Option<ShapDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownPanel {
    pub total_risk: String,
    pub slices: Vec<BreakdownSlice>,
    pub rows: Vec<BreakdownRow>,
    pub showing_all: bool,
    pub toggle_label: &'static str,
    pub selected: Option<BreakdownFactor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportancePanel {
    pub bars: Vec<ImportanceBar>,
    pub detail: Option<ImportanceDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
    pub expanded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqPage {
    pub query: String,
    pub match_count: usize,
    pub items: Vec<FaqItem>,
    pub can_show_more: bool,
}

// ============================================================================
// PREDICTION COMMANDS
// ============================================================================

pub fn get_prediction_summary(session: &SharedSession) -> PredictionSummary {
    let s = session.read();
    PredictionSummary {
        loading: s.is_loading(),
        gauge: s.gauge().cloned(),
        error: s.error().map(str::to_string),
        notification: s.snackbar().message().map(str::to_string),
        updated_at: s.updated_at(),
    }
}

pub fn get_input_fields(session: &SharedSession) -> Vec<InputField> {
    let s = session.read();
    s.inputs()
        .fields()
        .into_iter()
        .map(|(key, value)| InputField {
            key,
            label: field_label(key),
            value: value.to_string(),
            help: field_help(key),
        })
        .collect()
}

pub fn set_input(session: &SharedSession, key: &str, value: &str) -> Result<(), String> {
    if session.write().set_input(key, value) {
        Ok(())
    } else {
        Err(format!("Unknown input field: {}", key))
    }
}

pub fn dismiss_notification(session: &SharedSession) {
    session.write().snackbar_mut().close(CloseReason::Dismissed);
}

// ============================================================================
// SHAP COMMANDS
// ============================================================================

pub fn get_shap_view(session: &SharedSession) -> Panel<ShapPanel> {
    let s = session.read();
    Panel::from_view(s.shap(), |v| ShapPanel {
        bars: v.bars(),
        axis_extent: v.axis_extent(),
        detail: v.detail(),
    })
}

pub fn select_shap_feature(session: &SharedSession, feature: &str) -> Result<ShapDetail, String> {
    with_view(session, PredictSession::shap_mut, "SHAP values", |v| {
        v.select(feature).then(|| v.detail()).flatten()
    })?
    .ok_or_else(|| format!("Unknown feature: {}", feature))
}

pub fn close_shap_detail(session: &SharedSession) -> Result<(), String> {
    with_view(session, PredictSession::shap_mut, "SHAP values", |v| v.close_detail())
}

// ============================================================================
// BREAKDOWN COMMANDS
// ============================================================================

pub fn get_breakdown_view(session: &SharedSession) -> Panel<BreakdownPanel> {
    let s = session.read();
    Panel::from_view(s.breakdown(), |v| BreakdownPanel {
        total_risk: v.total_risk_text(),
        slices: v.chart_slices(),
        rows: v.rows(),
        showing_all: v.is_showing_all(),
        toggle_label: v.toggle_label(),
        selected: v.selected().cloned(),
    })
}

pub fn toggle_breakdown(session: &SharedSession) -> Result<bool, String> {
    with_view(session, PredictSession::breakdown_mut, "risk breakdown", |v| {
        v.toggle_all();
        v.is_showing_all()
    })
}

pub fn select_risk_factor(session: &SharedSession, name: &str) -> Result<(), String> {
    let found = with_view(session, PredictSession::breakdown_mut, "risk breakdown", |v| v.select(name))?;
    found.then_some(()).ok_or_else(|| format!("Unknown risk factor: {}", name))
}

// ============================================================================
// IMPORTANCE COMMANDS
// ============================================================================

pub fn get_importance_view(session: &SharedSession) -> Panel<ImportancePanel> {
    let s = session.read();
    Panel::from_view(s.importance(), |v| ImportancePanel {
        bars: v.bars(),
        detail: v.detail(),
    })
}

pub fn select_importance_feature(session: &SharedSession, feature: &str) -> Result<ImportanceDetail, String> {
    with_view(session, PredictSession::importance_mut, "feature importance", |v| {
        v.select(feature).then(|| v.detail()).flatten()
    })?
    .ok_or_else(|| format!("Unknown feature: {}", feature))
}

pub fn close_importance_detail(session: &SharedSession) -> Result<(), String> {
    with_view(session, PredictSession::importance_mut, "feature importance", |v| v.close_detail())
}

fn with_view<V, R>(
    session: &SharedSession,
    get: impl FnOnce(&mut PredictSession) -> Option<&mut V>,
    what: &str,
    f: impl FnOnce(&mut V) -> R,
) -> Result<R, String> {
    let mut s = session.write();
    get(&mut *s)
        .map(f)
        .ok_or_else(|| format!("{} not available", what))
}

// ============================================================================
// FAQ COMMANDS
// ============================================================================

pub fn get_faq_page(search: &SearchState) -> FaqPage {
    let expanded = search.expanded();
    FaqPage {
        query: search.query().to_string(),
        match_count: search.matches().len(),
        items: search
            .visible()
            .iter()
            .map(|e| FaqItem {
                question: e.question,
                answer: e.answer,
                expanded: expanded == Some(e.question),
            })
            .collect(),
        can_show_more: search.can_show_more(),
    }
}

pub fn search_faq(search: &mut SearchState, query: &str) -> FaqPage {
    search.set_query(query);
    get_faq_page(search)
}

pub fn show_more_faq(search: &mut SearchState) -> FaqPage {
    search.show_more();
    get_faq_page(search)
}

pub fn toggle_faq_panel(search: &mut SearchState, question: &str) -> FaqPage {
    search.toggle_panel(question);
    get_faq_page(search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::faq;
    use serde_json::json;

    fn loaded_session() -> SharedSession {
        let session = PredictSession::shared();
        {
            let mut s = session.write();
            let ticket = s.begin_request();
            let response = serde_json::from_value(json!({
                "risk": 64.2,
                "shap_values": [0.3, -0.5],
                "feature_names": ["P-VALUE", "OR or BETA"],
                "riskBreakdown": {"features": [], "totalRisk": 0.642}
            }))
            .unwrap();
            s.apply_prediction(ticket, Ok(response));
        }
        session
    }

    #[test]
    fn test_panels_after_prediction() {
        let session = loaded_session();

        let summary = get_prediction_summary(&session);
        assert!(!summary.loading);
        assert_eq!(summary.notification.as_deref(), Some("Prediction completed successfully"));

        let shap = get_shap_view(&session);
        assert_eq!(shap.status, PanelStatus::Ready);
        assert_eq!(shap.data.unwrap().bars[0].feature, "OR or BETA");

        let breakdown = get_breakdown_view(&session);
        assert_eq!(breakdown.status, PanelStatus::Empty);
        assert_eq!(breakdown.message.as_deref(), Some("No risk factors to display"));

        assert_eq!(get_importance_view(&session).status, PanelStatus::Absent);
    }

    #[test]
    fn test_shap_selection_commands() {
        let session = loaded_session();
        let detail = select_shap_feature(&session, "P-VALUE").unwrap();
        assert_eq!(detail.summary, "This feature increases the risk prediction by 0.3000.");
        assert!(select_shap_feature(&session, "nope").is_err());
        let kept = get_shap_view(&session).data.unwrap().detail.unwrap();
        assert_eq!(kept.feature, "P-VALUE");

        close_shap_detail(&session).unwrap();
        assert!(get_shap_view(&session).data.unwrap().detail.is_none());
        assert!(toggle_breakdown(&session).is_err());
    }

    #[test]
    fn test_importance_selection_commands() {
        let session = loaded_session();
        session
            .write()
            .apply_importance(Ok(json!({"P-VALUE": 0.3, "OR or BETA": 0.5})));

        let detail = select_importance_feature(&session, "OR or BETA").unwrap();
        assert_eq!(detail.feature, "OR or BETA");
        assert_eq!(
            select_importance_feature(&session, "APOE").unwrap_err(),
            "Unknown feature: APOE"
        );

        close_importance_detail(&session).unwrap();
        assert!(get_importance_view(&session).data.unwrap().detail.is_none());
    }

    #[test]
    fn test_inputs_and_notification() {
        let session = loaded_session();
        set_input(&session, "pValue", "0.05").unwrap();
        assert!(set_input(&session, "apoe", "e4").is_err());

        let fields = get_input_fields(&session);
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[1].value, "0.05");

        dismiss_notification(&session);
        assert!(get_prediction_summary(&session).notification.is_none());
    }

    #[test]
    fn test_faq_commands() {
        let mut search = faq::new_search();
        let page = get_faq_page(&search);
        assert_eq!(page.items.len(), 5);
        assert!(page.can_show_more);

        let page = show_more_faq(&mut search);
        assert_eq!(page.items.len(), 9);
        assert!(!page.can_show_more);

        let page = search_faq(&mut search, "APOE");
        assert_eq!(page.match_count, 1);
        let question = page.items[0].question;

        let page = toggle_faq_panel(&mut search, question);
        assert!(page.items[0].expanded);
    }
}
