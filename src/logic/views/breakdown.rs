//! Risk factor breakdown view
//!
//! Chart: top 4 factors plus a folded "Other" slice.
//! Table: top 4 or every significant factor, toggled by the user.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format_percent;
use crate::error::{ViewError, ViewResult};
use crate::logic::explain::types::BreakdownFactor;
use crate::logic::explain::{
    build_grouped, sanitize, sanitize::parse_number, DisclosedView, DisclosureAction, ExplainProfile,
    GroupedView,
};

/// Raw `riskBreakdown` object as received
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdownPayload {
    #[serde(default)]
    pub features: Value,
    #[serde(default)]
    pub total_risk: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub name: String,
    pub relative_importance: f64,
    /// Share of the whole pie, 0-1
    pub share: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub name: String,
    pub contribution: String,
    pub relative_importance: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownView {
    inner: DisclosedView<BreakdownFactor>,
    grouped: GroupedView<BreakdownFactor>,
    total_risk: f64,
}

impl BreakdownView {
    pub fn from_payload(payload: &RiskBreakdownPayload) -> ViewResult<Self> {
        let total_risk = parse_number(&payload.total_risk)
            .ok_or_else(|| ViewError::invalid("riskBreakdown.totalRisk is not a number"))?;
        let set = sanitize::sanitize_breakdown(&payload.features)?;

        let inner = DisclosedView::new(ExplainProfile::breakdown(), &set)?;
        let grouped = build_grouped(inner.ranked(), inner.profile());
        Ok(Self { inner, grouped, total_risk })
    }

    pub fn total_risk_text(&self) -> String {
        format!("Total Risk: {}", format_percent(self.total_risk))
    }

    pub fn grouped(&self) -> &GroupedView<BreakdownFactor> {
        &self.grouped
    }

    /// Pie series with each slice's share of the chart total.
    pub fn chart_slices(&self) -> Vec<BreakdownSlice> {
        let total = self.grouped.total();
        self.grouped
            .series()
            .map(|f| {
                let share = if total > 0.0 { f.relative_importance / total } else { 0.0 };
                BreakdownSlice {
                    name: f.name.clone(),
                    relative_importance: f.relative_importance,
                    share,
                    label: format!("{:.0}%", share * 100.0),
                }
            })
            .collect()
    }

    /// Bar chart and table rows: top 4 or all, per the toggle.
    pub fn rows(&self) -> Vec<BreakdownRow> {
        self.inner
            .visible()
            .iter()
            .map(|f| BreakdownRow {
                name: f.name.clone(),
                contribution: format_percent(f.contribution),
                relative_importance: format_percent(f.relative_importance),
            })
            .collect()
    }

    pub fn toggle_all(&mut self) {
        self.inner.apply(DisclosureAction::ToggleAll);
    }

    pub fn is_showing_all(&self) -> bool {
        self.inner.disclosure().is_expanded()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_showing_all() { "Show Top Features" } else { "Show All Features" }
    }

    pub fn select(&mut self, name: &str) -> bool {
        self.inner.select(name)
    }

    pub fn selected(&self) -> Option<&BreakdownFactor> {
        self.inner.selected()
    }

    pub fn len(&self) -> usize {
        self.inner.ranked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.ranked().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> RiskBreakdownPayload {
        RiskBreakdownPayload {
            features: json!([
                {"name": "APOE", "contribution": 0.20, "relativeImportance": 0.40},
                {"name": "TOMM40", "contribution": 0.05, "relativeImportance": 0.10},
                {"name": "CLU", "contribution": 0.08, "relativeImportance": 0.16},
                {"name": "PICALM", "contribution": 0.06, "relativeImportance": 0.12},
                {"name": "CR1", "contribution": 0.04, "relativeImportance": 0.08},
                {"name": "BIN1", "contribution": 0.07, "relativeImportance": 0.14},
                {"name": "SORL1", "contribution": 0.0, "relativeImportance": 0.0}
            ]),
            total_risk: json!(0.5),
        }
    }

    #[test]
    fn test_chart_groups_tail() {
        let view = BreakdownView::from_payload(&payload()).unwrap();
        let slices = view.chart_slices();
        let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["APOE", "CLU", "BIN1", "PICALM", "Other"]);

        let other = view.grouped().other.as_ref().unwrap();
        assert!((other.relative_importance - 0.18).abs() < 1e-12);
        assert!((other.contribution - 0.09).abs() < 1e-12);

        let share_sum: f64 = slices.iter().map(|s| s.share).sum();
        assert!((share_sum - 1.0).abs() < 1e-9);
        assert_eq!(slices[0].label, "40%");
    }

    #[test]
    fn test_table_toggle() {
        let mut view = BreakdownView::from_payload(&payload()).unwrap();
        assert_eq!(view.rows().len(), 4);
        assert_eq!(view.toggle_label(), "Show All Features");

        view.toggle_all();
        let rows = view.rows();
        // zero-importance SORL1 never shows up
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].relative_importance, "40.00%");
        assert_eq!(view.toggle_label(), "Show Top Features");

        view.toggle_all();
        assert_eq!(view.rows().len(), 4);
    }

    #[test]
    fn test_total_risk() {
        let view = BreakdownView::from_payload(&payload()).unwrap();
        assert_eq!(view.total_risk_text(), "Total Risk: 50.00%");

        let mut bad = payload();
        bad.total_risk = Value::Null;
        assert!(matches!(BreakdownView::from_payload(&bad), Err(ViewError::InvalidPayload(_))));
    }

    #[test]
    fn test_few_factors_no_other() {
        let view = BreakdownView::from_payload(&RiskBreakdownPayload {
            features: json!([
                {"name": "APOE", "contribution": 0.2, "relativeImportance": 0.7},
                {"name": "CLU", "contribution": 0.1, "relativeImportance": 0.3}
            ]),
            total_risk: json!("0.3"),
        })
        .unwrap();
        assert!(view.grouped().other.is_none());
        assert_eq!(view.chart_slices().len(), 2);
    }
}
