//! SHAP explanation view - top 15 local drivers of one prediction

use serde::Serialize;
use serde_json::Value;

use crate::error::ViewResult;
use crate::logic::explain::{sanitize, DisclosedView, ExplainProfile};
use crate::logic::explain::types::Contribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increases,
    Decreases,
}

impl Direction {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 { Direction::Increases } else { Direction::Decreases }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increases => "increases",
            Direction::Decreases => "decreases",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapBar {
    pub feature: String,
    pub value: f64,
    pub direction: Direction,
}

/// Popup content for the clicked bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapDetail {
    pub feature: String,
    pub value_text: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapView {
    inner: DisclosedView<Contribution>,
}

impl ShapView {
    pub fn from_payload(shap_values: &Value, feature_names: &Value) -> ViewResult<Self> {
        let set = sanitize::sanitize_parallel(feature_names, shap_values)?;
        Ok(Self {
            inner: DisclosedView::new(ExplainProfile::shap(), &set)?,
        })
    }

    pub fn bars(&self) -> Vec<ShapBar> {
        self.inner
            .visible()
            .iter()
            .map(|c| ShapBar {
                feature: c.name.clone(),
                value: c.value,
                direction: Direction::of(c.value),
            })
            .collect()
    }

    /// Half-width of the symmetric value axis.
    pub fn axis_extent(&self) -> f64 {
        self.inner
            .visible()
            .iter()
            .map(|c| c.value.abs())
            .fold(0.0, f64::max)
    }

    pub fn select(&mut self, feature: &str) -> bool {
        self.inner.select(feature)
    }

    pub fn close_detail(&mut self) {
        self.inner.deselect();
    }

    pub fn detail(&self) -> Option<ShapDetail> {
        self.inner.selected().map(|c| ShapDetail {
            feature: c.name.clone(),
            value_text: format!("SHAP Value: {:.4}", c.value),
            summary: format!(
                "This feature {} the risk prediction by {:.4}.",
                Direction::of(c.value).as_str(),
                c.value.abs()
            ),
        })
    }

    pub fn len(&self) -> usize {
        self.inner.ranked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.ranked().is_empty()
    }
}
