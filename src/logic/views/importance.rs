//! Global feature importance view - full ranked reference table

use serde::Serialize;
use serde_json::Value;

use super::truncate_label;
use crate::error::ViewResult;
use crate::logic::explain::types::Contribution;
use crate::logic::explain::{sanitize, DisclosedView, ExplainProfile};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportanceBar {
    pub feature: String,
    pub label: String,
    pub importance: f64,
}

/// Dialog content for the clicked feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportanceDetail {
    pub feature: String,
    pub importance_text: String,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportanceView {
    inner: DisclosedView<Contribution>,
}

impl ImportanceView {
    pub fn from_payload(raw: &Value) -> ViewResult<Self> {
        let set = sanitize::sanitize_importance(raw)?;
        Ok(Self {
            inner: DisclosedView::new(ExplainProfile::importance(), &set)?,
        })
    }

    pub fn bars(&self) -> Vec<ImportanceBar> {
        self.inner
            .visible()
            .iter()
            .map(|c| ImportanceBar {
                feature: c.name.clone(),
                label: truncate_label(&c.name),
                importance: c.value,
            })
            .collect()
    }

    pub fn select(&mut self, feature: &str) -> bool {
        self.inner.select(feature)
    }

    pub fn close_detail(&mut self) {
        self.inner.deselect();
    }

    pub fn detail(&self) -> Option<ImportanceDetail> {
        self.inner.selected().map(|c| ImportanceDetail {
            feature: c.name.clone(),
            importance_text: format!("Importance: {:.4}", c.value),
            description: feature_description(&c.name),
        })
    }

    pub fn len(&self) -> usize {
        self.inner.ranked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.ranked().is_empty()
    }
}

/// Long-form description of a model input column.
pub fn feature_description(feature: &str) -> &'static str {
    match feature {
        "STRONGEST SNP-RISK ALLELE" => "This feature represents the most significant Single Nucleotide Polymorphism (SNP) associated with Alzheimer's risk.",
        "P-VALUE" => "The p-value indicates the statistical significance of the association between the genetic variant and Alzheimer's disease.",
        "OR or BETA" => "This represents the effect size of the genetic variant, indicating the strength of its association with Alzheimer's risk.",
        "RISK ALLELE FREQUENCY" => "This is the frequency of the risk-associated allele in the population studied.",
        "PVALUE_MLOG" => "This is the negative log10 of the p-value, which helps visualize very small p-values more effectively.",
        _ => "No detailed description available for this feature.",
    }
}
