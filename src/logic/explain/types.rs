use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ViewError, ViewResult};

// ============================================================================
// ATTRIBUTION TRAITS
// ============================================================================

/// Anything that can be ranked: a unique name and one finite score.
pub trait Attribution: Clone {
    fn name(&self) -> &str;
    fn value(&self) -> f64;
}

/// Attributions that can absorb a ranked tail into one synthetic entry.
pub trait Foldable: Attribution {
    fn fold(label: &str, tail: &[Self]) -> Self;
}

// ============================================================================
// CONTRIBUTIONS
// ============================================================================

/// One feature's effect: a SHAP value or a global importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub name: String,
    pub value: f64,
}

impl Contribution {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }
}

impl Attribution for Contribution {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.value
    }
}

impl Foldable for Contribution {
    fn fold(label: &str, tail: &[Self]) -> Self {
        Self {
            name: label.to_string(),
            value: tail.iter().map(|c| c.value).sum(),
        }
    }
}

/// One risk factor of a breakdown. Ranked by `relative_importance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownFactor {
    pub name: String,
    pub contribution: f64,
    pub relative_importance: f64,
}

impl Attribution for BreakdownFactor {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.relative_importance
    }
}

impl Foldable for BreakdownFactor {
    fn fold(label: &str, tail: &[Self]) -> Self {
        Self {
            name: label.to_string(),
            contribution: tail.iter().map(|f| f.contribution).sum(),
            relative_importance: tail.iter().map(|f| f.relative_importance).sum(),
        }
    }
}

// ============================================================================
// CONTRIBUTION SET
// ============================================================================

/// Immutable collection built from one backend response.
///
/// Names are non-empty and unique, values are finite. A new response
/// produces a new set; nothing mutates an existing one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionSet<T = Contribution> {
    items: Vec<T>,
}

impl<T: Attribution> ContributionSet<T> {
    pub fn new(items: Vec<T>) -> ViewResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.name().trim().is_empty() {
                return Err(ViewError::invalid("entry with an empty feature name"));
            }
            if !seen.insert(item.name()) {
                return Err(ViewError::invalid(format!("duplicate feature name '{}'", item.name())));
            }
            if !item.value().is_finite() {
                return Err(ViewError::invalid(format!("non-finite value for '{}'", item.name())));
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(Attribution::value).sum()
    }

    /// New set keeping only matching entries, input order preserved.
    pub fn filtered(&self, keep: impl Fn(&T) -> bool) -> Self {
        Self {
            items: self.items.iter().filter(|item| keep(item)).cloned().collect(),
        }
    }
}

impl<T> Default for ContributionSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}
