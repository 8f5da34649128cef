use serde::Serialize;

use super::disclosure::{Disclosure, DisclosureAction, DisclosurePolicy};
use super::group::{group, GroupedView};
use super::rank::{rank, RankKey, RankedView};
use super::select::Bound;
use super::types::{Attribution, ContributionSet, Foldable};
use crate::constants::{BREAKDOWN_TOP_N, OTHER_LABEL, SHAP_TOP_K};
use crate::error::{ViewError, ViewResult};

// ============================================================================
// PROFILES
// ============================================================================

/// Ranking, bounding, grouping and disclosure settings of one view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExplainProfile {
    /// Used in "No {subject} to display"
    pub subject: &'static str,
    pub key: RankKey,
    /// Hard cap applied once after ranking
    pub bound: Bound,
    /// Drop `value <= 0` before ranking
    pub positive_only: bool,
    /// Fold everything past this rank into "Other"
    pub group_top_n: Option<usize>,
    pub disclosure: DisclosurePolicy,
}

impl ExplainProfile {
    /// Per-prediction SHAP attributions: 15 largest by |value|.
    pub fn shap() -> Self {
        Self {
            subject: "SHAP values",
            key: RankKey::Magnitude,
            bound: Bound::Top(SHAP_TOP_K),
            positive_only: false,
            group_top_n: None,
            disclosure: DisclosurePolicy::show_all(),
        }
    }

    /// Global importance reference table, shown in full.
    pub fn importance() -> Self {
        Self {
            subject: "feature importances",
            key: RankKey::Magnitude,
            bound: Bound::All,
            positive_only: false,
            group_top_n: None,
            disclosure: DisclosurePolicy::show_all(),
        }
    }

    /// Risk factors: positive only, top 4 + "Other", toggle to full list.
    pub fn breakdown() -> Self {
        Self {
            subject: "risk factors",
            key: RankKey::Signed,
            bound: Bound::All,
            positive_only: true,
            group_top_n: Some(BREAKDOWN_TOP_N),
            disclosure: DisclosurePolicy::top(BREAKDOWN_TOP_N),
        }
    }
}

/// Sanitized set -> filtered, ranked and capped view.
pub fn build<T: Attribution>(
    profile: &ExplainProfile,
    set: &ContributionSet<T>,
) -> ViewResult<RankedView<T>> {
    let ranked = if profile.positive_only {
        rank(&set.filtered(|item| item.value() > 0.0), profile.key)
    } else {
        rank(set, profile.key)
    };

    if ranked.is_empty() {
        log::info!("Nothing to rank for {} ({} input entries)", profile.subject, set.len());
        return Err(ViewError::EmptyResult(profile.subject));
    }

    Ok(ranked.truncated(profile.bound))
}

pub fn build_grouped<T: Foldable>(ranked: &RankedView<T>, profile: &ExplainProfile) -> GroupedView<T> {
    let top_n = profile.group_top_n.unwrap_or(ranked.len());
    group(ranked, top_n, OTHER_LABEL)
}

// ============================================================================
// DISCLOSED VIEW
// ============================================================================

/// A ranked view together with its disclosure state.
///
/// Owned by exactly one presentation model. Replacing the data rebuilds
/// the ranking and resets disclosure to its default.
#[derive(Debug, Clone, Serialize)]
pub struct DisclosedView<T> {
    #[serde(skip)]
    profile: ExplainProfile,
    ranked: RankedView<T>,
    disclosure: Disclosure,
}

impl<T: Attribution> DisclosedView<T> {
    pub fn new(profile: ExplainProfile, set: &ContributionSet<T>) -> ViewResult<Self> {
        let ranked = build(&profile, set)?;
        let disclosure = Disclosure::new(profile.disclosure, ranked.len());
        Ok(Self { profile, ranked, disclosure })
    }

    /// Swap in a new set. On error the previous state is kept untouched.
    pub fn replace(&mut self, set: &ContributionSet<T>) -> ViewResult<()> {
        let ranked = build(&self.profile, set)?;
        self.disclosure.reset(ranked.len());
        self.ranked = ranked;
        Ok(())
    }

    pub fn apply(&mut self, action: DisclosureAction) -> bool {
        self.disclosure.apply(action)
    }

    /// Select by name; unknown names are ignored.
    pub fn select(&mut self, name: &str) -> bool {
        if self.ranked.position(name).is_none() {
            log::debug!("Ignoring selection of unknown {} entry '{}'", self.profile.subject, name);
            return false;
        }
        self.disclosure.apply(DisclosureAction::Select(name.to_string()));
        true
    }

    pub fn deselect(&mut self) {
        self.disclosure.apply(DisclosureAction::Deselect);
    }

    pub fn visible(&self) -> &[T] {
        self.disclosure.visible(self.ranked.items())
    }

    pub fn selected(&self) -> Option<&T> {
        self.disclosure.selected().and_then(|name| self.ranked.get(name))
    }

    pub fn ranked(&self) -> &RankedView<T> {
        &self.ranked
    }

    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    pub fn profile(&self) -> &ExplainProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::explain::disclosure::Cursor;
    use crate::logic::explain::types::{BreakdownFactor, Contribution};

    fn contributions(pairs: &[(&str, f64)]) -> ContributionSet {
        ContributionSet::new(pairs.iter().map(|(n, v)| Contribution::new(*n, *v)).collect()).unwrap()
    }

    fn factors(pairs: &[(&str, f64)]) -> ContributionSet<BreakdownFactor> {
        ContributionSet::new(
            pairs
                .iter()
                .map(|(n, v)| BreakdownFactor {
                    name: n.to_string(),
                    contribution: v / 10.0,
                    relative_importance: *v,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_breakdown_excludes_non_positive() {
        let set = factors(&[
            ("a", 0.3), ("zero", 0.0), ("b", 0.2), ("neg", -0.4), ("c", 0.1), ("d", 0.05), ("e", 0.04),
        ]);
        let profile = ExplainProfile::breakdown();
        let ranked = build(&profile, &set).unwrap();
        assert_eq!(ranked.len(), 5);
        assert!(ranked.get("zero").is_none());
        assert!(ranked.get("neg").is_none());

        let grouped = build_grouped(&ranked, &profile);
        let positive_total: f64 = ranked.items().iter().map(|f| f.relative_importance).sum();
        assert!((grouped.total() - positive_total).abs() < 1e-12);
        assert_eq!(grouped.other.as_ref().map(|o| o.relative_importance), Some(0.04));
    }

    #[test]
    fn test_empty_result() {
        let err = build(&ExplainProfile::breakdown(), &factors(&[("a", 0.0), ("b", -1.0)])).unwrap_err();
        assert_eq!(err, ViewError::EmptyResult("risk factors"));

        let err = build(&ExplainProfile::shap(), &ContributionSet::<Contribution>::default()).unwrap_err();
        assert!(err.is_empty_result());
    }

    #[test]
    fn test_shap_cap() {
        let pairs: Vec<(String, f64)> = (0..30).map(|i| (format!("f{}", i), i as f64 - 15.0)).collect();
        let set = ContributionSet::new(pairs.iter().map(|(n, v)| Contribution::new(n.clone(), *v)).collect()).unwrap();
        let view = DisclosedView::new(ExplainProfile::shap(), &set).unwrap();
        assert_eq!(view.visible().len(), 15);
        assert_eq!(view.visible()[0].value, -15.0);
    }

    #[test]
    fn test_replace_resets_disclosure() {
        let mut view = DisclosedView::new(
            ExplainProfile::breakdown(),
            &factors(&[("a", 0.5), ("b", 0.4), ("c", 0.3), ("d", 0.2), ("e", 0.1), ("f", 0.05)]),
        )
        .unwrap();
        view.apply(DisclosureAction::ShowAll);
        assert!(view.select("b"));
        assert_eq!(view.visible().len(), 6);

        view.replace(&factors(&[("x", 0.9), ("b", 0.1), ("y", 0.2), ("z", 0.3), ("w", 0.4)]))
            .unwrap();
        assert_eq!(view.disclosure().cursor(), Cursor::Count(4));
        assert!(view.selected().is_none());
        assert_eq!(view.visible()[0].name, "x");
    }

    #[test]
    fn test_failed_replace_keeps_state() {
        let mut view = DisclosedView::new(ExplainProfile::importance(), &contributions(&[("a", 1.0)])).unwrap();
        view.select("a");
        assert!(view.replace(&ContributionSet::<Contribution>::default()).is_err());
        assert_eq!(view.selected().map(|c| c.name.as_str()), Some("a"));
    }

    #[test]
    fn test_select_unknown_is_ignored() {
        let mut view = DisclosedView::new(ExplainProfile::importance(), &contributions(&[("a", 1.0)])).unwrap();
        assert!(!view.select("missing"));
        assert!(view.selected().is_none());
    }
}
