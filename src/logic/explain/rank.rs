//! Ranker - descending order by a chosen key
//!
//! Ties keep their input order (stable sort). The input set is never
//! touched; ranking always allocates a new ordering.

use serde::{Deserialize, Serialize};

use super::select::{select, Bound};
use super::types::{Attribution, ContributionSet};

/// Sort key for ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankKey {
    /// `abs(value)` - SHAP and importance views
    Magnitude,
    /// `value` as-is - breakdown view
    Signed,
}

impl RankKey {
    pub fn of<T: Attribution>(&self, item: &T) -> f64 {
        match self {
            RankKey::Magnitude => item.value().abs(),
            RankKey::Signed => item.value(),
        }
    }
}

/// A contribution set in rank order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedView<T> {
    items: Vec<T>,
    key: RankKey,
}

impl<T: Attribution> RankedView<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Hard cap applied once at build time (e.g. SHAP top 15).
    pub fn truncated(self, bound: Bound) -> Self {
        let items = select(&self, bound).to_vec();
        Self { items, key: self.key }
    }
}

/// Rank a set by `key`, strictly descending, stable on ties.
pub fn rank<T: Attribution>(set: &ContributionSet<T>, key: RankKey) -> RankedView<T> {
    let mut items = set.as_slice().to_vec();
    items.sort_by(|a, b| {
        key.of(b)
            .partial_cmp(&key.of(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    RankedView { items, key }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::explain::types::Contribution;

    fn set(pairs: &[(&str, f64)]) -> ContributionSet {
        ContributionSet::new(pairs.iter().map(|(n, v)| Contribution::new(*n, *v)).collect()).unwrap()
    }

    fn names<T: Attribution>(view: &RankedView<T>) -> Vec<String> {
        view.items().iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_magnitude_ordering() {
        let ranked = rank(&set(&[("a", 0.1), ("b", -0.9), ("c", 0.5)]), RankKey::Magnitude);
        assert_eq!(names(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_signed_ordering() {
        let ranked = rank(&set(&[("a", 0.1), ("b", -0.9), ("c", 0.5)]), RankKey::Signed);
        assert_eq!(names(&ranked), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(
            &set(&[("first", 0.5), ("second", -0.5), ("big", 2.0), ("third", 0.5)]),
            RankKey::Magnitude,
        );
        assert_eq!(names(&ranked), vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn test_input_untouched() {
        let input = set(&[("a", 0.1), ("b", 0.9)]);
        let _ = rank(&input, RankKey::Signed);
        assert_eq!(input.as_slice()[0].name, "a");
    }

    #[test]
    fn test_non_increasing_keys() {
        let input = set(&[
            ("a", 0.3), ("b", -1.2), ("c", 0.0), ("d", 4.5), ("e", -0.3), ("f", 2.2),
        ]);
        for key in [RankKey::Magnitude, RankKey::Signed] {
            let ranked = rank(&input, key);
            for pair in ranked.items().windows(2) {
                assert!(key.of(&pair[0]) >= key.of(&pair[1]));
            }
        }
    }
}
