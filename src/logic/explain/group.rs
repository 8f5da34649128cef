//! Grouper - top-N plus one folded "Other" bucket
//!
//! A plain projection of a `RankedView`: the ranked data is partitioned and
//! the tail reduced, nothing is mutated.

use serde::Serialize;

use super::rank::RankedView;
use super::types::{Attribution, Foldable};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedView<T> {
    pub top: Vec<T>,
    /// Absent when the tail is empty
    pub other: Option<T>,
}

impl<T: Attribution> GroupedView<T> {
    /// Chart series: the top entries followed by "Other" if present.
    pub fn series(&self) -> impl Iterator<Item = &T> {
        self.top.iter().chain(self.other.iter())
    }

    pub fn total(&self) -> f64 {
        self.series().map(Attribution::value).sum()
    }

    pub fn len(&self) -> usize {
        self.top.len() + usize::from(self.other.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn group<T: Foldable>(ranked: &RankedView<T>, top_n: usize, label: &str) -> GroupedView<T> {
    let items = ranked.items();
    let split = top_n.min(items.len());
    let (top, tail) = items.split_at(split);

    GroupedView {
        top: top.to_vec(),
        other: if tail.is_empty() { None } else { Some(T::fold(label, tail)) },
    }
}
