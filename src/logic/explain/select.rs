//! Bounded Selector - top-K or everything

use serde::{Deserialize, Serialize};

use super::rank::RankedView;
use super::types::Attribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Top(usize),
    All,
}

impl Bound {
    /// Number of elements this bound keeps out of `len`.
    pub fn limit(&self, len: usize) -> usize {
        match self {
            Bound::Top(k) => (*k).min(len),
            Bound::All => len,
        }
    }
}

/// First `min(k, len)` elements in rank order.
pub fn select<T: Attribution>(ranked: &RankedView<T>, bound: Bound) -> &[T] {
    let items = ranked.items();
    &items[..bound.limit(items.len())]
}
