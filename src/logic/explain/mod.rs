//! Explain Module - Explanation Ranking & Disclosure
//!
//! Raw (name, value) pairs from the backend flow through:
//! sanitize -> rank -> {select | group + select} -> disclosure.
//!
//! Every view uses the same pipeline, parameterized by an `ExplainProfile`.

pub mod types;
pub mod sanitize;
pub mod rank;
pub mod select;
pub mod group;
pub mod disclosure;
pub mod engine;

pub use types::{Attribution, BreakdownFactor, Contribution, ContributionSet, Foldable};
pub use rank::{rank, RankKey, RankedView};
pub use select::{select, Bound};
pub use group::{group, GroupedView};
pub use disclosure::{Cursor, Disclosure, DisclosureAction, DisclosurePolicy};
pub use engine::{build, build_grouped, DisclosedView, ExplainProfile};
