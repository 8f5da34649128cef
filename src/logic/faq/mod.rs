//! FAQ Module - static corpus and search

pub mod corpus;
pub mod search;

pub use corpus::{FaqEntry, FAQ_ENTRIES};
pub use search::{SearchIndex, SearchState};

use once_cell::sync::Lazy;
use std::sync::Arc;

/// Index over the compiled-in corpus, built on first use
static DEFAULT_INDEX: Lazy<Arc<SearchIndex>> = Lazy::new(|| Arc::new(SearchIndex::new(&FAQ_ENTRIES)));

/// Fresh search state over the built-in FAQ.
pub fn new_search() -> SearchState {
    SearchState::new(DEFAULT_INDEX.clone())
}
