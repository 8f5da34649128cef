//! FAQ search - case-insensitive substring filter plus paged disclosure

use serde::Serialize;
use std::sync::Arc;

use super::corpus::FaqEntry;
use crate::constants::FAQ_PAGE_STEP;
use crate::logic::explain::{Disclosure, DisclosureAction, DisclosurePolicy};

// ============================================================================
// INDEX
// ============================================================================

#[derive(Debug, Clone)]
struct IndexedEntry {
    entry: FaqEntry,
    question: String,
    answer: String,
}

/// Corpus with lower-cased copies of both text fields.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
}

impl SearchIndex {
    pub fn new(corpus: &[FaqEntry]) -> Self {
        Self {
            entries: corpus
                .iter()
                .map(|entry| IndexedEntry {
                    entry: *entry,
                    question: entry.question.to_lowercase(),
                    answer: entry.answer.to_lowercase(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose question or answer contains `query`, corpus order kept.
    pub fn filter(&self, query: &str) -> Vec<FaqEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.question.contains(&needle) || e.answer.contains(&needle))
            .map(|e| e.entry)
            .collect()
    }
}

// ============================================================================
// SEARCH STATE
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SearchState {
    #[serde(skip)]
    index: Arc<SearchIndex>,
    query: String,
    matches: Vec<FaqEntry>,
    disclosure: Disclosure,
}

impl SearchState {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        let matches = index.filter("");
        let disclosure = Disclosure::new(DisclosurePolicy::paged(FAQ_PAGE_STEP, FAQ_PAGE_STEP), matches.len());
        Self {
            index,
            query: String::new(),
            matches,
            disclosure,
        }
    }

    /// Re-filter on every keystroke. Cleared query shows the first page,
    /// anything else shows every match.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.to_lowercase();
        self.matches = self.index.filter(&self.query);
        self.disclosure.reset(self.matches.len());
        if !self.query.is_empty() {
            self.disclosure.apply(DisclosureAction::ShowAll);
        }
        log::debug!("FAQ query '{}' -> {} matches", self.query, self.matches.len());
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[FaqEntry] {
        &self.matches
    }

    pub fn visible(&self) -> &[FaqEntry] {
        self.disclosure.visible(&self.matches)
    }

    pub fn show_more(&mut self) -> bool {
        self.disclosure.apply(DisclosureAction::ShowMore)
    }

    pub fn can_show_more(&self) -> bool {
        self.disclosure.can_show_more()
    }

    /// Accordion: one panel open at a time; clicking the open one closes it.
    pub fn toggle_panel(&mut self, question: &str) {
        if self.disclosure.selected() == Some(question) {
            self.disclosure.apply(DisclosureAction::Deselect);
        } else if self.matches.iter().any(|e| e.question == question) {
            self.disclosure.apply(DisclosureAction::Select(question.to_string()));
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.disclosure.selected()
    }

    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }
}
