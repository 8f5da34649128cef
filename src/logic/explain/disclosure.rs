//! Disclosure State Machine
//!
//! Two independent axes: how many ranked items are visible (the cursor)
//! and which single item, if any, is selected for a detail view.
//! Transitions are reducer-style; the machine is reset whenever its
//! backing collection is replaced.

use serde::{Deserialize, Serialize};

// ============================================================================
// CURSOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Cursor {
    Count(usize),
    All,
}

impl Cursor {
    pub fn resolve(&self, total: usize) -> usize {
        match self {
            Cursor::Count(k) => (*k).min(total),
            Cursor::All => total,
        }
    }
}

/// Default cursor and "show more" increment of one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosurePolicy {
    pub default_cursor: Cursor,
    /// 0 disables "show more"
    pub step: usize,
}

impl DisclosurePolicy {
    pub fn show_all() -> Self {
        Self { default_cursor: Cursor::All, step: 0 }
    }

    pub fn top(k: usize) -> Self {
        Self { default_cursor: Cursor::Count(k), step: 0 }
    }

    pub fn paged(first: usize, step: usize) -> Self {
        Self { default_cursor: Cursor::Count(first), step }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum DisclosureAction {
    ShowMore,
    ShowAll,
    ShowTop,
    /// ShowAll when collapsed, ShowTop otherwise
    ToggleAll,
    Select(String),
    Deselect,
}

// ============================================================================
// STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disclosure {
    policy: DisclosurePolicy,
    cursor: Cursor,
    total: usize,
    selected: Option<String>,
}

impl Disclosure {
    pub fn new(policy: DisclosurePolicy, total: usize) -> Self {
        Self {
            policy,
            cursor: policy.default_cursor,
            total,
            selected: None,
        }
    }

    /// Back to the initial state for a freshly arrived collection.
    pub fn reset(&mut self, total: usize) {
        self.cursor = self.policy.default_cursor;
        self.total = total;
        self.selected = None;
    }

    /// Apply one transition. Returns whether the state changed.
    pub fn apply(&mut self, action: DisclosureAction) -> bool {
        let before = (self.cursor, self.selected.clone());

        match action {
            DisclosureAction::ShowMore => {
                if self.can_show_more() {
                    let next = (self.visible_count() + self.policy.step).min(self.total);
                    self.cursor = Cursor::Count(next);
                }
            }
            DisclosureAction::ShowAll => self.cursor = Cursor::All,
            DisclosureAction::ShowTop => self.cursor = self.policy.default_cursor,
            DisclosureAction::ToggleAll => {
                self.cursor = if self.is_expanded() {
                    self.policy.default_cursor
                } else {
                    Cursor::All
                };
            }
            DisclosureAction::Select(name) => self.selected = Some(name),
            DisclosureAction::Deselect => self.selected = None,
        }

        before != (self.cursor, self.selected.clone())
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn visible_count(&self) -> usize {
        self.cursor.resolve(self.total)
    }

    pub fn can_show_more(&self) -> bool {
        self.policy.step > 0
            && matches!(self.cursor, Cursor::Count(_))
            && self.visible_count() < self.total
    }

    /// True once the user has widened past the default view.
    pub fn is_expanded(&self) -> bool {
        self.cursor != self.policy.default_cursor
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count().min(items.len())]
    }
}
