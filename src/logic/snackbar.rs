//! Snackbar - single dismissible notification

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::constants::SNACKBAR_AUTO_HIDE_MS;

/// Why the snackbar is being closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Click outside the snackbar; ignored
    ClickAway,
    Timeout,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snackbar {
    open: bool,
    message: String,
    shown_at: Option<DateTime<Utc>>,
}

impl Default for Snackbar {
    fn default() -> Self {
        Self {
            open: false,
            message: String::new(),
            shown_at: None,
        }
    }
}

impl Snackbar {
    /// Replace whatever is showing with `message`.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.open = true;
        self.shown_at = Some(Utc::now());
        log::debug!("Snackbar: {}", self.message);
    }

    pub fn close(&mut self, reason: CloseReason) {
        if reason == CloseReason::ClickAway {
            return;
        }
        self.open = false;
    }

    /// Close if the auto-hide delay has elapsed at `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if let Some(shown) = self.shown_at {
            if self.open && now - shown >= Duration::milliseconds(SNACKBAR_AUTO_HIDE_MS as i64) {
                self.close(CloseReason::Timeout);
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> Option<&str> {
        self.open.then_some(self.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clickaway_ignored() {
        let mut bar = Snackbar::default();
        bar.show("Prediction completed successfully");
        bar.close(CloseReason::ClickAway);
        assert_eq!(bar.message(), Some("Prediction completed successfully"));

        bar.close(CloseReason::Dismissed);
        assert!(!bar.is_open());
        assert_eq!(bar.message(), None);
    }

    #[test]
    fn test_auto_hide() {
        let mut bar = Snackbar::default();
        bar.show("Sample data loaded successfully");
        let shown = Utc::now();

        bar.tick(shown - Duration::seconds(1));
        assert!(bar.is_open());

        bar.tick(shown + Duration::milliseconds(SNACKBAR_AUTO_HIDE_MS as i64 + 10));
        assert!(!bar.is_open());
    }
}
