//! Confirmation notices
//!
//! Successful operations post a short message that the UI shell shows as a
//! banner for a fixed time. Expiry is checked lazily against a caller
//! supplied clock; nothing is scheduled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    /// Millis since epoch
    pub posted_at: i64,
    /// Millis since epoch; hidden from this instant on
    pub expires_at: i64,
}

impl Notice {
    /// Post a notice now
    pub fn post(message: impl Into<String>, display_ms: u64) -> Self {
        Self::posted_at(message, chrono::Utc::now().timestamp_millis(), display_ms)
    }

    pub fn posted_at(message: impl Into<String>, posted_at: i64, display_ms: u64) -> Self {
        let display_ms = i64::try_from(display_ms).unwrap_or(i64::MAX);
        Self {
            message: message.into(),
            posted_at,
            expires_at: posted_at.saturating_add(display_ms),
        }
    }

    pub fn is_visible_at(&self, now_ms: i64) -> bool {
        now_ms >= self.posted_at && now_ms < self.expires_at
    }
}
