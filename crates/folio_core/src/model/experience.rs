//! Work experience read model.
//!
//! # Invariants
//! - `end_date` is `None` for ongoing engagements.
//! - Lists are ordered ongoing-first, then by most recent end (or start)
//!   date.

use serde::{Deserialize, Serialize};

/// One work history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    /// Unix epoch milliseconds.
    pub start_date: i64,
    /// Unix epoch milliseconds. Should be >= `start_date` when set.
    pub end_date: Option<i64>,
    /// Ongoing, not-yet-ended engagement.
    pub current: bool,
}

impl Experience {
    /// Date used to rank entries within the same `current` partition.
    pub fn recency_key(&self) -> i64 {
        self.end_date.unwrap_or(self.start_date)
    }
}
