//! Skill read model.

use serde::{Deserialize, Serialize};

/// One skill entry, grouped by `category` and ranked by `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Free-form classifier, matched exactly when filtering.
    pub category: String,
    /// Proficiency ordinal; higher sorts first.
    pub level: u32,
}
