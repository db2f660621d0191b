//! Project, tag and owner read models.
//!
//! # Invariants
//! - `tags` is a set; it is returned sorted by name so output is stable.
//! - `owner` exposes only display name and avatar of the owning user.

use serde::{Deserialize, Serialize};

/// Stable project identifier as stored in `projects.id`.
pub type ProjectId = String;

/// Label attached to projects (many-to-many).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// Reduced public view of the user owning a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: Option<String>,
    /// Avatar image reference.
    pub image: Option<String>,
}

/// Portfolio project with its tags and owner view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Image reference; empty when the project has no cover image.
    pub image: String,
    pub tags: Vec<Tag>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    /// Marks the project for promotional display.
    pub featured: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    #[serde(rename = "user")]
    pub owner: UserSummary,
}
