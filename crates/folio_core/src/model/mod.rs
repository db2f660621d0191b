//! Domain model for portfolio content and contact submissions.
//!
//! # Responsibility
//! - Define canonical data structures returned to presentation callers.
//! - Own input validation rules for caller-supplied data.
//!
//! # Invariants
//! - Every entity is identified by an id that is unique within its set.
//! - Only the reduced `UserSummary` view of a user ever leaves the core.

pub mod contact;
pub mod experience;
pub mod project;
pub mod skill;
pub mod validation;
