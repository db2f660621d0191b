//! Client-side session gating.
//!
//! # Responsibility
//! - Model session state as reported by an external session provider.
//! - Gate view availability and request navigation when unmet.
//!
//! # Invariants
//! - The guard never authenticates; it only observes updates.
//! - Updates are applied strictly in arrival order by a single owner.

pub mod session;
pub mod session_guard;
