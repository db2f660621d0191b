//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input, then orchestrate repository calls.
//! - Translate every store failure into one uniform `DataAccessError`.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod contact_service;
pub mod content_service;
pub mod error;
pub mod observer;
