//! Core domain logic for the folio portfolio site.
//! This crate owns content queries, contact submission and session gating.

pub mod config;
pub mod db;
pub mod guard;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, SiteConfig};
pub use guard::session::{Session, SessionStatus, SessionUpdate, SessionUser, UserRole};
pub use guard::session_guard::{
    Destination, GuardConfig, GuardSnapshot, GuardState, Navigator, SessionGuard,
};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::contact::{ContactForm, ContactId, ContactSubmission};
pub use model::experience::Experience;
pub use model::project::{Project, ProjectId, Tag, UserSummary};
pub use model::skill::Skill;
pub use model::validation::{Field, ValidationError};
pub use repo::contact_repo::{ContactRepository, SqliteContactRepository};
pub use repo::content_repo::{
    ContentRepository, ProjectListQuery, SkillListQuery, SqliteContentRepository,
};
pub use repo::{RepoError, RepoResult};
pub use service::contact_service::ContactService;
pub use service::content_service::ContentService;
pub use service::error::{DataAccessError, Operation, ServiceError, ServiceResult};
pub use service::observer::{FailureObserver, LogFailureObserver};
