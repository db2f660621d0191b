//! Service-level error taxonomy.
//!
//! # Invariants
//! - Callers branch only on `Validation` vs `DataAccess`.
//! - Store-specific errors are reachable only through `Error::source`.

use crate::model::validation::ValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case operation, used to tag failures and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListProjects,
    GetProject,
    ListSkills,
    ListExperiences,
    SubmitContact,
}

impl Operation {
    /// Stable id used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListProjects => "list_projects",
            Self::GetProject => "get_project",
            Self::ListSkills => "list_skills",
            Self::ListExperiences => "list_experiences",
            Self::SubmitContact => "submit_contact",
        }
    }

    /// Caller-facing message for a store failure in this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::ListProjects => "failed to fetch projects",
            Self::GetProject => "failed to fetch project",
            Self::ListSkills => "failed to fetch skills",
            Self::ListExperiences => "failed to fetch experiences",
            Self::SubmitContact => "failed to submit contact form",
        }
    }
}

/// Store failure re-signaled at an operation boundary.
#[derive(Debug)]
pub struct DataAccessError {
    operation: Operation,
    cause: RepoError,
}

impl DataAccessError {
    pub fn new(operation: Operation, cause: RepoError) -> Self {
        Self { operation, cause }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }
}

impl Display for DataAccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.operation.failure_message())
    }
}

impl Error for DataAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// Error returned by every service operation.
#[derive(Debug)]
pub enum ServiceError {
    /// Caller input violates a stated constraint.
    Validation(ValidationError),
    /// Underlying store failed.
    DataAccess(DataAccessError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DataAccess(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DataAccess(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DataAccessError> for ServiceError {
    fn from(value: DataAccessError) -> Self {
        Self::DataAccess(value)
    }
}
