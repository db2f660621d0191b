//! Content query use-case service.
//!
//! # Responsibility
//! - Validate list parameters and translate them into repository queries.
//! - Convert repository failures into operation-tagged `DataAccessError`s.
//!
//! # Invariants
//! - Read-only; never mutates the store.
//! - A negative `limit` is rejected before the store is touched.
//! - "Not found" is `Ok(None)`, never an error.

use crate::model::experience::Experience;
use crate::model::project::Project;
use crate::model::skill::Skill;
use crate::model::validation::{Field, ValidationError};
use crate::repo::content_repo::{ContentRepository, ProjectListQuery, SkillListQuery};
use crate::repo::RepoResult;
use crate::service::error::{DataAccessError, Operation, ServiceError, ServiceResult};
use crate::service::observer::{FailureObserver, LogFailureObserver};

/// Read-only facade over a content repository.
pub struct ContentService<R: ContentRepository, O: FailureObserver = LogFailureObserver> {
    repo: R,
    observer: O,
}

impl<R: ContentRepository> ContentService<R> {
    /// Creates a service that logs failures through the `log` facade.
    pub fn new(repo: R) -> Self {
        Self::with_observer(repo, LogFailureObserver)
    }
}

impl<R: ContentRepository, O: FailureObserver> ContentService<R, O> {
    /// Creates a service reporting failures to the given observer.
    pub fn with_observer(repo: R, observer: O) -> Self {
        Self { repo, observer }
    }

    /// Lists projects newest first.
    ///
    /// # Contract
    /// - `featured = Some(flag)` keeps only projects with exactly that flag.
    /// - `limit = Some(n)` truncates to at most `n`; `0` yields an empty list.
    /// - A negative `limit` fails with `ValidationError` on `limit`.
    pub fn list_projects(
        &self,
        featured: Option<bool>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<Project>> {
        let limit = match normalize_project_limit(limit) {
            Ok(limit) => limit,
            Err(err) => {
                self.observer.validation_rejected(Operation::ListProjects, &err);
                return Err(err.into());
            }
        };
        let query = ProjectListQuery { featured, limit };
        self.call_store(Operation::ListProjects, || self.repo.list_projects(&query))
    }

    /// Gets one project by id, or `None` when no project matches.
    pub fn get_project(&self, id: &str) -> ServiceResult<Option<Project>> {
        self.call_store(Operation::GetProject, || self.repo.get_project(id))
    }

    /// Lists skills highest level first, optionally restricted to one
    /// category. An empty category means no filter.
    pub fn list_skills(&self, category: Option<&str>) -> ServiceResult<Vec<Skill>> {
        let query = SkillListQuery {
            category: category
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        };
        self.call_store(Operation::ListSkills, || self.repo.list_skills(&query))
    }

    /// Lists experiences ongoing-first, then most recent first.
    pub fn list_experiences(&self) -> ServiceResult<Vec<Experience>> {
        self.call_store(Operation::ListExperiences, || self.repo.list_experiences())
    }

    fn call_store<T>(
        &self,
        operation: Operation,
        call: impl FnOnce() -> RepoResult<T>,
    ) -> ServiceResult<T> {
        call().map_err(|err| {
            self.observer.store_failure(operation, &err);
            ServiceError::DataAccess(DataAccessError::new(operation, err))
        })
    }
}

/// Converts a caller-supplied project limit into a repository limit.
///
/// Values above `u32::MAX` saturate.
pub fn normalize_project_limit(limit: Option<i64>) -> Result<Option<u32>, ValidationError> {
    match limit {
        None => Ok(None),
        Some(value) if value < 0 => Err(ValidationError::new(
            Field::Limit,
            format!("must not be negative, got {value}"),
        )),
        Some(value) => Ok(Some(u32::try_from(value).unwrap_or(u32::MAX))),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_project_limit;
    use crate::model::validation::Field;

    #[test]
    fn limit_normalization_accepts_zero_and_saturates() {
        assert_eq!(normalize_project_limit(None).unwrap(), None);
        assert_eq!(normalize_project_limit(Some(0)).unwrap(), Some(0));
        assert_eq!(normalize_project_limit(Some(3)).unwrap(), Some(3));
        assert_eq!(
            normalize_project_limit(Some(i64::MAX)).unwrap(),
            Some(u32::MAX)
        );
    }

    #[test]
    fn limit_normalization_rejects_negative_values() {
        let err = normalize_project_limit(Some(-1)).unwrap_err();
        assert_eq!(err.field, Field::Limit);
    }
}
