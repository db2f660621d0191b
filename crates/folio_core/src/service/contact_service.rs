//! Contact submission use-case service.
//!
//! # Responsibility
//! - Validate contact input and persist exactly one submission.
//!
//! # Invariants
//! - Invalid input never reaches the repository.
//! - `created_at` is read from the wall clock after validation, so it is
//!   never earlier than the call start.

use crate::model::contact::{ContactForm, ContactSubmission};
use crate::repo::contact_repo::ContactRepository;
use crate::service::error::{DataAccessError, Operation, ServiceError, ServiceResult};
use crate::service::observer::{FailureObserver, LogFailureObserver};
use log::info;
use std::time::{SystemTime, UNIX_EPOCH};

/// Contact form facade over a contact repository.
pub struct ContactService<R: ContactRepository, O: FailureObserver = LogFailureObserver> {
    repo: R,
    observer: O,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service that logs failures through the `log` facade.
    pub fn new(repo: R) -> Self {
        Self::with_observer(repo, LogFailureObserver)
    }
}

impl<R: ContactRepository, O: FailureObserver> ContactService<R, O> {
    /// Creates a service reporting failures to the given observer.
    pub fn with_observer(repo: R, observer: O) -> Self {
        Self { repo, observer }
    }

    /// Validates and records one contact message.
    ///
    /// # Errors
    /// - `ServiceError::Validation` naming the first invalid field.
    /// - `ServiceError::DataAccess` when the insert fails.
    pub fn submit_contact(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> ServiceResult<ContactSubmission> {
        self.submit_form(&ContactForm::new(name, email, message))
    }

    /// Same as `submit_contact`, for callers already holding a form.
    pub fn submit_form(&self, form: &ContactForm) -> ServiceResult<ContactSubmission> {
        let valid = form.validate().map_err(|err| {
            self.observer.validation_rejected(Operation::SubmitContact, &err);
            ServiceError::Validation(err)
        })?;

        let submission = ContactSubmission::from_form(valid, now_epoch_ms());
        if let Err(err) = self.repo.create_contact(&submission) {
            self.observer.store_failure(Operation::SubmitContact, &err);
            return Err(DataAccessError::new(Operation::SubmitContact, err).into());
        }

        info!(
            "event=contact_submitted module=service status=ok contact_id={}",
            submission.id
        );
        Ok(submission)
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
