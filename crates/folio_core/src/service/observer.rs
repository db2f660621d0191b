//! Injected observability hook for service failures.

use crate::model::validation::ValidationError;
use crate::repo::RepoError;
use crate::service::error::Operation;
use log::{error, warn};

/// Receives failure notifications from services before they return.
///
/// Notifications are diagnostics only; callers must not depend on them.
pub trait FailureObserver {
    /// Called once per store failure, with the raw repository error.
    fn store_failure(&self, operation: Operation, error: &RepoError);

    /// Called when caller input is rejected before any store interaction.
    fn validation_rejected(&self, _operation: Operation, _error: &ValidationError) {}
}

impl<T: FailureObserver + ?Sized> FailureObserver for &T {
    fn store_failure(&self, operation: Operation, error: &RepoError) {
        (**self).store_failure(operation, error);
    }

    fn validation_rejected(&self, operation: Operation, error: &ValidationError) {
        (**self).validation_rejected(operation, error);
    }
}

/// Default observer writing structured events through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailureObserver;

impl FailureObserver for LogFailureObserver {
    fn store_failure(&self, operation: Operation, error: &RepoError) {
        error!(
            "event=store_failure module=service status=error op={} error={}",
            operation.as_str(),
            error
        );
    }

    fn validation_rejected(&self, operation: Operation, error: &ValidationError) {
        // Field name only; rejected values may carry personal data.
        warn!(
            "event=validation_rejected module=service status=error op={} field={}",
            operation.as_str(),
            error.field
        );
    }
}
