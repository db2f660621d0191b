//! Contact form input and persisted submission.
//!
//! # Responsibility
//! - Normalize and validate contact form input before persistence.
//!
//! # Invariants
//! - A `ContactSubmission` is immutable once created.
//! - Persisted values are the trimmed, validated form values.

use crate::model::validation::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const NAME_MAX_CHARS: usize = 120;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const MESSAGE_MAX_CHARS: usize = 5000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid email regex"));

/// Stable identifier assigned to a submission on creation.
pub type ContactId = Uuid;

/// Raw contact form input as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Returns the trimmed form when every field is acceptable.
    ///
    /// Fields are checked in `name`, `email`, `message` order and the first
    /// failure is reported.
    pub fn validate(&self) -> Result<ContactForm, ValidationError> {
        let name = require_text(Field::Name, &self.name, NAME_MAX_CHARS)?;
        let email = self.email.trim();
        if email.chars().count() > EMAIL_MAX_CHARS {
            return Err(ValidationError::new(
                Field::Email,
                format!("must be at most {EMAIL_MAX_CHARS} characters"),
            ));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::new(
                Field::Email,
                "must be a valid email address",
            ));
        }
        let message = require_text(Field::Message, &self.message, MESSAGE_MAX_CHARS)?;

        Ok(ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Persisted contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl ContactSubmission {
    /// Builds a new submission with a generated id from validated input.
    pub fn from_form(form: ContactForm, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: form.name,
            email: form.email,
            message: form.message,
            created_at,
        }
    }
}

fn require_text(field: Field, value: &str, max_chars: usize) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be blank"));
    }
    if trimmed.chars().count() > max_chars {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max_chars} characters"),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, MESSAGE_MAX_CHARS};
    use crate::model::validation::Field;

    #[test]
    fn validate_trims_all_fields() {
        let form = ContactForm::new("  Alex ", " alex@example.com ", "\nHello\t");
        let valid = form.validate().expect("form should be valid");
        assert_eq!(valid.name, "Alex");
        assert_eq!(valid.email, "alex@example.com");
        assert_eq!(valid.message, "Hello");
    }

    #[test]
    fn validate_reports_first_failing_field() {
        let err = ContactForm::new(" ", "not-an-email", "")
            .validate()
            .expect_err("blank name must fail");
        assert_eq!(err.field, Field::Name);
    }

    #[test]
    fn validate_rejects_malformed_emails() {
        for email in [
            "",
            "alex",
            "alex@",
            "@example.com",
            "alex@example",
            "a b@c.d",
            "a@.b.c",
            "a@b..c",
            "a@b.c.",
        ] {
            let err = ContactForm::new("Alex", email, "hi")
                .validate()
                .expect_err("malformed email must fail");
            assert_eq!(err.field, Field::Email, "email `{email}`");
        }
    }

    #[test]
    fn validate_accepts_multi_label_domains() {
        for email in ["alex@mail.example.co.uk", "first.last+tag@example.io"] {
            let valid = ContactForm::new("Alex", email, "hi")
                .validate()
                .expect("well-formed email must pass");
            assert_eq!(valid.email, email);
        }
    }

    #[test]
    fn validate_rejects_oversized_message() {
        let message = "x".repeat(MESSAGE_MAX_CHARS + 1);
        let err = ContactForm::new("Alex", "alex@example.com", message)
            .validate()
            .expect_err("oversized message must fail");
        assert_eq!(err.field, Field::Message);
        assert!(err.reason.contains("at most"));
    }
}
