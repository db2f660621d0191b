//! Contact submission repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Creation is a single-row insert; there is no update or delete path.

use crate::model::contact::ContactSubmission;
use crate::repo::{ensure_tables, RepoResult};
use rusqlite::{params, Connection};

/// Write-only repository interface for contact submissions.
pub trait ContactRepository {
    /// Persists one submission exactly as given.
    fn create_contact(&self, submission: &ContactSubmission) -> RepoResult<()>;
}

impl<T: ContactRepository + ?Sized> ContactRepository for &T {
    fn create_contact(&self, submission: &ContactSubmission) -> RepoResult<()> {
        (**self).create_contact(submission)
    }
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["contacts"])?;
        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create_contact(&self, submission: &ContactSubmission) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO contacts (
                id,
                name,
                email,
                message,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                submission.id.to_string(),
                submission.name.as_str(),
                submission.email.as_str(),
                submission.message.as_str(),
                submission.created_at,
            ],
        )?;

        Ok(())
    }
}
