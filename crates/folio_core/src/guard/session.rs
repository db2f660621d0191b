//! Session provider data shapes.

use serde::{Deserialize, Serialize};

/// Provider-reported resolution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Provider has not determined the session yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Role carried by an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

/// User attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Absent unless the provider's session callback adds it.
    #[serde(default)]
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub role: Option<UserRole>,
}

/// Session payload as exposed by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<SessionUser>,
    /// ISO-8601 expiry timestamp, passed through as sent.
    pub expires: Option<String>,
}

impl Session {
    /// A session counts as authenticated when it carries a user.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role == Some(UserRole::Admin))
    }
}

/// One status change pushed by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub status: SessionStatus,
    pub session: Option<Session>,
}

impl SessionUpdate {
    pub fn loading() -> Self {
        Self {
            status: SessionStatus::Loading,
            session: None,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            session: None,
        }
    }

    pub fn authenticated(session: Session) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            session: Some(session),
        }
    }
}
