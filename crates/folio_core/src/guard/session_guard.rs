//! Session guard state machine.
//!
//! # Responsibility
//! - Track provider updates and decide whether a view may render.
//! - Emit at most one navigation request when requirements are unmet.
//!
//! # Invariants
//! - No navigation happens while the session is unresolved.
//! - Once redirected, the guard is halted: it keeps reporting loading and
//!   ignores later updates.
//! - `required` is checked before `admin_only`.

use crate::guard::session::{Session, SessionStatus, SessionUpdate};
use log::info;

/// Abstract navigation target requested by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Login,
    Home,
}

impl Destination {
    /// Route path for this destination.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

/// Receives navigation requests issued by the guard.
pub trait Navigator {
    fn navigate(&mut self, destination: Destination);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, destination: Destination) {
        (**self).navigate(destination);
    }
}

/// Access requirements for one guarded view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardConfig {
    /// Unauthenticated sessions are sent to the login destination.
    pub required: bool,
    /// Sessions without the admin role are sent to the home destination.
    pub admin_only: bool,
}

/// Guard lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Initial state; session status unknown.
    Unresolved,
    Unauthenticated,
    Authenticated,
    Admin,
    /// Terminal; navigation away was requested.
    Redirected(Destination),
}

/// Caller-facing view of the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardSnapshot {
    pub session: Option<Session>,
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

/// Gates a view on session updates pushed by an external provider.
pub struct SessionGuard<N: Navigator> {
    config: GuardConfig,
    navigator: N,
    state: GuardState,
    session: Option<Session>,
}

impl<N: Navigator> SessionGuard<N> {
    pub fn new(config: GuardConfig, navigator: N) -> Self {
        Self {
            config,
            navigator,
            state: GuardState::Unresolved,
            session: None,
        }
    }

    pub fn config(&self) -> GuardConfig {
        self.config
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Loading stays asserted while unresolved and after a redirect.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, GuardState::Unresolved | GuardState::Redirected(_))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    pub fn snapshot(&self) -> GuardSnapshot {
        GuardSnapshot {
            session: self.session.clone(),
            is_loading: self.is_loading(),
            is_authenticated: self.is_authenticated(),
            is_admin: self.is_admin(),
        }
    }

    /// Applies one provider update and returns the resulting state.
    pub fn on_update(&mut self, update: SessionUpdate) -> GuardState {
        if let GuardState::Redirected(_) = self.state {
            return self.state;
        }

        self.session = update.session;
        if update.status == SessionStatus::Loading {
            self.state = GuardState::Unresolved;
            return self.state;
        }

        let authenticated = self.is_authenticated();
        let admin = self.is_admin();
        if self.config.required && !authenticated {
            return self.redirect(Destination::Login);
        }
        if self.config.admin_only && !admin {
            return self.redirect(Destination::Home);
        }

        self.state = if admin {
            GuardState::Admin
        } else if authenticated {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        };
        self.state
    }

    /// Applies updates in order until the source is exhausted or the guard
    /// halts on a redirect.
    ///
    /// Accepts any ordered source, including `&std::sync::mpsc::Receiver`.
    pub fn follow<I>(&mut self, updates: I) -> GuardState
    where
        I: IntoIterator<Item = SessionUpdate>,
    {
        for update in updates {
            if let GuardState::Redirected(_) = self.on_update(update) {
                break;
            }
        }
        self.state
    }

    fn redirect(&mut self, destination: Destination) -> GuardState {
        info!(
            "event=session_redirect module=guard status=ok destination={}",
            destination.path()
        );
        self.state = GuardState::Redirected(destination);
        self.navigator.navigate(destination);
        self.state
    }
}
