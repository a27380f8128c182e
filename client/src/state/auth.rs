//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the root `App`. Route guards
//! read it to redirect between `/login` and the dashboard; the sidebar reads
//! the user for its badge and role-gated links.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Current user, their session tokens, and whether restoration is pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub session: Option<Session>,
    /// True until the stored session has been checked on hydrate.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, session: None, loading: true }
    }
}

impl AuthState {
    /// Settled state after restoration or sign-in.
    pub fn resolved(session: Option<Session>) -> Self {
        Self {
            user: session.as_ref().map(|s| s.user.clone()),
            session,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::resolved(None)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
