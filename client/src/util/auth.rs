//! Shared auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard routes send signed-out visitors to `/login`; the login page sends
//! signed-in users back to `/`. Both wait for session restoration to finish.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_signed_in()
}

pub fn should_redirect_home(state: &AuthState) -> bool {
    !state.loading && state.is_signed_in()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
