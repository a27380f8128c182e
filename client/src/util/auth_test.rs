use super::*;
use crate::net::types::{User, UserMetadata};

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: Some("a@b.com".to_owned()),
        user_metadata: UserMetadata { username: Some("alice".to_owned()), role: Some("user".to_owned()) },
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, session: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_home(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_home(&state));
}

#[test]
fn should_redirect_home_when_user_exists() {
    let state = AuthState { user: Some(user()), session: None, loading: false };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_home(&state));
}
