use super::*;

fn user_with(email: Option<&str>, username: Option<&str>, role: Option<&str>) -> User {
    User {
        id: "u-1".to_owned(),
        email: email.map(str::to_owned),
        user_metadata: UserMetadata {
            username: username.map(str::to_owned),
            role: role.map(str::to_owned),
        },
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_admin_requires_exact_match() {
    assert_eq!(Role::from_metadata(Some("admin")), Role::Admin);
    assert_eq!(Role::from_metadata(Some("Admin")), Role::User);
    assert_eq!(Role::from_metadata(Some(" admin")), Role::User);
    assert_eq!(Role::from_metadata(Some("user")), Role::User);
    assert_eq!(Role::from_metadata(None), Role::User);
}

#[test]
fn user_is_admin_reads_metadata_role() {
    assert!(user_with(Some("a@b.com"), None, Some("admin")).is_admin());
    assert!(!user_with(Some("a@b.com"), None, Some("user")).is_admin());
    assert!(!user_with(Some("a@b.com"), None, None).is_admin());
}

// =============================================================
// Badge helpers
// =============================================================

#[test]
fn avatar_initial_prefers_username() {
    let user = user_with(Some("zed@b.com"), Some("alice"), None);
    assert_eq!(user.avatar_initial(), 'A');
}

#[test]
fn avatar_initial_falls_back_to_email() {
    let user = user_with(Some("zed@b.com"), None, None);
    assert_eq!(user.avatar_initial(), 'Z');
    let empty_name = user_with(Some("zed@b.com"), Some(""), None);
    assert_eq!(empty_name.avatar_initial(), 'Z');
}

#[test]
fn avatar_initial_defaults_to_l() {
    assert_eq!(user_with(None, None, None).avatar_initial(), 'L');
}

#[test]
fn display_name_defaults_to_user() {
    assert_eq!(user_with(Some("a@b.com"), None, None).display_name(), "User");
    assert_eq!(user_with(Some("a@b.com"), Some("bob"), None).display_name(), "bob");
}

// =============================================================
// Serde
// =============================================================

#[test]
fn user_decodes_without_metadata() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-9",
        "email": "a@b.com",
        "aud": "authenticated"
    }))
    .unwrap();
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
    assert_eq!(user.user_metadata, UserMetadata::default());
}

#[test]
fn session_decodes_password_grant_response() {
    let session: Session = serde_json::from_value(serde_json::json!({
        "access_token": "jwt",
        "refresh_token": "r1",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_700_000_000,
        "user": {
            "id": "u-1",
            "email": "a@b.com",
            "user_metadata": { "username": "alice", "role": "admin" }
        }
    }))
    .unwrap();
    assert_eq!(session.access_token, "jwt");
    assert_eq!(session.expires_at, Some(1_700_000_000));
    assert!(session.user.is_admin());
}

#[test]
fn signup_request_nests_metadata_under_data() {
    let body = SignUpRequest {
        email: "a@b.com",
        password: "pw",
        data: SignUpData { username: "alice", role: DEFAULT_SIGNUP_ROLE },
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "email": "a@b.com",
            "password": "pw",
            "data": { "username": "alice", "role": "user" }
        })
    );
}

#[test]
fn provider_error_prefers_error_description() {
    let body: ProviderErrorBody = serde_json::from_value(serde_json::json!({
        "error": "invalid_grant",
        "error_description": "Invalid login credentials"
    }))
    .unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Invalid login credentials"));
}

#[test]
fn provider_error_uses_msg_then_message() {
    let body: ProviderErrorBody =
        serde_json::from_value(serde_json::json!({ "code": 422, "msg": "User already registered" })).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("User already registered"));

    let body: ProviderErrorBody = serde_json::from_value(serde_json::json!({ "message": "rate limited" })).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("rate limited"));
}

#[test]
fn provider_error_empty_body_has_no_message() {
    assert_eq!(ProviderErrorBody::default().into_message(), None);
}

#[test]
fn oauth_provider_google_name() {
    assert_eq!(OAuthProvider::Google.as_str(), "google");
}
