//! Wire DTOs for the hosted auth API.
//!
//! DESIGN
//! ======
//! Field names follow the provider's JSON so serde can decode responses
//! directly. Optional fields default instead of failing, since user metadata is
//! free-form and older accounts may lack `username` or `role`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role stored in `user_metadata.role` for newly registered accounts.
pub const DEFAULT_SIGNUP_ROLE: &str = "user";

/// Access level derived from `user_metadata.role`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Only the exact string `"admin"` grants admin access.
    pub fn from_metadata(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Self::Admin,
            _ => Self::User,
        }
    }
}

/// Free-form metadata attached to a user at signup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// An authenticated user as returned by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider user identifier (UUID string).
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from_metadata(self.user_metadata.role.as_deref())
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    /// Username when set and non-empty.
    pub fn username(&self) -> Option<&str> {
        self.user_metadata.username.as_deref().filter(|name| !name.is_empty())
    }

    /// Name shown in the sidebar badge.
    pub fn display_name(&self) -> &str {
        self.username().unwrap_or("User")
    }

    /// Uppercased first letter of the username, else of the email, else `'L'`.
    pub fn avatar_initial(&self) -> char {
        self.username()
            .or_else(|| self.email.as_deref())
            .and_then(|s| s.chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('L')
    }
}

/// Token pair plus user returned by a successful password grant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Body for `POST /auth/v1/token?grant_type=password`.
#[derive(Debug, Serialize)]
pub struct PasswordCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Metadata stored on the account at signup.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SignUpData<'a> {
    pub username: &'a str,
    pub role: &'a str,
}

/// Body for `POST /auth/v1/signup`.
#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpData<'a>,
}

/// Body for `POST /auth/v1/recover`.
#[derive(Debug, Serialize)]
pub struct RecoverRequest<'a> {
    pub email: &'a str,
}

/// Third-party identity providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

/// Error payload shapes used by the provider. Different endpoints populate
/// different fields.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProviderErrorBody {
    /// Most descriptive message available, preferring `error_description`.
    pub fn into_message(self) -> Option<String> {
        [self.error_description, self.msg, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}
