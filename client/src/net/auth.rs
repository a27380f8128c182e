//! Client for the hosted auth API (GoTrue REST endpoints).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`AuthError::Unavailable`] since sign-in
//! only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation resolves to `Result<_, AuthError>`. Provider rejections keep
//! the provider's own message so the login page can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::types::{OAuthProvider, ProviderErrorBody, Session, User};
#[cfg(feature = "hydrate")]
use super::types::{DEFAULT_SIGNUP_ROLE, PasswordCredentials, RecoverRequest, SignUpData, SignUpRequest};
#[cfg(feature = "hydrate")]
use crate::config::SupabaseConfig;

/// Failure of an auth operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Provider { status: u16, message: String },
    /// The provider answered 2xx but the body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// No auth backend is reachable from this build or environment.
    #[error("auth unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Whether the provider rejected the presented token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Provider { status: 401 | 403, .. })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn password_grant_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_grant_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=refresh_token")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn recover_endpoint(base: &str, redirect_to: &str) -> String {
    format!("{base}/auth/v1/recover?redirect_to={}", urlencoding::encode(redirect_to))
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

/// Provider consent URL the browser is sent to for OAuth sign-in.
pub fn authorize_url(base: &str, provider: OAuthProvider, redirect_to: &str) -> String {
    format!(
        "{base}/auth/v1/authorize?provider={}&redirect_to={}",
        provider.as_str(),
        urlencoding::encode(redirect_to)
    )
}

/// Map a non-success response body to an [`AuthError::Provider`].
pub fn provider_error(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(ProviderErrorBody::into_message)
        .unwrap_or_else(|| format!("request failed: {status}"));
    AuthError::Provider { status, message }
}

#[cfg(feature = "hydrate")]
fn config() -> Result<SupabaseConfig, AuthError> {
    SupabaseConfig::from_build_env().map_err(|e| AuthError::Unavailable(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn request(builder: gloo_net::http::RequestBuilder, cfg: &SupabaseConfig, bearer: Option<&str>) -> gloo_net::http::RequestBuilder {
    let builder = builder.header("apikey", &cfg.anon_key);
    match bearer {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, AuthError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(provider_error(status, &body))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    cfg: &SupabaseConfig,
    bearer: Option<&str>,
    body: &B,
) -> Result<gloo_net::http::Response, AuthError> {
    let resp = request(gloo_net::http::Request::post(url), cfg, bearer)
        .json(body)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    ensure_ok(resp).await
}

/// Exchange email + password for a session.
///
/// # Errors
///
/// Returns the provider's message (e.g. invalid credentials, unconfirmed
/// email) as [`AuthError::Provider`].
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = config()?;
        let resp = post_json(&password_grant_endpoint(&cfg.url), &cfg, None, &PasswordCredentials { email, password }).await?;
        resp.json::<Session>().await.map_err(|e| AuthError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}

/// Exchange a refresh token for a new session.
///
/// # Errors
///
/// Returns [`AuthError::Provider`] when the refresh token is revoked or expired.
pub async fn refresh_session(refresh_token: &str) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = config()?;
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let resp = post_json(&refresh_grant_endpoint(&cfg.url), &cfg, None, &body).await?;
        resp.json::<Session>().await.map_err(|e| AuthError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}

/// Register a new account with `{ username, role: "user" }` metadata.
///
/// The provider sends a verification email; no session is returned.
///
/// # Errors
///
/// Returns [`AuthError::Provider`] when the email is taken or the password is
/// rejected by the provider's policy.
pub async fn sign_up(email: &str, password: &str, username: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = config()?;
        let body = SignUpRequest {
            email,
            password,
            data: SignUpData { username, role: DEFAULT_SIGNUP_ROLE },
        };
        post_json(&signup_endpoint(&cfg.url), &cfg, None, &body).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, username);
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}

/// Ask the provider to email a password-reset link that returns to `redirect_to`.
///
/// # Errors
///
/// Returns [`AuthError::Provider`] on rate limiting or invalid addresses.
pub async fn reset_password_for_email(email: &str, redirect_to: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = config()?;
        post_json(&recover_endpoint(&cfg.url, redirect_to), &cfg, None, &RecoverRequest { email }).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, redirect_to);
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}

/// Send the browser to the provider's consent screen.
///
/// On success the page unloads; the provider later redirects back to
/// `redirect_to` with tokens in the URL fragment.
///
/// # Errors
///
/// Returns [`AuthError::Unavailable`] when unconfigured or when the browser
/// refuses the navigation.
pub fn sign_in_with_oauth(provider: OAuthProvider, redirect_to: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = config()?;
        crate::util::browser::set_href(&authorize_url(&cfg.url, provider, redirect_to)).map_err(AuthError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, redirect_to);
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}

/// Fetch the user that owns `access_token`.
///
/// # Errors
///
/// Returns [`AuthError::Provider`] with status 401 when the token has expired.
pub async fn fetch_user(access_token: &str) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = config()?;
        let resp = request(gloo_net::http::Request::get(&user_endpoint(&cfg.url)), &cfg, Some(access_token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let resp = ensure_ok(resp).await?;
        resp.json::<User>().await.map_err(|e| AuthError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}

/// Revoke the session server-side.
///
/// # Errors
///
/// Returns an error if the provider cannot be reached or rejects the token.
/// Callers clear local state regardless.
pub async fn sign_out(access_token: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = config()?;
        let resp = request(gloo_net::http::Request::post(&logout_endpoint(&cfg.url)), &cfg, Some(access_token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}
