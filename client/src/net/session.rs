//! Session persistence and restoration across page loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider returns tokens in two ways: in the JSON body of a password
//! grant, and in the URL fragment after an OAuth or password-recovery redirect.
//! Both end up as a [`Session`] stored in `localStorage`, which `restore` reads
//! back on hydrate and re-validates against `/auth/v1/user`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::types::{Session, User};

const STORAGE_KEY: &str = "librovault.auth.session";

/// Tokens carried in the redirect fragment, e.g.
/// `#access_token=..&refresh_token=..&expires_in=3600&token_type=bearer&type=recovery`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    /// `recovery`, `signup`, `magiclink`, ... when the provider sets it.
    pub kind: Option<String>,
}

impl FragmentTokens {
    pub fn into_session(self, user: User) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type,
            expires_in: self.expires_in,
            expires_at: self.expires_at,
            user,
        }
    }
}

/// Parse a redirect fragment. Returns `None` unless it carries an access token.
pub fn parse_fragment(fragment: &str) -> Option<FragmentTokens> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut tokens = FragmentTokens {
        access_token: String::new(),
        refresh_token: String::new(),
        token_type: "bearer".to_owned(),
        expires_in: 0,
        expires_at: None,
        kind: None,
    };
    for pair in fragment.split('&') {
        let Some((key, raw)) = pair.split_once('=') else {
            continue;
        };
        let Ok(value) = urlencoding::decode(raw) else {
            continue;
        };
        let value = value.into_owned();
        match key {
            "access_token" => tokens.access_token = value,
            "refresh_token" => tokens.refresh_token = value,
            "token_type" => tokens.token_type = value,
            "expires_in" => tokens.expires_in = value.parse().unwrap_or(0),
            "expires_at" => tokens.expires_at = value.parse().ok(),
            "type" => tokens.kind = Some(value),
            _ => {}
        }
    }
    (!tokens.access_token.is_empty()).then_some(tokens)
}

/// Read the OAuth error a redirect fragment carries, e.g.
/// `#error=access_denied&error_description=Email+link+is+invalid`.
///
/// Prefers `error_description` over the bare `error` code.
pub fn fragment_error(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut code = None;
    let mut description = None;
    for pair in fragment.split('&') {
        let Some((key, raw)) = pair.split_once('=') else {
            continue;
        };
        let spaced = raw.replace('+', " ");
        let Ok(value) = urlencoding::decode(&spaced) else {
            continue;
        };
        match key {
            "error" => code = Some(value.into_owned()),
            "error_description" => description = Some(value.into_owned()),
            _ => {}
        }
    }
    let code = code?;
    Some(description.filter(|d| !d.trim().is_empty()).unwrap_or(code))
}

/// Decode a stored session. Entries without an access token decode to `None`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_stored(raw: &str) -> Result<Option<Session>, serde_json::Error> {
    serde_json::from_str::<Session>(raw).map(|session| (!session.access_token.is_empty()).then_some(session))
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Last stored session, if any.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        decode_stored(&raw).unwrap_or_else(|e| {
            log::warn!("discarding unreadable stored session: {e}");
            None
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn store(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session not persisted");
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(STORAGE_KEY, &raw).is_err() {
                    log::warn!("localStorage rejected the session");
                }
            }
            Err(e) => log::warn!("could not encode session: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

pub fn clear() {
    #[cfg(feature = "hydrate")]
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

/// Resolve the session for this page load.
///
/// Redirect tokens win over a stored session. A stored session whose token is
/// rejected is refreshed once with its refresh token, then dropped.
#[cfg(feature = "hydrate")]
pub async fn restore() -> Option<Session> {
    use super::auth;
    use crate::util::browser;

    // Fragments without tokens or an error (`/about#team`) stay in the URL.
    let fragment = browser::location_hash().unwrap_or_default();
    if let Some(tokens) = parse_fragment(&fragment) {
        browser::clear_location_hash();
        match auth::fetch_user(&tokens.access_token).await {
            Ok(user) => {
                log::info!("session restored from redirect (type={:?})", tokens.kind);
                let session = tokens.into_session(user);
                store(&session);
                return Some(session);
            }
            Err(e) => log::warn!("redirect tokens rejected: {e}"),
        }
    } else if let Some(message) = fragment_error(&fragment) {
        browser::clear_location_hash();
        log::warn!("auth redirect returned an error: {message}");
        browser::alert(&message);
    }

    let stored = load()?;
    match auth::fetch_user(&stored.access_token).await {
        Ok(user) => {
            let session = Session { user, ..stored };
            store(&session);
            Some(session)
        }
        Err(e) if e.is_unauthorized() && !stored.refresh_token.is_empty() => {
            match auth::refresh_session(&stored.refresh_token).await {
                Ok(session) => {
                    log::info!("session refreshed");
                    store(&session);
                    Some(session)
                }
                Err(e) => {
                    log::warn!("session refresh failed: {e}");
                    clear();
                    None
                }
            }
        }
        Err(e) if e.is_unauthorized() => {
            clear();
            None
        }
        Err(e) => {
            // Provider unreachable: keep the cached user until the next load.
            log::warn!("could not validate stored session: {e}");
            Some(stored)
        }
    }
}
