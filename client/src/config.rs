//! Auth service endpoint configuration.
//!
//! The browser bundle has no runtime environment, so the project URL and the
//! public anon key are baked in at compile time from
//! `LIBROVAULT_SUPABASE_URL` and `LIBROVAULT_SUPABASE_ANON_KEY`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const URL_VAR: &str = "LIBROVAULT_SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "LIBROVAULT_SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} was not set at build time")]
    Missing { var: &'static str },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Project URL and anon key for the hosted auth API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    /// Public API key sent as the `apikey` header.
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Read the values captured by `option_env!` when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is missing or the URL is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("LIBROVAULT_SUPABASE_URL"), option_env!("LIBROVAULT_SUPABASE_ANON_KEY"))
    }

    /// Validate raw values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is missing, blank, or the URL is
    /// not `http://` / `https://`.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = non_blank(url).ok_or(ConfigError::Missing { var: URL_VAR })?;
        let anon_key = non_blank(anon_key).ok_or(ConfigError::Missing { var: ANON_KEY_VAR })?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl { var: URL_VAR, value: url.to_owned() });
        }
        Ok(Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
