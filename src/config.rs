//! Auth backend configuration.
//!
//! The browser bundle has no process environment, so values are baked in at
//! build time through `option_env!`. Parsing goes through a lookup function
//! so tests can feed values without touching the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_URL: &str = "http://localhost:54321";
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "storefront_session";

pub const AUTH_URL_VAR: &str = "STOREFRONT_AUTH_URL";
pub const AUTH_ANON_KEY_VAR: &str = "STOREFRONT_AUTH_ANON_KEY";
pub const SESSION_KEY_VAR: &str = "STOREFRONT_SESSION_KEY";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL of the auth service, without a trailing slash.
    pub url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub anon_key: String,
    /// `localStorage` key holding the persisted token pair.
    pub storage_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_AUTH_URL.to_owned(),
            anon_key: String::new(),
            storage_key: DEFAULT_SESSION_STORAGE_KEY.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `STOREFRONT_AUTH_URL`: default `http://localhost:54321`
    /// - `STOREFRONT_AUTH_ANON_KEY`: default empty
    /// - `STOREFRONT_SESSION_KEY`: default `storefront_session`
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let url = non_blank(lookup(AUTH_URL_VAR))
            .map_or(defaults.url, |raw| raw.trim_end_matches('/').to_owned());
        let anon_key = non_blank(lookup(AUTH_ANON_KEY_VAR)).unwrap_or(defaults.anon_key);
        let storage_key = non_blank(lookup(SESSION_KEY_VAR)).unwrap_or(defaults.storage_key);
        Self { url, anon_key, storage_key }
    }

    /// Config captured from the environment of the build.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        AUTH_URL_VAR => option_env!("STOREFRONT_AUTH_URL"),
        AUTH_ANON_KEY_VAR => option_env!("STOREFRONT_AUTH_ANON_KEY"),
        SESSION_KEY_VAR => option_env!("STOREFRONT_SESSION_KEY"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
