use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = AuthConfig::from_lookup(|_| None);
    assert_eq!(config, AuthConfig::default());
    assert_eq!(config.url, DEFAULT_AUTH_URL);
    assert_eq!(config.storage_key, DEFAULT_SESSION_STORAGE_KEY);
    assert!(config.anon_key.is_empty());
}

#[test]
fn all_values_are_read() {
    let config = AuthConfig::from_lookup(lookup_from(&[
        (AUTH_URL_VAR, "https://shop.example.co"),
        (AUTH_ANON_KEY_VAR, "anon-123"),
        (SESSION_KEY_VAR, "shop_icy_session"),
    ]));
    assert_eq!(config.url, "https://shop.example.co");
    assert_eq!(config.anon_key, "anon-123");
    assert_eq!(config.storage_key, "shop_icy_session");
}

#[test]
fn trailing_slashes_are_trimmed_from_url() {
    let config = AuthConfig::from_lookup(lookup_from(&[(AUTH_URL_VAR, "https://shop.example.co//")]));
    assert_eq!(config.url, "https://shop.example.co");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = AuthConfig::from_lookup(lookup_from(&[(AUTH_URL_VAR, "   "), (SESSION_KEY_VAR, "")]));
    assert_eq!(config.url, DEFAULT_AUTH_URL);
    assert_eq!(config.storage_key, DEFAULT_SESSION_STORAGE_KEY);
}

#[test]
fn values_are_trimmed() {
    let config = AuthConfig::from_lookup(lookup_from(&[(AUTH_ANON_KEY_VAR, "  key  ")]));
    assert_eq!(config.anon_key, "key");
}
