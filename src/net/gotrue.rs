//! `AuthBackend` implementation for a GoTrue-compatible auth REST service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, tokens persisted
//! in `localStorage`.
//! Server-side (SSR): the session resolves to `Absent` and mutations fail
//! with `AuthError::Unavailable`, since the session only exists in the
//! browser.
//!
//! Every successful sign-in, sign-up that issues tokens, and sign-out is
//! broadcast through the backend's `SessionHub`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod gotrue_test;

use futures::FutureExt;

use super::auth::{AuthBackend, AuthError, AuthFuture, SessionHandler, SessionHub, Subscription};
use super::types::{Session, User};
use crate::config::AuthConfig;
#[cfg(any(test, feature = "hydrate"))]
use super::types::AuthTokens;
#[cfg(feature = "hydrate")]
use super::types::{Credentials, SignUpResponse, TokenResponse};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::storage;

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn password_grant_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull the human-readable message out of an error body, whichever of the
/// service's error shapes it uses.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> AuthError {
    let message = error_message(body).unwrap_or_else(|| "auth request rejected".to_owned());
    AuthError::Status { status, message }
}

/// How a `/auth/v1/user` response status maps onto the stored session.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq)]
enum UserFetch {
    /// Token accepted; the body carries the user.
    Valid,
    /// Token no longer accepted; stored tokens are discarded.
    Rejected,
    /// Any other failure, surfaced as `AuthError::Status`.
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
fn user_status_outcome(status: u16) -> UserFetch {
    match status {
        200..=299 => UserFetch::Valid,
        401 => UserFetch::Rejected,
        _ => UserFetch::Failed,
    }
}

/// 401 means the token is already dead server-side.
#[cfg(any(test, feature = "hydrate"))]
fn sign_out_acknowledged(status: u16) -> bool {
    (200..=299).contains(&status) || status == 401
}

/// A password grant must issue a token pair.
#[cfg(any(test, feature = "hydrate"))]
fn require_tokens(tokens: Option<AuthTokens>) -> Result<AuthTokens, AuthError> {
    tokens.ok_or_else(|| AuthError::Decode("sign-in response carried no tokens".to_owned()))
}

/// Auth backend talking to `{url}/auth/v1/*`.
pub struct GoTrueAuth {
    #[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
    config: AuthConfig,
    hub: SessionHub,
}

impl GoTrueAuth {
    pub fn new(config: AuthConfig) -> Self {
        Self { config, hub: SessionHub::new() }
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> AuthError {
    AuthError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(err: gloo_net::Error) -> AuthError {
    AuthError::Decode(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_status_error(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    status_error(status, &body)
}

#[cfg(feature = "hydrate")]
impl GoTrueAuth {
    /// `Ok(None)` when the service no longer accepts the access token.
    async fn fetch_user(&self, tokens: &AuthTokens) -> Result<Option<User>, AuthError> {
        let resp = gloo_net::http::Request::get(&user_endpoint(&self.config.url))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &bearer(&tokens.access_token))
            .send()
            .await
            .map_err(transport)?;
        match user_status_outcome(resp.status()) {
            UserFetch::Valid => resp.json::<User>().await.map(Some).map_err(decode),
            UserFetch::Rejected => Ok(None),
            UserFetch::Failed => Err(read_status_error(resp).await),
        }
    }

    async fn post_credentials(&self, url: &str, email: &str, password: &str) -> Result<gloo_net::http::Response, AuthError> {
        let resp = gloo_net::http::Request::post(url)
            .header("apikey", &self.config.anon_key)
            .json(&Credentials { email, password })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(read_status_error(resp).await);
        }
        Ok(resp)
    }
}

#[cfg(any(test, feature = "hydrate"))]
impl GoTrueAuth {
    /// Persist issued tokens and announce the user. Without tokens (sign-up
    /// awaiting confirmation) nothing is stored or broadcast.
    fn store_session(&self, user: &User, tokens: Option<AuthTokens>) {
        let Some(tokens) = tokens else {
            return;
        };
        storage::save_json(&self.config.storage_key, &tokens);
        self.hub.broadcast(&Session::Present(user.clone()));
    }

    fn clear_session(&self) {
        storage::remove(&self.config.storage_key);
        self.hub.broadcast(&Session::Absent);
    }
}

impl AuthBackend for GoTrueAuth {
    fn current_session(&self) -> AuthFuture<'_, Session> {
        async move {
            #[cfg(feature = "hydrate")]
            {
                let Some(tokens) = storage::load_json::<AuthTokens>(&self.config.storage_key) else {
                    return Ok(Session::Absent);
                };
                let user = self.fetch_user(&tokens).await?;
                if user.is_none() {
                    storage::remove(&self.config.storage_key);
                }
                Ok(Session::from(user))
            }
            #[cfg(not(feature = "hydrate"))]
            {
                Ok(Session::Absent)
            }
        }
        .boxed_local()
    }

    fn subscribe(&self, handler: SessionHandler) -> Subscription {
        self.hub.subscribe(handler)
    }

    fn sign_in_with_password<'a>(&'a self, email: &'a str, password: &'a str) -> AuthFuture<'a, User> {
        async move {
            #[cfg(feature = "hydrate")]
            {
                let resp = self
                    .post_credentials(&password_grant_endpoint(&self.config.url), email, password)
                    .await?;
                let body: TokenResponse = resp.json().await.map_err(decode)?;
                let tokens = require_tokens(body.tokens())?;
                self.store_session(&body.user, Some(tokens));
                Ok(body.user)
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email, password);
                Err(AuthError::Unavailable)
            }
        }
        .boxed_local()
    }

    fn sign_up<'a>(&'a self, email: &'a str, password: &'a str) -> AuthFuture<'a, User> {
        async move {
            #[cfg(feature = "hydrate")]
            {
                let resp = self
                    .post_credentials(&sign_up_endpoint(&self.config.url), email, password)
                    .await?;
                let body: SignUpResponse = resp.json().await.map_err(decode)?;
                let (user, tokens) = body.into_parts();
                self.store_session(&user, tokens);
                Ok(user)
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email, password);
                Err(AuthError::Unavailable)
            }
        }
        .boxed_local()
    }

    fn sign_out(&self) -> AuthFuture<'_, ()> {
        async move {
            #[cfg(feature = "hydrate")]
            {
                let Some(tokens) = storage::load_json::<AuthTokens>(&self.config.storage_key) else {
                    self.clear_session();
                    return Ok(());
                };
                let resp = gloo_net::http::Request::post(&logout_endpoint(&self.config.url))
                    .header("apikey", &self.config.anon_key)
                    .header("Authorization", &bearer(&tokens.access_token))
                    .send()
                    .await
                    .map_err(transport)?;
                if !sign_out_acknowledged(resp.status()) {
                    return Err(read_status_error(resp).await);
                }
                self.clear_session();
                Ok(())
            }
            #[cfg(not(feature = "hydrate"))]
            {
                Err(AuthError::Unavailable)
            }
        }
        .boxed_local()
    }
}
