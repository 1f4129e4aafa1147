//! Auth wire DTOs and the session value shared by the navbar and dialogs.
//!
//! DESIGN
//! ======
//! `User` mirrors the auth service's user object loosely: only the identity
//! and contact fields the storefront touches are typed, everything else is
//! ignored by serde.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated storefront user as returned by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier (UUID string).
    pub id: String,
    /// Primary email address, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Label for tooltips: the email when known, otherwise the id.
    pub fn display_label(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

/// Locally cached view of the auth service's session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Absent,
    Present(User),
}

impl Session {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Present(user) => Some(user),
            Self::Absent => None,
        }
    }
}

impl From<Option<User>> for Session {
    fn from(user: Option<User>) -> Self {
        user.map_or(Self::Absent, Self::Present)
    }
}

/// Token pair persisted in browser storage between page loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Email + password body for the sign-in and sign-up endpoints.
#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response body of the password grant and (token-issuing) sign-up.
///
/// Sign-up with email confirmation enabled returns a user without tokens.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

impl TokenResponse {
    /// Token pair, when the service issued both halves.
    pub fn tokens(&self) -> Option<AuthTokens> {
        match (&self.access_token, &self.refresh_token) {
            (Some(access), Some(refresh)) => Some(AuthTokens {
                access_token: access.clone(),
                refresh_token: refresh.clone(),
            }),
            _ => None,
        }
    }
}

/// Sign-up replies either with a full token response or with the bare user
/// object when the account still awaits email confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Issued(TokenResponse),
    Pending(User),
}

impl SignUpResponse {
    pub fn into_parts(self) -> (User, Option<AuthTokens>) {
        match self {
            Self::Issued(resp) => {
                let tokens = resp.tokens();
                (resp.user, tokens)
            }
            Self::Pending(user) => (user, None),
        }
    }
}
