//! Auth collaborator seam: backend trait, change broadcasting, subscriptions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store lives outside the UI. Components reach it through an
//! `AuthClient` provided as Leptos context and observe it through
//! `Subscription`s handed out by a `SessionHub`. Every mounted navbar shares
//! the same hub, so a sign-in in one dialog is seen by all of them.
//!
//! ERROR HANDLING
//! ==============
//! Backend calls return `AuthError`; what a caller does with a failure is
//! the caller's policy (the navbar swallows, the dialogs display).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use futures::future::LocalBoxFuture;

use super::types::{Session, User};

/// Failure reported by the auth backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("auth request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
    /// The response body did not have the expected shape.
    #[error("malformed auth response: {0}")]
    Decode(String),
    /// No browser environment to talk to the service from.
    #[error("auth is not available on the server")]
    Unavailable,
}

/// Boxed future returned by backend operations.
pub type AuthFuture<'a, T> = LocalBoxFuture<'a, Result<T, AuthError>>;

/// Listener invoked with the new session after every session transition.
pub type SessionHandler = Arc<dyn Fn(Session) + Send + Sync>;

/// Operations the storefront consumes from the auth service.
pub trait AuthBackend: Send + Sync {
    /// Resolve the current session once.
    fn current_session(&self) -> AuthFuture<'_, Session>;

    /// Register for session-change notifications until the handle is dropped.
    fn subscribe(&self, handler: SessionHandler) -> Subscription;

    fn sign_in_with_password<'a>(&'a self, email: &'a str, password: &'a str) -> AuthFuture<'a, User>;

    fn sign_up<'a>(&'a self, email: &'a str, password: &'a str) -> AuthFuture<'a, User>;

    fn sign_out(&self) -> AuthFuture<'_, ()>;
}

/// Shared handle to the application's auth backend, provided via context.
#[derive(Clone)]
pub struct AuthClient(Arc<dyn AuthBackend>);

impl AuthClient {
    pub fn new(backend: impl AuthBackend + 'static) -> Self {
        Self(Arc::new(backend))
    }

    #[cfg(test)]
    pub fn from_shared(backend: Arc<dyn AuthBackend>) -> Self {
        Self(backend)
    }
}

impl Deref for AuthClient {
    type Target = dyn AuthBackend;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Default)]
struct HubListeners {
    next_id: u64,
    entries: Vec<(u64, SessionHandler)>,
}

/// Fan-out point for session-change notifications.
#[derive(Clone, Default)]
pub struct SessionHub {
    listeners: Arc<Mutex<HubListeners>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: SessionHandler) -> Subscription {
        let mut listeners = lock(&self.listeners);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, handler));
        Subscription { listeners: Arc::downgrade(&self.listeners), id }
    }

    /// Deliver `session` to every current listener in subscription order.
    ///
    /// Handlers run outside the lock so they may subscribe or unsubscribe.
    pub fn broadcast(&self, session: &Session) {
        let handlers: Vec<SessionHandler> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(session.clone());
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }
}

/// Registration in a `SessionHub`; dropping it removes the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    listeners: Weak<Mutex<HubListeners>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            lock(&listeners).entries.retain(|(id, _)| *id != self.id);
        }
    }
}

fn lock(listeners: &Mutex<HubListeners>) -> MutexGuard<'_, HubListeners> {
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}
