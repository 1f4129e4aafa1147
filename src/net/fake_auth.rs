//! In-memory `AuthBackend` for tests.
//!
//! The initial session fetch waits on a oneshot channel so tests decide when
//! (and with what) it resolves relative to hub broadcasts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::channel::oneshot;

use super::auth::{AuthBackend, AuthError, AuthFuture, SessionHandler, SessionHub, Subscription};
use super::types::{Session, User};

pub(crate) type FetchResult = Result<Session, AuthError>;

pub(crate) fn user(id: &str) -> User {
    User { id: id.to_owned(), email: Some(format!("{id}@shop.test")) }
}

pub(crate) struct FakeAuth {
    pub hub: SessionHub,
    pending_fetch: Mutex<Option<oneshot::Receiver<FetchResult>>>,
    sign_out_result: Mutex<Result<(), AuthError>>,
    pub sign_out_calls: AtomicUsize,
}

impl FakeAuth {
    /// Backend plus the sender that completes its one-shot session fetch.
    pub fn new() -> (Arc<Self>, oneshot::Sender<FetchResult>) {
        let (tx, rx) = oneshot::channel();
        let backend = Self {
            hub: SessionHub::new(),
            pending_fetch: Mutex::new(Some(rx)),
            sign_out_result: Mutex::new(Ok(())),
            sign_out_calls: AtomicUsize::new(0),
        };
        (Arc::new(backend), tx)
    }

    pub fn fail_sign_out(&self, err: AuthError) {
        *self.sign_out_result.lock().unwrap() = Err(err);
    }
}

impl AuthBackend for FakeAuth {
    fn current_session(&self) -> AuthFuture<'_, Session> {
        let pending = self.pending_fetch.lock().unwrap().take();
        async move {
            match pending {
                Some(rx) => rx.await.unwrap_or(Ok(Session::Absent)),
                None => Ok(Session::Absent),
            }
        }
        .boxed_local()
    }

    fn subscribe(&self, handler: SessionHandler) -> Subscription {
        self.hub.subscribe(handler)
    }

    fn sign_in_with_password<'a>(&'a self, email: &'a str, _password: &'a str) -> AuthFuture<'a, User> {
        async move {
            let signed_in = user(email);
            self.hub.broadcast(&Session::Present(signed_in.clone()));
            Ok(signed_in)
        }
        .boxed_local()
    }

    fn sign_up<'a>(&'a self, email: &'a str, password: &'a str) -> AuthFuture<'a, User> {
        self.sign_in_with_password(email, password)
    }

    fn sign_out(&self) -> AuthFuture<'_, ()> {
        async move {
            self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
            let result = self.sign_out_result.lock().unwrap().clone();
            if result.is_ok() {
                self.hub.broadcast(&Session::Absent);
            }
            result
        }
        .boxed_local()
    }
}
