//! Mount-scoped session tracking for the navbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the navbar needs two feeds from the auth backend: a one-shot
//! fetch of the current session and a long-lived change subscription. Both
//! report into the same `NavEvent` dispatcher, in arrival order.
//!
//! TEARDOWN
//! ========
//! `SessionWatch` owns the subscription. Dropping it (from `on_cleanup`)
//! unsubscribes and marks the watch dead, so a fetch that resolves after
//! unmount is discarded instead of writing into disposed state.

#[cfg(test)]
#[path = "session_watch_test.rs"]
mod session_watch_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::net::auth::{AuthBackend, AuthClient, AuthError, Subscription};
use crate::net::types::Session;
use crate::state::nav::NavEvent;

/// Live subscription plus the liveness flag shared with the pending fetch.
pub struct SessionWatch {
    alive: Arc<AtomicBool>,
    subscription: Option<Subscription>,
}

impl SessionWatch {
    /// Subscribe to session changes and build the initial-fetch future.
    ///
    /// The caller spawns the returned future on its executor; it dispatches
    /// `InitialSessionResolved` exactly once unless the watch was dropped
    /// first.
    pub fn start<F>(auth: &AuthClient, dispatch: F) -> (Self, LocalBoxFuture<'static, ()>)
    where
        F: Fn(NavEvent) + Send + Sync + 'static,
    {
        let alive = Arc::new(AtomicBool::new(true));
        let dispatch = Arc::new(dispatch);
        let mut watch = Self { alive: Arc::clone(&alive), subscription: None };

        let listener_alive = Arc::clone(&alive);
        let listener_dispatch = Arc::clone(&dispatch);
        watch.subscription = Some(auth.subscribe(Arc::new(move |session| {
            if listener_alive.load(Ordering::Acquire) {
                listener_dispatch(NavEvent::SessionChanged(session));
            }
        })));

        let auth = auth.clone();
        let initial = async move {
            let session = initial_session(auth.current_session().await);
            if alive.load(Ordering::Acquire) {
                dispatch(NavEvent::InitialSessionResolved(session));
            }
        }
        .boxed_local();

        (watch, initial)
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Acquire) && self.subscription.is_some()
    }

    /// Unsubscribe and discard any pending fetch result.
    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.alive.store(false, Ordering::Release);
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl Drop for SessionWatch {
    fn drop(&mut self) {
        self.release();
    }
}

/// A failed fetch ends loading as signed out.
pub fn initial_session(result: Result<Session, AuthError>) -> Session {
    match result {
        Ok(session) => session,
        Err(e) => {
            leptos::logging::warn!("session fetch failed, continuing signed out: {e}");
            Session::Absent
        }
    }
}

/// Sign out and report whether the backend acknowledged it.
///
/// Failures are logged only; the session stays as it was until the backend
/// broadcasts a change.
pub async fn sign_out_quietly(auth: &dyn AuthBackend) -> bool {
    leptos::logging::log!("signing out");
    match auth.sign_out().await {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::error!("sign-out failed: {e}");
            false
        }
    }
}
