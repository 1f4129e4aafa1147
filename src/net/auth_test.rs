use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counting_handler(counter: &Arc<AtomicUsize>) -> SessionHandler {
    let counter = Arc::clone(counter);
    Arc::new(move |_: Session| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

// =============================================================
// SessionHub
// =============================================================

#[test]
fn broadcast_reaches_every_listener() {
    let hub = SessionHub::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let _a = hub.subscribe(counting_handler(&calls));
    let _b = hub.subscribe(counting_handler(&calls));

    hub.broadcast(&Session::Absent);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn broadcast_delivers_the_session_value() {
    let hub = SessionHub::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = hub.subscribe(Arc::new(move |session: Session| sink.lock().unwrap().push(session)));

    let user = User { id: "u1".to_owned(), email: None };
    hub.broadcast(&Session::Present(user.clone()));
    hub.broadcast(&Session::Absent);

    assert_eq!(*seen.lock().unwrap(), vec![Session::Present(user), Session::Absent]);
}

#[test]
fn dropping_subscription_removes_listener() {
    let hub = SessionHub::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let sub = hub.subscribe(counting_handler(&calls));
    assert_eq!(hub.listener_count(), 1);

    drop(sub);
    assert_eq!(hub.listener_count(), 0);
    hub.broadcast(&Session::Absent);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unsubscribe_only_removes_its_own_listener() {
    let hub = SessionHub::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let first = hub.subscribe(counting_handler(&calls));
    let _second = hub.subscribe(counting_handler(&calls));

    first.unsubscribe();
    hub.broadcast(&Session::Absent);
    assert_eq!(hub.listener_count(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_outliving_hub_drops_cleanly() {
    let hub = SessionHub::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let sub = hub.subscribe(counting_handler(&calls));
    drop(hub);
    drop(sub);
}

#[test]
fn handler_may_subscribe_during_broadcast() {
    let hub = SessionHub::new();
    let nested = Arc::new(Mutex::new(Vec::new()));
    let hub_for_handler = hub.clone();
    let nested_sink = Arc::clone(&nested);
    let _sub = hub.subscribe(Arc::new(move |_: Session| {
        let sub = hub_for_handler.subscribe(Arc::new(|_: Session| {}));
        nested_sink.lock().unwrap().push(sub);
    }));

    hub.broadcast(&Session::Absent);
    assert_eq!(hub.listener_count(), 2);
}

// =============================================================
// AuthError
// =============================================================

#[test]
fn auth_error_status_display_includes_message_and_code() {
    let err = AuthError::Status { status: 400, message: "Invalid login credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid login credentials (400)");
}

#[test]
fn auth_error_transport_display() {
    assert_eq!(AuthError::Transport("offline".to_owned()).to_string(), "auth request failed: offline");
}
