use super::*;

#[test]
fn backdrop_class_hides_closed_dialogs() {
    assert_eq!(backdrop_class(true), "dialog-backdrop");
    assert_eq!(backdrop_class(false), "dialog-backdrop dialog-backdrop--hidden");
}

#[test]
fn only_escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("Esc"));
}

#[test]
fn dismiss_on_key_requires_open_popup() {
    assert!(dismiss_on_key(true, "Escape"));
    assert!(!dismiss_on_key(false, "Escape"));
    assert!(!dismiss_on_key(true, "Tab"));
}

// =============================================================
// SubmitGate
// =============================================================

#[test]
fn submit_gate_blocks_duplicate_requests() {
    let mut gate = SubmitGate::default();
    let ticket = gate.begin();
    assert!(ticket.is_some());
    assert!(gate.busy());
    assert_eq!(gate.begin(), None);
}

#[test]
fn submit_gate_applies_result_when_not_cancelled() {
    let mut gate = SubmitGate::default();
    let ticket = gate.begin().unwrap();
    assert!(gate.finish(ticket));
    assert!(!gate.busy());
}

#[test]
fn cancel_keeps_gate_busy_until_request_settles() {
    let mut gate = SubmitGate::default();
    let ticket = gate.begin().unwrap();
    gate.cancel();
    assert!(gate.busy());
    assert_eq!(gate.begin(), None);

    assert!(!gate.finish(ticket));
    assert!(!gate.busy());
}

#[test]
fn late_result_is_dropped_after_cancel_and_new_request_applies() {
    let mut gate = SubmitGate::default();
    let stale = gate.begin().unwrap();
    gate.cancel();
    assert!(!gate.finish(stale));

    let fresh = gate.begin().unwrap();
    assert!(gate.finish(fresh));
}
