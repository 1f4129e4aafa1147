//! Shared backdrop helpers for the navbar's always-mounted dialogs.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Backdrop class list; closed dialogs stay in the DOM but hidden.
pub fn backdrop_class(open: bool) -> &'static str {
    if open {
        "dialog-backdrop"
    } else {
        "dialog-backdrop dialog-backdrop--hidden"
    }
}

/// Whether a keydown should dismiss the dialog.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Whether a keydown should dismiss a popup that is currently `open`.
pub fn dismiss_on_key(open: bool, key: &str) -> bool {
    open && is_dismiss_key(key)
}

/// Tracks a dialog's single in-flight request.
///
/// Closing the dialog bumps the generation so a late result is dropped,
/// but the dialog stays busy until that request settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGate {
    generation: u64,
    in_flight: bool,
}

impl SubmitGate {
    pub fn busy(&self) -> bool {
        self.in_flight
    }

    /// Start a request, or `None` while one is already pending.
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.generation)
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Settle the request started at `ticket`; `true` if its result still applies.
    pub fn finish(&mut self, ticket: u64) -> bool {
        self.in_flight = false;
        ticket == self.generation
    }
}
