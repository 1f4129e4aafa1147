//! Navigation bar view state and its session lifecycle.
//!
//! DESIGN
//! ======
//! All mutations go through `NavBarState::apply` so the component, the
//! session watcher and tests share one transition table. Rendering decisions
//! (`mode`, `auth_region`, `show_cart_icon`) are pure reads of the state.
//!
//! Sign-in and sign-up write the session optimistically from the dialog's
//! result. Sign-out only closes the menu; the session is cleared when the
//! auth service broadcasts the change, so a failed sign-out leaves the bar
//! showing the old user.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::{Session, User};

/// DOM id of the button the profile menu anchors to.
pub const PROFILE_MENU_ANCHOR: &str = "profile-button";

/// Which of the three mutually exclusive layouts the bar renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    Loading,
    Anonymous,
    Authenticated,
}

/// Dialogs owned by the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    SignIn,
    SignUp,
    Cart,
}

/// What occupies the auth slot on the right of the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthRegion {
    /// Placeholder skeleton while the session is unresolved.
    Skeleton,
    /// "Log In" and "Sign Up" controls.
    SignInControls,
    /// Icon button opening the profile menu.
    ProfileTrigger,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The one-shot fetch on mount completed.
    InitialSessionResolved(Session),
    /// The auth service broadcast a session transition.
    SessionChanged(Session),
    OpenDialog(Dialog),
    CloseDialog(Dialog),
    SignedIn(User),
    SignedUp(User),
    /// Open the profile menu anchored to the element with this id.
    OpenMenu(String),
    CloseMenu,
    SignOutRequested,
}

/// Per-instance navbar state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBarState {
    pub loading: bool,
    pub session: Session,
    pub sign_in_open: bool,
    pub sign_up_open: bool,
    pub cart_open: bool,
    pub menu_anchor: Option<String>,
}

impl Default for NavBarState {
    fn default() -> Self {
        Self {
            loading: true,
            session: Session::Absent,
            sign_in_open: false,
            sign_up_open: false,
            cart_open: false,
            menu_anchor: None,
        }
    }
}

impl NavBarState {
    pub fn mode(&self) -> NavMode {
        if self.loading {
            NavMode::Loading
        } else if self.session.is_present() {
            NavMode::Authenticated
        } else {
            NavMode::Anonymous
        }
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::InitialSessionResolved(session) => {
                self.loading = false;
                self.set_session(session);
            }
            NavEvent::SessionChanged(session) => self.set_session(session),
            NavEvent::OpenDialog(dialog) => self.set_dialog(dialog, true),
            NavEvent::CloseDialog(dialog) => self.set_dialog(dialog, false),
            NavEvent::SignedIn(user) => {
                self.session = Session::Present(user);
                self.sign_in_open = false;
            }
            NavEvent::SignedUp(user) => {
                self.session = Session::Present(user);
                self.sign_up_open = false;
            }
            NavEvent::OpenMenu(anchor) => {
                if self.mode() == NavMode::Authenticated {
                    self.menu_anchor = Some(anchor);
                }
            }
            NavEvent::CloseMenu | NavEvent::SignOutRequested => self.menu_anchor = None,
        }
    }

    pub fn is_dialog_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::SignIn => self.sign_in_open,
            Dialog::SignUp => self.sign_up_open,
            Dialog::Cart => self.cart_open,
        }
    }

    /// The menu only exists in the authenticated layout.
    pub fn menu_open(&self) -> bool {
        self.menu_anchor.is_some() && self.mode() == NavMode::Authenticated
    }

    /// The cart icon waits for the session so the bar does not shift.
    pub fn show_cart_icon(&self) -> bool {
        !self.loading
    }

    pub fn auth_region(&self) -> AuthRegion {
        match self.mode() {
            NavMode::Loading => AuthRegion::Skeleton,
            NavMode::Anonymous => AuthRegion::SignInControls,
            NavMode::Authenticated => AuthRegion::ProfileTrigger,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    fn set_session(&mut self, session: Session) {
        if !session.is_present() {
            self.menu_anchor = None;
        }
        self.session = session;
    }

    fn set_dialog(&mut self, dialog: Dialog, open: bool) {
        match dialog {
            Dialog::SignIn => self.sign_in_open = open,
            Dialog::SignUp => self.sign_up_open = open,
            Dialog::Cart => self.cart_open = open,
        }
    }
}
