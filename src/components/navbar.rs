//! Site navigation bar with session-aware account controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet. It owns a per-instance
//! `NavBarState`, keeps it in sync with the shared auth backend through a
//! `SessionWatch`, and hosts the sign-in, sign-up and cart dialogs plus the
//! profile menu.
//!
//! ERROR HANDLING
//! ==============
//! Auth failures never surface here: a failed initial fetch shows the
//! signed-out controls and a failed sign-out is only logged.

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::cart_dialog::CartDialog;
use crate::components::profile_menu::ProfileMenu;
use crate::components::sign_in_dialog::SignInDialog;
use crate::components::sign_up_dialog::SignUpDialog;
use crate::net::auth::AuthClient;
use crate::net::types::User;
use crate::state::nav::{AuthRegion, Dialog, NavBarState, NavEvent, PROFILE_MENU_ANCHOR};
use crate::util::session_watch::SessionWatch;
use crate::util::theme::Theme;

/// Top navigation bar: brand on the left, cart and account on the right.
#[component]
pub fn NavigationBar() -> impl IntoView {
    let auth = expect_context::<AuthClient>();
    let theme = expect_context::<Theme>();
    let nav = RwSignal::new(NavBarState::default());

    let (watch, initial) = SessionWatch::start(&auth, move |event| nav.update(|s| s.apply(event)));
    spawn_initial_fetch(initial);
    on_cleanup(move || watch.stop());

    let apply = move |event: NavEvent| nav.update(|s| s.apply(event));

    let on_open_cart = move |_| apply(NavEvent::OpenDialog(Dialog::Cart));
    let on_open_sign_in = move |_| apply(NavEvent::OpenDialog(Dialog::SignIn));
    let on_open_sign_up = move |_| apply(NavEvent::OpenDialog(Dialog::SignUp));
    let on_open_menu = move |_| apply(NavEvent::OpenMenu(PROFILE_MENU_ANCHOR.to_owned()));

    let close_menu = Callback::new(move |()| apply(NavEvent::CloseMenu));
    let on_profile = Callback::new(move |()| {
        apply(NavEvent::CloseMenu);
        leptos::logging::log!("navigate to profile");
    });
    let on_add_payment = Callback::new(move |()| {
        apply(NavEvent::CloseMenu);
        leptos::logging::log!("open add payment");
    });
    let on_logout = Callback::new(move |()| {
        apply(NavEvent::SignOutRequested);
        spawn_sign_out(auth.clone());
    });

    let close_sign_in = Callback::new(move |()| apply(NavEvent::CloseDialog(Dialog::SignIn)));
    let close_sign_up = Callback::new(move |()| apply(NavEvent::CloseDialog(Dialog::SignUp)));
    let close_cart = Callback::new(move |()| apply(NavEvent::CloseDialog(Dialog::Cart)));
    let sign_in_success = Callback::new(move |user: User| apply(NavEvent::SignedIn(user)));
    let sign_up_success = Callback::new(move |user: User| apply(NavEvent::SignedUp(user)));

    let menu_open = Signal::derive(move || nav.with(NavBarState::menu_open));
    let dialog_open = move |dialog: Dialog| Signal::derive(move || nav.with(|s| s.is_dialog_open(dialog)));
    let sign_in_open = dialog_open(Dialog::SignIn);
    let sign_up_open = dialog_open(Dialog::SignUp);
    let cart_open = dialog_open(Dialog::Cart);
    // Rebuild the account controls only when the layout switches.
    let region = Memo::new(move |_| nav.with(NavBarState::auth_region));

    let trigger_title = move || {
        nav.with(|s| s.user().map(|u| u.display_label().to_owned()).unwrap_or_default())
    };

    let layout = theme.nav;
    let cart_slot_style = format!("width: {}px;", layout.cart_slot_width_px);
    let skeleton_style = format!(
        "width: {}px; height: {}px;",
        layout.auth_skeleton_width_px, layout.auth_skeleton_height_px
    );
    let logo_size = layout.logo_size_px.to_string();

    let auth_region = move || match region.get() {
        AuthRegion::Skeleton => view! {
            <div class="skeleton navbar__auth-skeleton" style=skeleton_style.clone()></div>
        }
        .into_any(),
        AuthRegion::SignInControls => view! {
            <button class="nav-button" on:click=on_open_sign_in>
                "Log In"
            </button>
            <button class="nav-button nav-button--signup" on:click=on_open_sign_up>
                "Sign Up"
            </button>
        }
        .into_any(),
        AuthRegion::ProfileTrigger => view! {
            <button
                id=PROFILE_MENU_ANCHOR
                class="icon-button"
                aria-label="account of current user"
                aria-controls="menu-appbar"
                aria-haspopup="true"
                title=trigger_title
                on:click=on_open_menu
            >
                "☰"
            </button>
            <ProfileMenu
                open=menu_open
                on_dismiss=close_menu
                on_profile=on_profile
                on_add_payment=on_add_payment
                on_logout=on_logout
            />
        }
        .into_any(),
    };

    view! {
        <header class="navbar">
            <div class="navbar__toolbar">
                <div class="navbar__brand">
                    <img
                        class="navbar__logo"
                        src="/logo.svg"
                        alt="Shop ICY Logo"
                        width=logo_size.clone()
                        height=logo_size
                    />
                    <span class="navbar__title">"Shop ICY"</span>
                </div>
                <div class="navbar__actions">
                    <Show
                        when=move || nav.with(NavBarState::show_cart_icon)
                        fallback=move || view! { <div class="navbar__cart-slot" style=cart_slot_style.clone()></div> }
                    >
                        <button class="icon-button navbar__cart" aria-label="shopping cart" on:click=on_open_cart>
                            "🛒"
                        </button>
                    </Show>
                    {auth_region}
                </div>
            </div>
        </header>

        <SignInDialog open=sign_in_open on_close=close_sign_in on_success=sign_in_success />
        <SignUpDialog open=sign_up_open on_close=close_sign_up on_success=sign_up_success />
        <CartDialog open=cart_open on_close=close_cart />
    }
}

/// The session only exists in the browser; SSR renders the loading layout.
fn spawn_initial_fetch(initial: LocalBoxFuture<'static, ()>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(initial);
    #[cfg(not(feature = "hydrate"))]
    drop(initial);
}

fn spawn_sign_out(auth: AuthClient) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::session_watch::sign_out_quietly(&*auth).await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(auth);
}
