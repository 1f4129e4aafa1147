//! Profile action menu shown from the navbar's account button.

use leptos::prelude::*;

use crate::components::modal::dismiss_on_key;
use crate::state::nav::PROFILE_MENU_ANCHOR;

/// Menu with Profile, Add Payment and Logout actions.
///
/// Clicking outside the list or pressing Escape reports `on_dismiss`.
#[component]
pub fn ProfileMenu(
    #[prop(into)] open: Signal<bool>,
    on_dismiss: Callback<()>,
    on_profile: Callback<()>,
    on_add_payment: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let menu_ref = NodeRef::<leptos::html::Ul>::new();

    // Keyboard dismissal needs the list focused once it mounts.
    Effect::new(move || {
        let mounted = menu_ref.get();
        let should_focus = open.get();
        #[cfg(feature = "hydrate")]
        {
            if let (true, Some(menu)) = (should_focus, mounted) {
                let _ = menu.focus();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (should_focus, mounted);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if dismiss_on_key(open.get_untracked(), &ev.key()) {
            ev.prevent_default();
            on_dismiss.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="menu-backdrop" on:click=move |_| on_dismiss.run(())></div>
            <ul
                id="menu-appbar"
                class="profile-menu"
                role="menu"
                aria-labelledby=PROFILE_MENU_ANCHOR
                tabindex="-1"
                node_ref=menu_ref
                on:keydown=on_keydown
            >
                <li class="profile-menu__item" role="menuitem" on:click=move |_| on_profile.run(())>
                    "Profile"
                </li>
                <li class="profile-menu__item" role="menuitem" on:click=move |_| on_add_payment.run(())>
                    "Add Payment"
                </li>
                <li class="profile-menu__divider" role="separator"></li>
                <li
                    class="profile-menu__item profile-menu__item--logout"
                    role="menuitem"
                    on:click=move |_| on_logout.run(())
                >
                    "Logout"
                </li>
            </ul>
        </Show>
    }
}
