//! Account creation dialog.

use leptos::prelude::*;

use crate::components::modal::{SubmitGate, backdrop_class, is_dismiss_key};
use crate::net::auth::AuthClient;
use crate::net::types::User;
use crate::util::credentials::validate_sign_up;

/// Always-mounted sign-up dialog, hidden while `open` is false.
///
/// A new account is reported through `on_success` even when the service
/// still waits for email confirmation.
#[component]
pub fn SignUpDialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_success: Callback<User>,
) -> impl IntoView {
    let auth = expect_context::<AuthClient>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let gate = RwSignal::new(SubmitGate::default());
    let busy = move || gate.with(SubmitGate::busy);

    let reset = move || {
        email.set(String::new());
        password.set(String::new());
        confirm.set(String::new());
        error.set(None);
    };
    let close = move || {
        gate.update(SubmitGate::cancel);
        reset();
        on_close.run(());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if gate.with_untracked(SubmitGate::busy) {
            return;
        }
        let validated = validate_sign_up(&email.get_untracked(), &password.get_untracked(), &confirm.get_untracked());
        let (email_value, password_value) = match validated {
            Ok(values) => values,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(ticket) = gate.try_update(SubmitGate::begin).flatten() else {
            return;
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let result = auth.sign_up(&email_value, &password_value).await;
                // Dropped when the dialog was closed while the request ran.
                if !gate.try_update(|g| g.finish(ticket)).unwrap_or(false) {
                    return;
                }
                match result {
                    Ok(user) => {
                        leptos::logging::log!("sign-up succeeded for {}", user.id);
                        reset();
                        on_success.run(user);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, email_value, password_value, on_success, ticket);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <div class=move || backdrop_class(open.get()) on:click=move |_| close()>
            <div
                class="dialog dialog--auth"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>"Create Account"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <input
                        class="dialog__input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--signup" disabled=busy>
                            {move || if busy() { "Creating…" } else { "Sign Up" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
