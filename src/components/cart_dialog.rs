//! Shopping cart dialog opened from the navbar's cart icon.

use leptos::prelude::*;

use crate::components::modal::{backdrop_class, is_dismiss_key};

#[component]
pub fn CartDialog(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class=move || backdrop_class(open.get()) on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--cart"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>"Your Cart"</h2>
                <p class="dialog__empty">"Your cart is empty."</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Continue Shopping"
                    </button>
                </div>
            </div>
        </div>
    }
}
