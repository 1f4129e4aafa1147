//! Storefront landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Welcome to Shop ICY"</h1>
            <p class="home__tagline">"Browse the catalog, fill your cart, check out in a few clicks."</p>
        </section>
    }
}
