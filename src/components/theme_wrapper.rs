//! Composition root that supplies the storefront theme to its children.

use leptos::prelude::*;
use leptos_meta::Style;

use crate::util::theme::{STOREFRONT_THEME, Theme};

/// Provides `Theme` as context and injects the baseline reset once.
#[component]
pub fn ThemeWrapper(children: Children) -> impl IntoView {
    let theme: Theme = STOREFRONT_THEME;
    provide_context(theme);

    view! {
        <Style id="storefront-theme">{theme.stylesheet()}</Style>
        <div class="theme-root">{children()}</div>
    }
}
