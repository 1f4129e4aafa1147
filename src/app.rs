//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavigationBar;
use crate::components::theme_wrapper::ThemeWrapper;
use crate::config::AuthConfig;
use crate::net::auth::AuthClient;
use crate::net::gotrue::GoTrueAuth;
use crate::pages::home::HomePage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth client, wraps everything in the theme, and
/// renders the navigation bar above the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AuthClient::new(GoTrueAuth::new(AuthConfig::from_build_env())));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Shop ICY"/>

        <ThemeWrapper>
            <Router>
                <NavigationBar/>
                <main class="storefront-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                    </Routes>
                </main>
            </Router>
        </ThemeWrapper>
    }
}
