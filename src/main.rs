#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::path::PathBuf;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use storefront::app::{App, shell};
    use tower_http::services::ServeDir;

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&site_root));

    let listener = tokio::net::TcpListener::bind(&addr).await.expect("failed to bind");
    tracing::info!(%addr, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser bundle starts from `storefront::hydrate`.
}
