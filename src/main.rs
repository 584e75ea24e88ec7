#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use userportal::app::{App, shell};

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("invalid leptos config");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "userportal listening");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server failed");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser entry point is `hydrate` in lib.rs; nothing runs here.
}
