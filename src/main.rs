//! SSR host: serves the Leptos app, its static assets, and a health probe.
//!
//! Settings (`LEPTOS_SITE_ADDR`, `LEPTOS_SITE_ROOT`, ...) come from the
//! environment or `[package.metadata.leptos]` via `get_configuration`.

use std::path::PathBuf;
use std::process::ExitCode;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use studio_ui::app::{App, shell};

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Leptos SSR routes plus `/pkg` assets and `/healthz`.
fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!(error = %e, "leptos configuration");
            return ExitCode::FAILURE;
        }
    };
    let addr = conf.leptos_options.site_addr;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, "studio-ui listening");
    if let Err(e) = axum::serve(listener, app(conf.leptos_options).into_make_service()).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
