pub(crate) mod cli;

use api_sales::handlers::ApiDoc;
use api_sales::layers::make_cors_middleware;
use api_sales::router::create_router;
use api_sales::state::AppState;
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use core_store::{LocalSalesStore, StoreConfig};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
#[allow(clippy::expect_used, clippy::unwrap_used)]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "salesd=debug,api_sales=debug,core_store=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opts = cli::CliOpts::parse();
    let host = opts.host.clone().unwrap();
    let port = opts.port.unwrap();
    let allow_origin = if opts.cors_enabled.unwrap_or(false) {
        opts.cors_allow_origin.clone()
    } else {
        None
    };

    let store = LocalSalesStore::new(StoreConfig::new(&opts.data_dir));
    // One-time spreadsheet repair; a missing spreadsheet is not fatal here,
    // the relational source may still be servable.
    if let Err(e) = store.prepare() {
        tracing::warn!("Spreadsheet source not ready: {e}");
    }

    tracing::info!("Starting Sales API...");

    let state = AppState::new(Arc::new(store));
    let api_router = create_router().with_state(state);
    let api_router = match allow_origin {
        Some(ref origin) => api_router.layer(make_cors_middleware(origin)),
        None => api_router,
    };

    let router = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/health", get(|| async { Json("OK") }))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(30)))
        .layer(CatchPanicLayer::new());

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}"))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Failed to get local address");
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");
}

#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
