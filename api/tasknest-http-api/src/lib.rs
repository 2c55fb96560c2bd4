use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use tasknest_app::Application;
use tower_http::cors::CorsLayer;

mod callable;
mod config;
mod error;
mod registration;

pub use config::{HttpConfig, HttpConfigError};
pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    Router::new()
        .route("/sendEmail", post(registration::send_email))
        .route("/health", get(|| async { "ok" }))
        .layer(CorsLayer::permissive())
        .with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    config: &HttpConfig,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;

    info!("Callable API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}
