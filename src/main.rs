use std::{fmt::Display, sync::Arc};

use log::{error, info, warn};
use tasknest_app::build_application;
use tasknest_email_lettre::{LettreEmailAdapter, LettreEmailConfig};
use tasknest_http_api::HttpConfig;

mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

fn or_exit<T, E: Display>(what: &str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!("Invalid {} configuration: {}", what, e);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    logs::init_logger();

    if let Err(e) = dotenv {
        warn!("No .env file loaded ({}), using process environment", e);
    }

    let email_config = or_exit("email", LettreEmailConfig::from_env());
    let email_adapter = Arc::new(or_exit(
        "email",
        LettreEmailAdapter::from_config(&email_config),
    ));
    let http_config = or_exit("HTTP", HttpConfig::from_env());

    let app = Arc::new(build_application(email_adapter));

    info!("Starting application");

    if let Err(e) = tasknest_http_api::run(app, &http_config, shutdown_signal()).await {
        error!("HTTP API failed: {}", e);
        std::process::exit(1);
    }

    info!("Application shut down gracefully");
}
