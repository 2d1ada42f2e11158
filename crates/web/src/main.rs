//! `onboard-web` -- serves the client onboarding form.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default   | Description                          |
//! |------------------------|----------|-----------|--------------------------------------|
//! | `ONBOARD_URL`          | yes      | --        | Intake endpoint the form POSTs to    |
//! | `HOST`                 | no       | `0.0.0.0` | Bind address                         |
//! | `PORT`                 | no       | `3000`    | Bind port                            |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`      | Inbound request timeout              |
//! | `INTAKE_TIMEOUT_SECS`  | no       | `10`      | Outbound intake request timeout      |

use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onboard_intake::IntakeClient;
use onboard_web::config::ServerConfig;
use onboard_web::router::build_app_router;
use onboard_web::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "onboard_web=debug,onboard_intake=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });
    tracing::info!(
        host = %config.host,
        port = config.port,
        intake_url = %config.intake_url,
        "Loaded server configuration",
    );

    // --- Intake client ---
    let intake = IntakeClient::new(
        config.intake_url.clone(),
        Duration::from_secs(config.intake_timeout_secs),
    )
    .unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build intake HTTP client");
        std::process::exit(1);
    });

    let state = AppState { intake };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let host = config.host.parse().unwrap_or_else(|_| {
        tracing::error!(host = %config.host, "HOST must be a valid IP address");
        std::process::exit(1);
    });
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
