pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod state;

use crate::config::Config;
use crate::infra::factory::bootstrap_state;
use api::router::create_router;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "boat-booking.log";

/// Pretty logs on stdout (`RUST_LOG`, default `info`) plus daily JSON files in
/// `log_dir`. Keep the guard alive or buffered file lines are lost.
pub fn init_logging(log_dir: &str) -> WorkerGuard {
    let (file_writer, guard) = tracing_appender::non_blocking(
        tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX),
    );

    let file_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("info,boat_booking_backend=debug"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("Writing JSON logs to {}/{}.*", log_dir, LOG_FILE_PREFIX);
    guard
}

pub async fn run() {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let _guard = init_logging(&config.log_dir);

    let state = bootstrap_state(&config).expect("Failed to initialize Bokun client");
    let app = create_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind listener");

    info!(
        "Server running on port {}, managing {} experiences via {}",
        config.port, config.experience_ids.len(), config.bokun_base_url
    );
    axum::serve(listener, app).await.expect("Server error");
}
