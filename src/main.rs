//! # Time Service Main Entry Point
//!
//! Initializes logging, loads configuration, builds the template engine,
//! and serves the timezone-filtered time pages over HTTP.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod server;
mod templates;
mod utils;

use crate::config::Config;
use crate::server::TimeService;
use crate::templates::TemplateEngine;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "time_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Time Service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Host: {}, Port: {}, Templates: {}",
        config.http_host, config.http_port, config.templates_dir
    );

    // Load templates up front so a broken template fails the boot, not a request
    let templates = Arc::new(TemplateEngine::load(&config.templates_dir)?);
    info!("Template engine initialized successfully");

    let service = TimeService::new(templates);

    let addr = format!("{}:{}", config.http_host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Time service listening on http://{addr}");
    utils::logging::log_system_event("startup complete", Some(&addr));

    axum::serve(listener, service.router)
        .await
        .context("Server error")?;

    info!("Application stopped");
    Ok(())
}
