// Main entry point - Configuration, service wiring and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app_config = load_app_config()?;

    let dashboard_service = DashboardService::new(app_config.theme, app_config.dashboard);
    let state = Arc::new(AppState { dashboard_service });
    let router = build_router(state);

    let addr: SocketAddr = format!("{}:{}", app_config.server.host, app_config.server.port).parse()?;
    tracing::info!("Starting esg-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
