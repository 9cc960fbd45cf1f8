use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use portfolio_dashboard::adapters::http::{app_router, AppState};
use portfolio_dashboard::adapters::postgres::{connect_pool, PostgresProjectReader};
use portfolio_dashboard::adapters::{InMemoryProjectReader, ThreadRngSource};
use portfolio_dashboard::config::{AppConfig, ServerConfig};
use portfolio_dashboard::ports::ProjectReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let project_reader: Arc<dyn ProjectReader> = match &config.database {
        Some(database) => {
            let pool = connect_pool(database).await?;
            info!(max_connections = database.max_connections, "project database connected");
            Arc::new(PostgresProjectReader::new(pool))
        }
        None => {
            warn!("no database configured, serving the in-memory project catalog");
            Arc::new(InMemoryProjectReader::with_portfolio_projects())
        }
    };

    let state = AppState::new(Arc::new(ThreadRngSource::new()), project_reader);
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "dashboard API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("dashboard API stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let _ = if server.is_production() {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.with_target(false).try_init()
    };
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
