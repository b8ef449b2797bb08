use billing_frontend::config::get_configuration;
use billing_frontend::services::supabase::SupabaseClient;
use billing_frontend::startup::build_router;
use billing_frontend::AppState;
use dotenvy::dotenv;
use service_core::observability::{init_tracing, shutdown_tracing};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(&configuration.telemetry)?;

    billing_frontend::services::metrics::init_metrics();

    let backend = Arc::new(SupabaseClient::new(configuration.backend.clone()));
    info!(backend_url = %backend.base_url(), "Using auth/data backend");

    let state = AppState::new(
        backend,
        configuration.session.clone(),
        configuration.billing.clone(),
    );
    let app = build_router(state);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting billing-frontend on {}", address);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    shutdown_tracing();

    served.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
