use anyhow::Result;
use payhook::{
    config::Config,
    handlers::{router, AppState},
    services::{gateway_from_config, TracingEventSink},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting payhook v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        provider = config.provider.name(),
        test_mode = config.is_test_mode(),
        base_url = %config.base_url,
        "Payment gateway configured"
    );

    let state = AppState::new(
        gateway_from_config(&config),
        Arc::new(TracingEventSink),
    );
    let app = router(state);

    // Start server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Webhook endpoint: http://{}/webhook", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {}", e);
        return;
    }
    tracing::info!("Shutting down gracefully...");
}
