//! Smart Farming Advisor server binary

use std::net::SocketAddr;

use smart_farming_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sfa_server=debug,smart_farming_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Smart Farming Advisor Server");
    tracing::info!("Environment: {}", config.environment);
    if config.model_available() {
        tracing::info!("Disease model: remote inference service");
    } else {
        tracing::warn!("Disease model: not configured, using demo predictions");
    }

    let port = config.server.port;
    let state = AppState::from_config(config);

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
