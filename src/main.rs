mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    auth::encrypter::Encrypter, config::Config, data::seed, error::AppError, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = startup::connect_store(&config.database).await?;
    let encrypter = Encrypter::default();

    // Baseline rows must exist before the first request is accepted.
    seed::seed(&store, &encrypter, &config.seed).await?;

    let state = AppState::from_config(store, &config.jwt, encrypter)?;
    let app = router::router(state);

    let listener = tokio::net::TcpListener::bind(config.server_address).await?;
    tracing::info!("Listening on {}", config.server_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
