mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if config.seed_demo_data {
        startup::seed_demo_data(&db).await?;
    }

    startup::prepare_media_root(&config).await?;

    if config.allow_mock_token {
        tracing::warn!("AUTH_ALLOW_MOCK_TOKEN is enabled, the development sentinel credential is accepted");
    }

    let bind_address = config.bind_address.clone();
    let state = AppState::new(db, config);
    let app = router::router(&state)?.with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Starting server on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
