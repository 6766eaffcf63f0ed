use anyhow::Result;
use api::{app, AppState};
use shared::{get_db_connection, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting price API server...");

    let config = Config::from_env()?;
    let bind_addr = config.api_bind_addr.clone();
    let db = get_db_connection(&config.database_url).await?;
    info!("Connected to database");

    let state = AppState::new(config, db)?;
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on http://{}", bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
