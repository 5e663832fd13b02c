// src/main.rs
use storefront::config::Config;
use storefront::domain::errors::{AppError, AppResult};
use storefront::infrastructure::database::Database;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));

    let database = Database::connect(&config.database).await?;
    database.migrate().await?;

    let app = storefront::app(&database);

    let address = config.bind_address();
    log::info!("Binding to {}", address);

    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::Config(format!("Failed to bind {}: {}", address, e))
    })?;

    storefront::adapter::http::serve(listener, app).await?;

    database.close().await;
    log::info!("Shutdown complete. Goodbye!");
    Ok(())
}
