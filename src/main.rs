//! Main entry point for the Cloth Catalog API

use cloth_catalog_api::{api, config, store, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up PORT / MONGODB_URI and friends from a local .env
    let dotenv = dotenvy::dotenv();

    // Load configuration
    let settings = config::Settings::load()?;
    settings.validate()?;

    // Initialize logging
    config::logging::init(&settings.logging);

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to read .env file");
        }
    }

    info!(
        "Starting Cloth Catalog API: server={}:{} store={}",
        settings.server.host, settings.server.port, settings.database.driver
    );

    // Connect the store once; every request shares this client
    let store = store::create_store(&settings.database).await?;
    store.ping().await?;
    info!(store = %store.name(), "Connected to document store");

    let addr = settings.listen_addr();
    let app_state = Arc::new(AppState::new(settings, store));

    // Build the router
    let app = api::routes::create_router(app_state)?;

    info!("Server is running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
