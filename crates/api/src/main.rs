use std::sync::Arc;

use pledger_api::{build_router, state::AppState};
use pledger_config::Settings;
use pledger_store::JsonStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (silently ignore if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "pledger_api=debug,pledger_services=debug,pledger_store=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let settings = Settings::load()?;
    info!(
        "Starting Pledger API on {}:{}",
        settings.app.host, settings.app.port
    );

    let store = Arc::new(JsonStore::new(&settings.store.path));
    info!(path = %store.path().display(), "Using record store");

    let app_state = AppState::new(store, settings.clone());
    let app = build_router(app_state);

    let addr = format!("{}:{}", settings.app.host, settings.app.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
