use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workday_calendar::api::{AppState, create_router};
use workday_calendar::config::ConfigLoader;
use workday_calendar::store::InMemoryHolidayRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workday_calendar=info,axum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ConfigLoader::from_env()?;
    let addr = config.settings().server.address();
    tracing::info!(
        weekend_days = ?config.weekend_days().indices(),
        "Configuration loaded"
    );

    let state = AppState::new(config, Arc::new(InMemoryHolidayRepository::new()));
    let app = create_router(state);

    // Start server
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
