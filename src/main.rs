use std::sync::Arc;
use std::time::Duration;

use encore_api::api::{create_router, AppState};
use encore_api::config::Config;
use encore_api::db;
use encore_api::services::providers::postgres::{PgGroupProvider, PgUserPreferenceProvider};
use encore_api::services::{scheduler, RecommendationService};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("encore_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;

    let recommendations = Arc::new(RecommendationService::new(
        Arc::new(PgGroupProvider::new(pool.clone())),
        Arc::new(PgUserPreferenceProvider::new(pool)),
    ));

    // Trains once at startup, then on the configured interval.
    tokio::spawn(scheduler::run_retrain_loop(
        recommendations.clone(),
        Duration::from_secs(config.retrain_interval_secs),
    ));

    let app = create_router(AppState::new(recommendations));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
