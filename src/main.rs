mod config;
mod fetcher;
mod pipeline;
mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::fetcher::FeedFetcher;
use crate::pipeline::Aggregator;
use crate::routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anime_games_news=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the source registry, falling back to the built-in one
    let config = Config::load_or_default("sources.toml")?;
    info!(
        "Serving '{}' with {} sources",
        config.site_name,
        config.sources.len()
    );

    // Build the fetch pipeline
    let fetcher = FeedFetcher::new(Duration::from_secs(config.fetch_timeout_secs));
    let aggregator = Aggregator::new(fetcher, config.sources.clone());

    // Create app state
    let state = Arc::new(AppState {
        site_name: config.site_name,
        description: config.description,
        aggregator,
    });

    // Build router
    let app = Router::new()
        .route("/", get(routes::index))
        .route("/about", get(routes::about))
        .route("/privacy", get(routes::privacy))
        .route("/disclaimer", get(routes::disclaimer))
        .route("/health", get(routes::health))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("Server starting on http://localhost:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
