use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use crate::config::Config;
use crate::controller::AppState;
use crate::geocoding_api::MockGeocodingApi;
use crate::repositories::catalog_repo::CatalogRepo;
use crate::repositories::review_repo::ReviewRepo;
use crate::repositories::seed;

pub mod config;
pub mod controller;
pub mod geocoding_api;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    let location_resolver = Arc::new(MockGeocodingApi::new(
        Duration::from_millis(config.search_delay_ms)
    ));
    let app_state = AppState {
        catalog_repo: Arc::new(CatalogRepo::new(seed::restaurants(), location_resolver)),
        review_repo: Arc::new(ReviewRepo::new(seed::reviews())),
    };

    info!("Starting dine-finder backend in {} environment", config.environment);
    controller::serve(app_state, &config).await
}
