use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::catalog_repo::CatalogRepo;
use crate::repositories::review_repo::ReviewRepo;

pub mod health_check;
pub mod map_controller;
pub mod restaurant_controller;
pub mod review_controller;

#[derive(Clone)]
pub struct AppState {
    pub catalog_repo: Arc<CatalogRepo>,
    pub review_repo: Arc<ReviewRepo>,
}

pub async fn serve(app_state: AppState, config: &Config) -> anyhow::Result<()> {
    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .map(|s| s.parse().unwrap())
        .collect::<Vec<HeaderValue>>();

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
        )
        .fallback(page_not_found_handler);

    let port = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("API server listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    Router::new()
        .nest("/restaurants", restaurant_controller::router(app_state.clone()))
        .nest("/reviews", review_controller::router(app_state.clone()))
        .nest("/map", map_controller::router(app_state))
        .merge(health_check::router())
}
