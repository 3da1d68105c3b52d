use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::models::category::{CategoryFilter, Cuisine};
use crate::repositories::catalog_repo::CatalogRepo;

pub fn router(app_state: AppState) -> Router {
    let catalog_repo = app_state.catalog_repo.clone();

    Router::new()
        .route("/", get(retrieve_visible_restaurants))
        .route("/detail", get(retrieve_restaurant))
        .route("/search", post(search_restaurants_by_location))
        .route("/category", post(filter_restaurants_by_category))
        .route("/categories", get(retrieve_categories))
        .route("/context", get(retrieve_search_context))
        .route_layer(Extension(catalog_repo))
}

pub async fn retrieve_visible_restaurants(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        json!(catalog_repo.visible_restaurants()).to_string()
    )
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GetRestaurantParam {
    pub restaurant_id: String,
}

pub async fn retrieve_restaurant(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
    Query(query): Query<GetRestaurantParam>,
) -> impl IntoResponse {
    let restaurant = catalog_repo.retrieve_restaurant(&query.restaurant_id);

    return if restaurant.is_some() {
        (
            StatusCode::OK,
            json!(&restaurant.unwrap()).to_string()
        ).into_response()
    } else {
        (
            StatusCode::OK,
            json!("{}").to_string()
        ).into_response()
    };
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchRestaurantParam {
    pub location: String,
}

pub async fn search_restaurants_by_location(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
    Json(body): Json<SearchRestaurantParam>,
) -> impl IntoResponse {
    let search_res = catalog_repo
        .search_restaurants(
            &body.location
        ).await;

    return match search_res {
        Ok((location, restaurants)) => {
            (
                StatusCode::OK,
                json!({
                    "location": location,
                    "restaurants": restaurants,
                }).to_string()
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong searching restaurants by location due to: {}", e);
            (
                StatusCode::BAD_REQUEST,
                "Failed to search restaurants, please try again!"
            ).into_response()
        }
    };
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct FilterCategoryParam {
    pub category: CategoryFilter,
}

pub async fn filter_restaurants_by_category(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
    Json(body): Json<FilterCategoryParam>,
) -> impl IntoResponse {
    let restaurants = catalog_repo.filter_by_category(body.category);

    (
        StatusCode::OK,
        json!(&restaurants).to_string()
    )
}

/// The cuisine buttons the frontend renders, with their icon names.
pub async fn retrieve_categories() -> impl IntoResponse {
    let categories = Cuisine::ALL
        .iter()
        .map(|cuisine| {
            json!({
                "name": cuisine.as_str(),
                "icon": cuisine.icon(),
            })
        })
        .collect::<Vec<_>>();

    (
        StatusCode::OK,
        json!(categories).to_string()
    )
}

pub async fn retrieve_search_context(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        json!(catalog_repo.search_context()).to_string()
    )
}
