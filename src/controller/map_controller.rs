use std::sync::Arc;
use axum::{Extension, Router};
use axum::response::IntoResponse;
use axum::routing::get;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::controller::AppState;
use crate::models::category::Cuisine;
use crate::models::restaurant::{Location, Restaurant, SearchLocation};
use crate::repositories::catalog_repo::CatalogRepo;

pub fn router(app_state: AppState) -> Router {
    let catalog_repo = app_state.catalog_repo.clone();

    Router::new()
        .route("/markers", get(retrieve_map_markers))
        .route_layer(Extension(catalog_repo))
}

/// Plain display data for one pin; the map SDK on the client does the rest.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MapMarker {
    pub restaurant_id: String,
    pub name: String,
    pub category: Cuisine,
    pub rating: f64,
    pub review_count: u32,
    pub coordinates: Location,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MapView {
    pub center: Option<SearchLocation>,
    pub markers: Vec<MapMarker>,
}

pub async fn retrieve_map_markers(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
) -> impl IntoResponse {
    let markers = catalog_repo
        .visible_restaurants()
        .into_iter()
        .map(marker_for)
        .collect::<Vec<MapMarker>>();
    let view = MapView {
        center: catalog_repo.search_context().search_location,
        markers,
    };

    (
        StatusCode::OK,
        json!(&view).to_string()
    )
}

fn marker_for(restaurant: Restaurant) -> MapMarker {
    MapMarker {
        restaurant_id: restaurant.id,
        name: restaurant.name,
        category: restaurant.category,
        rating: restaurant.rating,
        review_count: restaurant.review_count,
        coordinates: restaurant.coordinates,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::geocoding_api::MockGeocodingApi;
    use crate::repositories::seed;

    #[tokio::test]
    async fn markers_track_the_visible_set() {
        let catalog_repo = Arc::new(CatalogRepo::new(
            seed::restaurants(),
            Arc::new(MockGeocodingApi::new(Duration::ZERO)),
        ));
        catalog_repo.search_restaurants("Los Angeles").await.unwrap();

        let markers = catalog_repo
            .visible_restaurants()
            .into_iter()
            .map(marker_for)
            .collect::<Vec<MapMarker>>();

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "Thai Spice");
        assert_eq!(markers[0].coordinates.lat, 34.0522);
    }
}
