use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::repositories::review_repo::ReviewRepo;

pub fn router(app_state: AppState) -> Router {
    let review_repo = app_state.review_repo.clone();

    Router::new()
        .route("/user", get(retrieve_user_reviews))
        .route("/restaurant", get(retrieve_restaurant_reviews))
        .route("/", post(add_review))
        .route_layer(Extension(review_repo))
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AddReviewBody {
    pub restaurant_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub text: String,
}

pub async fn add_review(
    Extension(review_repo): Extension<Arc<ReviewRepo>>,
    Json(body): Json<AddReviewBody>,
) -> impl IntoResponse {
    let add_review_res = review_repo.add_review(
        &body.restaurant_id,
        &body.user_id,
        &body.user_name,
        body.rating,
        &body.text,
    );

    return match add_review_res {
        Ok(review) => {
            (
                StatusCode::OK,
                json!(&review).to_string()
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong adding review for restaurant due to: {}", e);
            (StatusCode::BAD_REQUEST, "Failed to add review for restaurant, please try again").into_response()
        }
    };
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RetrieveRestaurantReviews {
    pub restaurant_id: String,
}

pub async fn retrieve_restaurant_reviews(
    Extension(review_repo): Extension<Arc<ReviewRepo>>,
    Query(query): Query<RetrieveRestaurantReviews>,
) -> impl IntoResponse {
    let reviews = review_repo.retrieve_restaurant_reviews(&query.restaurant_id);

    (
        StatusCode::OK,
        json!(&reviews).to_string()
    )
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct RetrieveUserReviewsQuery {
    pub user_id: String,
}

pub async fn retrieve_user_reviews(
    Extension(review_repo): Extension<Arc<ReviewRepo>>,
    Query(query): Query<RetrieveUserReviewsQuery>,
) -> impl IntoResponse {
    let reviews = review_repo.get_user_reviews(&query.user_id);

    (
        StatusCode::OK,
        json!(&reviews).to_string()
    )
}
