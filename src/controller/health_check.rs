use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

/// Liveness probe the frontend hits before first render
async fn get_health_check() -> Result<StatusCode, StatusCode> {
    Ok(StatusCode::OK)
}
