use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use common::{ErrorResponse, HealthResponse};
use std::sync::Arc;

use crate::client::FetchError;
use crate::domain::FetchMode;
use crate::service::TravelService;

pub const TRAVEL_BASE_ENDPOINT: &str = "/travel";

pub type SharedTravelService = Arc<TravelService>;

fn map_fetch_error(err: FetchError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse::new(err.to_string(), "UPSTREAM_ERROR")),
    )
}

async fn fetch_travel_details(service: &TravelService, mode: FetchMode) -> axum::response::Response {
    match service.fetch(mode).await {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(err) => map_fetch_error(err).into_response(),
    }
}

/// GET /travel/sync - 順次取得
pub async fn get_travel_sync(State(service): State<SharedTravelService>) -> impl IntoResponse {
    fetch_travel_details(&service, FetchMode::Sequential).await
}

/// GET /travel/async - 同時取得
pub async fn get_travel_async(State(service): State<SharedTravelService>) -> impl IntoResponse {
    fetch_travel_details(&service, FetchMode::Concurrent).await
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "gateway-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub fn create_router(service: SharedTravelService) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(&format!("{TRAVEL_BASE_ENDPOINT}/sync"), get(get_travel_sync))
        .route(&format!("{TRAVEL_BASE_ENDPOINT}/async"), get(get_travel_async))
        .with_state(service)
}
