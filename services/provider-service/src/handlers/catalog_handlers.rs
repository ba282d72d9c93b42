use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use common::{ErrorResponse, HealthResponse};
use std::sync::Arc;

use crate::domain::CatalogItem;
use crate::repository::RepositoryError;
use crate::service::{CatalogService, ProviderServices};

pub type SharedCatalogService<T> = Arc<CatalogService<T>>;

fn map_repo_error(err: RepositoryError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        RepositoryError::DatabaseError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(msg, "DATABASE_ERROR")),
        ),
    }
}

/// GET /{hotels,flights,rentalcars} - 一覧取得
pub async fn list_items<T: CatalogItem>(
    State(service): State<SharedCatalogService<T>>,
) -> impl IntoResponse {
    match service.find_all().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(err) => map_repo_error(err).into_response(),
    }
}

/// POST /{hotels,flights,rentalcars} - 登録
pub async fn create_item<T: CatalogItem>(
    State(service): State<SharedCatalogService<T>>,
    Json(item): Json<T>,
) -> impl IntoResponse {
    // バリデーション
    if let Err(errors) = item.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                format!("Validation failed: {}", errors),
                "VALIDATION_ERROR",
            )),
        )
            .into_response();
    }

    match service.save(item).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(err) => map_repo_error(err).into_response(),
    }
}

/// 1種別分のルート（`T::PATH` に GET/POST）
pub fn catalog_routes<T: CatalogItem>(service: SharedCatalogService<T>) -> Router {
    Router::new()
        .route(T::PATH, get(list_items::<T>).post(create_item::<T>))
        .with_state(service)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "provider-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub fn create_router(services: ProviderServices) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(catalog_routes(services.hotels))
        .merge(catalog_routes(services.flights))
        .merge(catalog_routes(services.rental_cars))
}
