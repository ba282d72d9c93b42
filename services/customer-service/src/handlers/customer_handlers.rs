use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use common::{ErrorResponse, HealthResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{CreateCustomerRequest, CustomerResponse};
use crate::repository::{CustomerRepository, RepositoryError};

pub const CUSTOMER_BASE_ENDPOINT: &str = "/customers";

pub type DynCustomerRepository = Arc<dyn CustomerRepository>;

fn map_repo_error(err: RepositoryError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        RepositoryError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                format!("Customer not found: {}", id),
                "NOT_FOUND",
            )),
        ),
        RepositoryError::DatabaseError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(msg, "DATABASE_ERROR")),
        ),
    }
}

/// POST /customers - 顧客作成
pub async fn create_customer(
    State(repo): State<DynCustomerRepository>,
    Json(request): Json<CreateCustomerRequest>,
) -> impl IntoResponse {
    // バリデーション
    if let Err(errors) = request.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                format!("Validation failed: {}", errors),
                "VALIDATION_ERROR",
            )),
        )
            .into_response();
    }

    match repo.create(request).await {
        Ok(customer) => {
            let location = format!("{}/{}", CUSTOMER_BASE_ENDPOINT, customer.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(CustomerResponse::from(customer)),
            )
                .into_response()
        }
        Err(err) => map_repo_error(err).into_response(),
    }
}

/// GET /customers/:id - 顧客取得
pub async fn get_customer(
    State(repo): State<DynCustomerRepository>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match repo.find_by_id(id).await {
        Ok(Some(customer)) => {
            (StatusCode::OK, Json(CustomerResponse::from(customer))).into_response()
        }
        Ok(None) => map_repo_error(RepositoryError::NotFound(id)).into_response(),
        Err(err) => map_repo_error(err).into_response(),
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "customer-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub fn create_router(repo: DynCustomerRepository) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(CUSTOMER_BASE_ENDPOINT, post(create_customer))
        .route(&format!("{CUSTOMER_BASE_ENDPOINT}/:id"), get(get_customer))
        .with_state(repo)
}
