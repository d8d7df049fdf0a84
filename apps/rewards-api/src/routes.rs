//! # HTTP Routes
//!
//! ```text
//! POST /api/customers                                         → 201 Customer
//! GET  /api/customers/{customerId}/rewards?startDate&endDate  → 200 RewardSummary
//! GET  /health                                                → 200 / 503
//!
//! GET  /swagger-ui                                            → Swagger UI
//! GET  /api-docs/openapi.json                                 → OpenAPI document
//! ```

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use rewards_core::{
    Customer, CustomerDraft, MonthlyReward, RewardSummary, Transaction, TransactionDraft,
};

use crate::error::{ApiError, ErrorCode};
use crate::service::RewardsService;

/// Message for a create request whose body can't be read as a customer.
pub const MISSING_CUSTOMER_DATA: &str = "Customer data is missing";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: RewardsService,
}

impl AppState {
    pub fn new(service: RewardsService) -> Self {
        AppState { service }
    }
}

/// OpenAPI document for every route below.
#[derive(OpenApi)]
#[openapi(
    paths(create_customer, calculate_rewards, health),
    components(schemas(
        CustomerDraft,
        TransactionDraft,
        Customer,
        Transaction,
        RewardSummary,
        MonthlyReward,
        ApiError,
        ErrorCode,
        HealthStatus
    )),
    tags((
        name = "Customer Rewards API",
        description = "Customers, their transactions and reward points"
    ))
)]
pub struct ApiDoc;

/// Builds the application router, Swagger UI included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", post(create_customer))
        .route(
            "/api/customers/{customer_id}/rewards",
            get(calculate_rewards),
        )
        .route("/health", get(health))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

// =============================================================================
// Handlers
// =============================================================================

/// Adds a new customer with its transactions.
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customer Rewards API",
    request_body = CustomerDraft,
    responses(
        (status = 201, description = "Customer and transactions stored", body = Customer),
        (status = 400, description = "Missing or invalid customer data", body = ApiError),
        (status = 500, description = "Database failure", body = ApiError)
    )
)]
async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<Option<CustomerDraft>>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Unreadable customer body");
            return Err(ApiError::validation(MISSING_CUSTOMER_DATA));
        }
    };

    let customer = state.service.create_customer(draft).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Query string of the rewards endpoint. Dates stay raw text until validated.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RewardParams {
    /// First day of the window, `yyyy-MM-dd`, inclusive
    pub start_date: Option<String>,
    /// Last day of the window, `yyyy-MM-dd`, inclusive
    pub end_date: Option<String>,
}

/// Calculates the reward points a customer earned within a date range.
#[utoipa::path(
    get,
    path = "/api/customers/{customer_id}/rewards",
    tag = "Customer Rewards API",
    params(
        ("customer_id" = i64, Path, description = "Positive customer id"),
        RewardParams
    ),
    responses(
        (status = 200, description = "Points per month and in total", body = RewardSummary),
        (status = 400, description = "Invalid id, dates or query string", body = ApiError),
        (status = 404, description = "No transactions in the window", body = ApiError),
        (status = 500, description = "Database failure", body = ApiError)
    )
)]
async fn calculate_rewards(
    State(state): State<AppState>,
    customer_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<RewardParams>, QueryRejection>,
) -> Result<Json<RewardSummary>, ApiError> {
    // a non-numeric id is reported the same way as a non-positive one
    let customer_id = match customer_id {
        Ok(Path(id)) => Some(id),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Unparseable customer id");
            None
        }
    };

    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Unreadable reward query string");
            return Err(ApiError::validation(rejection.body_text()));
        }
    };

    let summary = state
        .service
        .calculate_rewards(
            customer_id,
            params.start_date.as_deref(),
            params.end_date.as_deref(),
        )
        .await?;

    Ok(Json(summary))
}

#[derive(Debug, Serialize, ToSchema)]
struct HealthStatus {
    /// `ok` or `degraded`
    #[schema(value_type = String)]
    status: &'static str,
    database: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Customer Rewards API",
    responses(
        (status = 200, description = "Database reachable", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = HealthStatus)
    )
)]
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.service.is_healthy().await;
    let (status, label) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };
    (
        status,
        Json(HealthStatus {
            status: label,
            database,
        }),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::{FailingStore, MemoryStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use rewards_db::{Database, DbConfig};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn sqlite_app() -> Router {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        router(AppState::new(RewardsService::new(Arc::new(db))))
    }

    fn memory_app() -> Router {
        router(AppState::new(RewardsService::new(Arc::new(
            MemoryStore::default(),
        ))))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/customers")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    const SAM: &str =
        r#"{"customerName": "Sam", "transaction": [{"amount": 120.0, "date": "2024-04-15"}]}"#;

    #[tokio::test]
    async fn test_create_customer() {
        let app = sqlite_app().await;
        let (status, body) = send(&app, post_json(SAM)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["customerName"], "Sam");
        assert!(body["customerId"].as_i64().unwrap() > 0);
        assert_eq!(body["transaction"][0]["amount"], json!(120.0));
        assert_eq!(body["transaction"][0]["date"], "2024-04-15");
        assert!(body["transaction"][0]["transactionId"].as_i64().unwrap() > 0);
        assert!(body["transaction"][0].get("customerId").is_none());
    }

    #[tokio::test]
    async fn test_end_to_end_rewards() {
        let app = sqlite_app().await;
        let (_, created) = send(&app, post_json(SAM)).await;
        let id = created["customerId"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            get(&format!(
                "/api/customers/{id}/rewards?startDate=2024-01-01&endDate=2024-12-31"
            )),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Total Rewards"], 90);
        assert_eq!(
            body["Rewards Breakdown"],
            json!([{"month": "APRIL", "points": 90}])
        );
        assert_eq!(body["Customer Details"]["customerName"], "Sam");
    }

    #[tokio::test]
    async fn test_blank_name_and_empty_list_reports_name() {
        let app = memory_app();
        let (status, body) =
            send(&app, post_json(r#"{"customerName": "  ", "transaction": []}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "Customer name cannot be null or blank.");
    }

    #[tokio::test]
    async fn test_empty_transaction_list() {
        let app = memory_app();
        let (status, body) =
            send(&app, post_json(r#"{"customerName": "Sam", "transaction": []}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Transaction list cannot be null or empty.");
    }

    #[tokio::test]
    async fn test_non_positive_amount() {
        let app = memory_app();
        let (status, body) = send(
            &app,
            post_json(
                r#"{"customerName": "Sam", "transaction": [{"amount": -5, "date": "2024-04-15"}]}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Transaction amount must be greater than zero.");
    }

    #[tokio::test]
    async fn test_null_body() {
        let app = memory_app();
        let (status, body) = send(&app, post_json("null")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Customer cannot be null.");
    }

    #[tokio::test]
    async fn test_missing_or_malformed_body() {
        let app = memory_app();

        let (status, body) = send(&app, post_json("")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], MISSING_CUSTOMER_DATA);

        let (status, body) = send(&app, post_json("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], MISSING_CUSTOMER_DATA);
    }

    #[tokio::test]
    async fn test_zero_customer_id() {
        let app = memory_app();
        let (status, body) = send(
            &app,
            get("/api/customers/0/rewards?startDate=2024-12-31&endDate=2024-01-01"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Customer ID must be a positive number.");
    }

    #[tokio::test]
    async fn test_non_numeric_customer_id() {
        let app = memory_app();
        let (status, body) = send(
            &app,
            get("/api/customers/abc/rewards?startDate=2024-01-01&endDate=2024-12-31"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Customer ID must be a positive number.");
    }

    #[tokio::test]
    async fn test_inverted_dates() {
        let app = memory_app();
        let (status, body) = send(
            &app,
            get("/api/customers/1/rewards?startDate=2024-12-31&endDate=2024-01-01"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Start date cannot be after end date.");
    }

    #[tokio::test]
    async fn test_missing_and_malformed_dates() {
        let app = memory_app();

        let (status, body) =
            send(&app, get("/api/customers/1/rewards?startDate=2024-01-01")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Start date and end date cannot be null.");

        let (status, body) = send(
            &app,
            get("/api/customers/1/rewards?startDate=01/01/2024&endDate=2024-12-31"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Invalid date format for startDate: '01/01/2024'. Expected yyyy-MM-dd."
        );
    }

    #[tokio::test]
    async fn test_no_transactions_is_404() {
        let app = memory_app();
        let (_, created) = send(&app, post_json(SAM)).await;
        let id = created["customerId"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            get(&format!(
                "/api/customers/{id}/rewards?startDate=2023-01-01&endDate=2023-12-31"
            )),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(
            body["message"],
            format!("No transactions found for customer ID: {id}")
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        let app = router(AppState::new(RewardsService::new(Arc::new(FailingStore))));
        let (status, body) = send(
            &app,
            get("/api/customers/1/rewards?startDate=2024-01-01&endDate=2024-12-31"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DATABASE_ERROR");
        assert_eq!(body["message"], "Database operation failed");
    }

    #[tokio::test]
    async fn test_sub_cent_amounts_are_kept() {
        let app = sqlite_app().await;
        let (status, body) = send(
            &app,
            post_json(
                r#"{"customerName": "Sam", "transaction": [
                    {"amount": 120.129, "date": "2024-04-15"},
                    {"amount": 0.004, "date": "2024-04-16"}
                ]}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["transaction"][0]["amount"], json!(120.129));
        assert_eq!(body["transaction"][1]["amount"], json!(0.004));

        let id = body["customerId"].as_i64().unwrap();
        let (status, body) = send(
            &app,
            get(&format!(
                "/api/customers/{id}/rewards?startDate=2024-04-01&endDate=2024-04-30"
            )),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Total Rewards"], 90);
        assert_eq!(
            body["Customer Details"]["transaction"][0]["amount"],
            json!(120.129)
        );
    }

    #[tokio::test]
    async fn test_unreadable_query_string_is_validation_error() {
        let app = memory_app();
        // the same key twice can't fill a single Option<String>
        let uri = "/api/customers/1/rewards\
                   ?startDate=2024-01-01&startDate=2024-02-01&endDate=2024-12-31";
        let (status, body) = send(&app, get(uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("startDate"));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_routes() {
        let (status, body) = send(&memory_app(), get("/api-docs/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        let paths = body["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/customers"));
        assert!(paths.contains_key("/api/customers/{customer_id}/rewards"));
        assert!(paths.contains_key("/health"));
        assert!(paths["/api/customers"].get("post").is_some());

        let schemas = body["components"]["schemas"].as_object().unwrap();
        for name in ["CustomerDraft", "Customer", "RewardSummary", "ApiError"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&sqlite_app().await, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "database": true}));

        let app = router(AppState::new(RewardsService::new(Arc::new(FailingStore))));
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database"], false);
    }
}
