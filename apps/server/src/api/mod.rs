//! HTTP routes. Everything lives under `/api`, plus the OpenAPI document.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{config::Config, error::ErrorBody, main_lib::AppState, models};

pub mod budgets;
pub mod categories;
pub mod health;
pub mod transactions;
pub mod users;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        budgets::list_budgets,
        budgets::create_budget,
        categories::list_categories,
        categories::create_category,
        transactions::list_transactions,
        transactions::create_transaction,
    ),
    components(schemas(
        ErrorBody,
        models::HealthStatus,
        models::UserSummary,
        models::UserList,
        models::UserDetail,
        models::Budget,
        models::BudgetList,
        models::CreateBudget,
        models::Category,
        models::CategoryList,
        models::CreateCategory,
        models::Transaction,
        models::TransactionList,
        models::CreateTransaction,
    )),
    tags((name = "budgetbook"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };
    cors.allow_methods(Any).allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(users::router())
        .merge(budgets::router())
        .merge(categories::router())
        .merge(transactions::router());

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors_layer(config))
        // Router layers wrap outward, so the id is set before it is propagated.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
