use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use budgetbook_core::budgets::NewBudget;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Budget, BudgetList, BudgetQuery, CreateBudget},
};

#[utoipa::path(
    get,
    path = "/api/budgets",
    params(BudgetQuery),
    responses((status = 200, body = BudgetList), (status = 400, body = ErrorBody))
)]
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BudgetQuery>, QueryRejection>,
) -> ApiResult<Json<BudgetList>> {
    let Query(query) = query?;
    let budgets = state.budget_service.get_budgets(query.user_id)?;
    Ok(Json(BudgetList {
        budgets: budgets.into_iter().map(Budget::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/budgets",
    request_body = CreateBudget,
    responses((status = 201, body = Budget), (status = 400, body = ErrorBody))
)]
pub async fn create_budget(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateBudget>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Budget>)> {
    let Json(body) = body?;
    let new_budget = NewBudget::try_from(body)?;
    let budget = state.budget_service.create_budget(new_budget).await?;
    Ok((StatusCode::CREATED, Json(Budget::from(budget))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/budgets", get(list_budgets).post(create_budget))
}
