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
use budgetbook_core::categories::NewCategory;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Category, CategoryList, CategoryQuery, CreateCategory},
};

#[utoipa::path(
    get,
    path = "/api/categories",
    params(CategoryQuery),
    responses((status = 200, body = CategoryList), (status = 400, body = ErrorBody))
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> ApiResult<Json<CategoryList>> {
    let Query(query) = query?;
    let categories = state.category_service.get_categories(query.budget_id)?;
    Ok(Json(CategoryList {
        categories: categories.into_iter().map(Category::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategory,
    responses((status = 201, body = Category), (status = 400, body = ErrorBody))
)]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateCategory>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let Json(body) = body?;
    let new_category = NewCategory::try_from(body)?;
    let category = state.category_service.create_category(new_category).await?;
    Ok((StatusCode::CREATED, Json(Category::from(category))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/categories", get(list_categories).post(create_category))
}
