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
use budgetbook_core::transactions::{NewTransaction, TransactionFilter};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{CreateTransaction, Transaction, TransactionList, TransactionQuery},
};

#[utoipa::path(
    get,
    path = "/api/transactions",
    params(TransactionQuery),
    responses((status = 200, body = TransactionList), (status = 400, body = ErrorBody))
)]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TransactionQuery>, QueryRejection>,
) -> ApiResult<Json<TransactionList>> {
    let Query(query) = query?;
    let transactions = state
        .transaction_service
        .get_transactions(TransactionFilter::from(query))?;
    Ok(Json(TransactionList {
        transactions: transactions.into_iter().map(Transaction::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = CreateTransaction,
    responses((status = 201, body = Transaction), (status = 400, body = ErrorBody))
)]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateTransaction>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let Json(body) = body?;
    let new_transaction = NewTransaction::try_from(body)?;
    let transaction = state
        .transaction_service
        .create_transaction(new_transaction)
        .await?;
    Ok((StatusCode::CREATED, Json(Transaction::from(transaction))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/transactions",
        get(list_transactions).post(create_transaction),
    )
}
