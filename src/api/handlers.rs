use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::{
    account::{Account, Transaction},
    command::{
        CreateAccountCommand, DepositCommand, StatementDateQuery, UpdateAccountCommand,
        WithdrawCommand,
    },
    ledger::LedgerError,
};

use super::{SharedOperations, errors::ApiError};

const CPF_HEADER: &str = "cpf";

/// A request without a readable `cpf` header cannot match any customer.
fn customer_cpf(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(CPF_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Ledger(LedgerError::NotFound))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn create_account(
    State(ops): State<SharedOperations>,
    Json(body): Json<CreateAccountCommand>,
) -> Result<StatusCode, ApiError> {
    ops.create_account(body)?;
    Ok(StatusCode::CREATED)
}

pub async fn get_account(
    State(ops): State<SharedOperations>,
    headers: HeaderMap,
) -> Result<Json<Account>, ApiError> {
    let account = ops.get_account(customer_cpf(&headers)?)?;
    Ok(Json(account))
}

pub async fn update_account(
    State(ops): State<SharedOperations>,
    headers: HeaderMap,
    Json(body): Json<UpdateAccountCommand>,
) -> Result<StatusCode, ApiError> {
    ops.update_account(customer_cpf(&headers)?, body)?;
    Ok(StatusCode::CREATED)
}

pub async fn delete_account(
    State(ops): State<SharedOperations>,
    headers: HeaderMap,
) -> Result<Json<Vec<Account>>, ApiError> {
    let remaining = ops.delete_account(customer_cpf(&headers)?)?;
    Ok(Json(remaining))
}

pub async fn get_statement(
    State(ops): State<SharedOperations>,
    headers: HeaderMap,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let statement = ops.get_statement(customer_cpf(&headers)?)?;
    Ok(Json(statement))
}

pub async fn get_statement_by_date(
    State(ops): State<SharedOperations>,
    headers: HeaderMap,
    Query(query): Query<StatementDateQuery>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let cpf = customer_cpf(&headers)?;
    // an unknown customer wins over a bad date
    ops.get_account(cpf)?;
    let statement = ops.get_statement_by_date(cpf, query.parse_day()?)?;
    Ok(Json(statement))
}

pub async fn deposit(
    State(ops): State<SharedOperations>,
    headers: HeaderMap,
    Json(body): Json<DepositCommand>,
) -> Result<StatusCode, ApiError> {
    ops.deposit(customer_cpf(&headers)?, body)?;
    Ok(StatusCode::CREATED)
}

pub async fn withdraw(
    State(ops): State<SharedOperations>,
    headers: HeaderMap,
    Json(body): Json<WithdrawCommand>,
) -> Result<StatusCode, ApiError> {
    ops.withdraw(customer_cpf(&headers)?, body)?;
    Ok(StatusCode::CREATED)
}

pub async fn get_balance(
    State(ops): State<SharedOperations>,
    headers: HeaderMap,
) -> Result<Json<Decimal>, ApiError> {
    let balance = ops.get_balance(customer_cpf(&headers)?)?;
    Ok(Json(balance))
}
