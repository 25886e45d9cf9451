use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{account::AccountError, command::InvalidDate, ledger::LedgerError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Ledger(LedgerError::NotFound) => StatusCode::NOT_FOUND,
            Self::Ledger(LedgerError::Conflict) => StatusCode::BAD_REQUEST,
            Self::Ledger(LedgerError::Account(
                AccountError::InsufficientFunds | AccountError::BalanceOverflow,
            )) => StatusCode::BAD_REQUEST,
            Self::Ledger(LedgerError::Poisoned) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidDate(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(err = %self, "request failed");
        }
        json_error(status, self.to_string())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
