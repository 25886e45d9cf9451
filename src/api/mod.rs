//! HTTP surface. Every route except `/health` identifies the customer by the
//! `cpf` request header.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{ledger::in_memory_ledger::InMemoryLedger, operations::AccountOperations};

pub mod errors;
pub mod handlers;

pub type SharedOperations = Arc<AccountOperations<InMemoryLedger>>;

/// Router over a fresh, empty ledger.
pub fn build_app() -> Router {
    router(Arc::new(AccountOperations::new(InMemoryLedger::new())))
}

pub fn router(ops: SharedOperations) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/account",
            post(handlers::create_account)
                .get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        )
        .route("/statement", get(handlers::get_statement))
        .route("/statement/date", get(handlers::get_statement_by_date))
        .route("/deposit", post(handlers::deposit))
        .route("/withdraw", post(handlers::withdraw))
        .route("/balance", get(handlers::get_balance))
        .layer(TraceLayer::new_for_http())
        .with_state(ops)
}
