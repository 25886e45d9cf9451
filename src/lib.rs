/// Customer account, its transactions, and the withdraw admission rule.
/// Transactions are produced by handling commands and then applied.
pub mod account;

/// Commands (request bodies) that are later executed against an [`account`].
pub mod command;

/// Balance and date-filtered views over a statement. No state.
pub mod statement;

/// Account registry interface, plus "in memory" implementation.
///
/// NOTE: the trait is the seam for swapping the in-memory registry for
/// something durable later on.
pub mod ledger;

/// Use cases, one per externally visible action.
pub mod operations;

/// HTTP transport: router, handlers and error mapping.
pub mod api;

pub mod config;

pub mod observability;
