use thiserror::Error;

use crate::account::{Account, AccountError};

pub mod in_memory_ledger;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Customer not found.")]
    NotFound,
    #[error("Customer already exists!")]
    Conflict,
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("Ledger store is unavailable")]
    Poisoned,
}

/// Registry of accounts keyed by CPF.
///
/// Every method is a single atomic step: implementations must not let two
/// calls interleave on the same account, and must keep CPFs unique.
pub trait LedgerStore {
    fn create(&self, account: Account) -> Result<(), LedgerError>;

    /// Snapshot of the account registered under `cpf`.
    fn find(&self, cpf: &str) -> Result<Account, LedgerError>;

    /// Runs `f` against the stored account while holding exclusive access.
    /// Nothing is written back when `f` fails, so `f` must only mutate on success.
    fn modify<T, F>(&self, cpf: &str, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<T, AccountError>;

    /// Removes the account and returns the accounts left in the store.
    fn delete(&self, cpf: &str) -> Result<Vec<Account>, LedgerError>;

    fn list_all(&self) -> Result<Vec<Account>, LedgerError>;
}
