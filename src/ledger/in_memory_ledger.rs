use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::account::{Account, AccountError};

use super::{LedgerError, LedgerStore};

/// Accounts in creation order behind a single lock.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Account>>, LedgerError> {
        self.accounts.read().map_err(|_| LedgerError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Account>>, LedgerError> {
        self.accounts.write().map_err(|_| LedgerError::Poisoned)
    }

    fn position(accounts: &[Account], cpf: &str) -> Option<usize> {
        accounts.iter().position(|acc| acc.cpf() == cpf)
    }
}

impl LedgerStore for InMemoryLedger {
    fn create(&self, account: Account) -> Result<(), LedgerError> {
        let mut accounts = self.write()?;
        if Self::position(&accounts, account.cpf()).is_some() {
            return Err(LedgerError::Conflict);
        }
        accounts.push(account);
        Ok(())
    }

    fn find(&self, cpf: &str) -> Result<Account, LedgerError> {
        let accounts = self.read()?;
        Self::position(&accounts, cpf)
            .map(|idx| accounts[idx].clone())
            .ok_or(LedgerError::NotFound)
    }

    fn modify<T, F>(&self, cpf: &str, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<T, AccountError>,
    {
        let mut accounts = self.write()?;
        let idx = Self::position(&accounts, cpf).ok_or(LedgerError::NotFound)?;
        Ok(f(&mut accounts[idx])?)
    }

    fn delete(&self, cpf: &str) -> Result<Vec<Account>, LedgerError> {
        let mut accounts = self.write()?;
        let idx = Self::position(&accounts, cpf).ok_or(LedgerError::NotFound)?;
        accounts.remove(idx);
        Ok(accounts.clone())
    }

    fn list_all(&self) -> Result<Vec<Account>, LedgerError> {
        Ok(self.read()?.clone())
    }
}
