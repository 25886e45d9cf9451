use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{
    account::{Account, Transaction},
    command::{CreateAccountCommand, DepositCommand, UpdateAccountCommand, WithdrawCommand},
    ledger::{LedgerError, LedgerStore},
    statement,
};

/// Use cases exposed over HTTP. Each call is a single step against the store.
#[derive(Debug, Default)]
pub struct AccountOperations<S> {
    store: S,
}

impl<S> AccountOperations<S>
where
    S: LedgerStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_account(&self, command: CreateAccountCommand) -> Result<(), LedgerError> {
        let account = Account::new(command.cpf, command.name);
        let (id, cpf) = (account.id(), account.cpf().to_string());
        match self.store.create(account) {
            Ok(()) => {
                info!(%id, %cpf, "account created");
                Ok(())
            }
            Err(err) => {
                warn!(%cpf, %err, "account not created");
                Err(err)
            }
        }
    }

    /// Full record, statement included.
    pub fn get_account(&self, cpf: &str) -> Result<Account, LedgerError> {
        debug!(%cpf, "get account");
        self.store.find(cpf)
    }

    pub fn update_account(
        &self,
        cpf: &str,
        command: UpdateAccountCommand,
    ) -> Result<(), LedgerError> {
        self.store.modify(cpf, |acc| {
            acc.rename(command.name);
            Ok(())
        })?;
        info!(%cpf, "account updated");
        Ok(())
    }

    /// Returns the accounts that remain after the removal.
    pub fn delete_account(&self, cpf: &str) -> Result<Vec<Account>, LedgerError> {
        let remaining = self.store.delete(cpf)?;
        info!(%cpf, remaining = remaining.len(), "account deleted");
        Ok(remaining)
    }

    pub fn deposit(&self, cpf: &str, command: DepositCommand) -> Result<(), LedgerError> {
        let amount = command.amount;
        let result = self.store.modify(cpf, |acc| {
            let tx = acc.handle_deposit(command, Local::now())?;
            acc.apply(tx);
            Ok(())
        });
        match &result {
            Ok(()) => info!(%cpf, %amount, "deposit applied"),
            Err(LedgerError::Account(err)) => warn!(%cpf, %amount, %err, "deposit rejected"),
            Err(_) => {}
        }
        result
    }

    pub fn withdraw(&self, cpf: &str, command: WithdrawCommand) -> Result<(), LedgerError> {
        let amount = command.amount;
        let result = self.store.modify(cpf, |acc| {
            let tx = acc.handle_withdraw(command, Local::now())?;
            acc.apply(tx);
            Ok(())
        });
        match &result {
            Ok(()) => info!(%cpf, %amount, "withdrawal applied"),
            Err(LedgerError::Account(err)) => warn!(%cpf, %amount, %err, "withdrawal rejected"),
            Err(_) => {}
        }
        result
    }

    pub fn get_balance(&self, cpf: &str) -> Result<Decimal, LedgerError> {
        let account = self.store.find(cpf)?;
        let balance = account.balance()?;
        debug!(%cpf, %balance, "get balance");
        Ok(balance)
    }

    pub fn get_statement(&self, cpf: &str) -> Result<Vec<Transaction>, LedgerError> {
        debug!(%cpf, "get statement");
        Ok(self.store.find(cpf)?.statement().to_vec())
    }

    pub fn get_statement_by_date(
        &self,
        cpf: &str,
        day: NaiveDate,
    ) -> Result<Vec<Transaction>, LedgerError> {
        debug!(%cpf, %day, "get statement by date");
        let account = self.store.find(cpf)?;
        Ok(statement::filter_by_date(account.statement(), day))
    }
}
