use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    command::{DepositCommand, WithdrawCommand},
    statement,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: Decimal,
    pub created_at: DateTime<Local>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds!")]
    InsufficientFunds,
    #[error("Balance out of range!")]
    BalanceOverflow,
}

/// Customer account. `statement` is append-only, the balance is always
/// derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    id: Uuid,
    cpf: String,
    name: String,
    statement: Vec<Transaction>,
}

impl Account {
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf: cpf.into(),
            name: name.into(),
            statement: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statement(&self) -> &[Transaction] {
        &self.statement
    }

    pub fn balance(&self) -> Result<Decimal, AccountError> {
        statement::balance(&self.statement).ok_or(AccountError::BalanceOverflow)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn apply(&mut self, transaction: Transaction) {
        self.statement.push(transaction);
    }

    /// Rejects a credit that would push the balance out of range.
    pub fn handle_deposit(
        &self,
        command: DepositCommand,
        now: DateTime<Local>,
    ) -> Result<Transaction, AccountError> {
        self.balance()?
            .checked_add(command.amount)
            .ok_or(AccountError::BalanceOverflow)?;
        Ok(Transaction {
            description: Some(command.description),
            amount: command.amount,
            created_at: now,
            kind: TransactionKind::Credit,
        })
    }

    pub fn handle_withdraw(
        &self,
        command: WithdrawCommand,
        now: DateTime<Local>,
    ) -> Result<Transaction, AccountError> {
        let balance = self.balance()?;
        if balance < command.amount {
            return Err(AccountError::InsufficientFunds);
        }
        // negative amounts are accepted and act as credits
        balance
            .checked_sub(command.amount)
            .ok_or(AccountError::BalanceOverflow)?;
        Ok(Transaction {
            description: None,
            amount: command.amount,
            created_at: now,
            kind: TransactionKind::Debit,
        })
    }
}
