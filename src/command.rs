use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountCommand {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAccountCommand {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepositCommand {
    pub description: String,
    pub amount: Decimal,
}

/// Withdrawals carry no description.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawCommand {
    pub amount: Decimal,
}

#[derive(Debug, Error)]
#[error("Invalid date, expected YYYY-MM-DD.")]
pub struct InvalidDate;

#[derive(Debug, Clone, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

impl StatementDateQuery {
    pub fn parse_day(&self) -> Result<NaiveDate, InvalidDate> {
        let date = self.date.as_deref().ok_or(InvalidDate)?;
        NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| InvalidDate)
    }
}
