use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::account::{Transaction, TransactionKind};

/// Credits minus debits, starting from zero. `None` when the running total
/// leaves the range of [`Decimal`].
pub fn balance(transactions: &[Transaction]) -> Option<Decimal> {
    transactions
        .iter()
        .try_fold(Decimal::ZERO, |acc, tx| match tx.kind {
            TransactionKind::Credit => acc.checked_add(tx.amount),
            TransactionKind::Debit => acc.checked_sub(tx.amount),
        })
}

/// Transactions created on `day` (local calendar date, time of day ignored),
/// in their original order.
pub fn filter_by_date(transactions: &[Transaction], day: NaiveDate) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.created_at.date_naive() == day)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use proptest::prelude::*;
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn tx(kind: TransactionKind, amount: u32, (y, m, d, h): (i32, u32, u32, u32)) -> Transaction {
        Transaction {
            description: None,
            amount: Decimal::from_u32(amount).unwrap(),
            created_at: Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
            kind,
        }
    }

    #[test]
    fn empty_balance_is_zero() {
        assert_eq!(balance(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn balance_of_mixed_transactions() {
        let txs = vec![
            tx(TransactionKind::Credit, 1000, (2024, 3, 1, 9)),
            tx(TransactionKind::Debit, 300, (2024, 3, 1, 10)),
            tx(TransactionKind::Credit, 50, (2024, 3, 2, 11)),
        ];
        assert_eq!(balance(&txs), Decimal::from_u32(750));
    }

    #[test]
    fn balance_out_of_range_is_none() {
        let when = (2024, 3, 1, 12);
        let mut big = tx(TransactionKind::Credit, 0, when);
        big.amount = Decimal::MAX;
        let txs = vec![big.clone(), big.clone()];
        assert_eq!(balance(&txs), None);

        big.kind = TransactionKind::Debit;
        let txs = vec![big.clone(), big];
        assert_eq!(balance(&txs), None);
    }

    #[test]
    fn filter_by_date_keeps_only_that_day_in_order() {
        let txs = vec![
            tx(TransactionKind::Credit, 1, (2024, 3, 1, 9)),
            tx(TransactionKind::Credit, 2, (2024, 3, 2, 8)),
            tx(TransactionKind::Debit, 3, (2024, 3, 3, 12)),
            tx(TransactionKind::Credit, 4, (2024, 3, 2, 23)),
            tx(TransactionKind::Debit, 5, (2024, 3, 2, 1)),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let filtered = filter_by_date(&txs, day);
        let amounts: Vec<_> = filtered.iter().map(|tx| tx.amount).collect();
        assert_eq!(
            amounts,
            [2, 4, 5].map(|a| Decimal::from_u32(a).unwrap()).to_vec()
        );

        let nothing = filter_by_date(&txs, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        assert!(nothing.is_empty());
    }

    proptest! {
        #[test]
        fn balance_is_credits_minus_debits(
            credits in prop::collection::vec(0u32..1_000_000, 0..20),
            debits in prop::collection::vec(0u32..1_000_000, 0..20),
        ) {
            let when = (2024, 3, 1, 12);
            let txs: Vec<_> = credits
                .iter()
                .map(|a| tx(TransactionKind::Credit, *a, when))
                .chain(debits.iter().map(|a| tx(TransactionKind::Debit, *a, when)))
                .collect();
            let expected = credits.iter().map(|a| i64::from(*a)).sum::<i64>()
                - debits.iter().map(|a| i64::from(*a)).sum::<i64>();
            prop_assert_eq!(balance(&txs), Some(Decimal::from(expected)));
        }
    }
}
