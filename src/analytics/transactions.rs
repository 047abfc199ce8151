//! Transaction volume report

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::average;
use crate::models::{report::TransactionReport, TransactionRecord, TransactionStatus};

/// Single pass over all transactions.
///
/// Each transaction lands in at most one of successful/failed/pending;
/// unrecognized statuses only count toward the total. Untyped transactions
/// are left out of `transactions_by_type`.
pub fn compute_transaction_report(transactions: &[TransactionRecord]) -> TransactionReport {
    let mut report = TransactionReport::default();
    let mut by_type: BTreeMap<String, i64> = BTreeMap::new();
    let mut volume = Decimal::ZERO;

    for txn in transactions {
        report.total_transactions += 1;

        match txn.status {
            Some(TransactionStatus::Successful) => report.successful_transactions += 1,
            Some(TransactionStatus::Failed) => report.failed_transactions += 1,
            Some(TransactionStatus::Pending) => report.pending_transactions += 1,
            None => {}
        }

        volume = volume.saturating_add(txn.amount_or_zero());

        if let Some(kind) = &txn.kind {
            *by_type.entry(kind.clone()).or_insert(0) += 1;
        }
    }

    report.total_transaction_volume = volume;
    report.average_transaction_amount = average(volume, report.total_transactions);
    report.transactions_by_type = by_type;
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(
        kind: Option<&str>,
        status: Option<TransactionStatus>,
        amount: i64,
    ) -> TransactionRecord {
        TransactionRecord {
            id: "t".to_string(),
            kind: kind.map(String::from),
            status,
            amount: Some(Decimal::from(amount)),
            platform_fee: None,
            fee: None,
            created_at: None,
        }
    }

    #[test]
    fn test_classifies_each_status_once() {
        let txns = vec![
            txn(Some("loan_disbursement"), Some(TransactionStatus::Successful), 5000),
            txn(Some("withdrawal"), Some(TransactionStatus::Pending), 3000),
            txn(Some("repayment"), Some(TransactionStatus::Failed), 2000),
        ];

        let report = compute_transaction_report(&txns);

        assert_eq!(report.total_transactions, 3);
        assert_eq!(report.successful_transactions, 1);
        assert_eq!(report.pending_transactions, 1);
        assert_eq!(report.failed_transactions, 1);
        assert_eq!(report.total_transaction_volume, Decimal::from(10000));
        assert_eq!(report.average_transaction_amount, Decimal::new(333333, 2));
    }

    #[test]
    fn test_by_type_skips_untyped() {
        let txns = vec![
            txn(Some("repayment"), None, 10),
            txn(Some("repayment"), None, 10),
            txn(Some("deposit"), None, 10),
            txn(None, None, 10),
        ];

        let report = compute_transaction_report(&txns);

        assert_eq!(report.total_transactions, 4);
        assert_eq!(report.transactions_by_type.get("repayment"), Some(&2));
        assert_eq!(report.transactions_by_type.get("deposit"), Some(&1));
        assert_eq!(report.transactions_by_type.values().sum::<i64>(), 3);
        assert_eq!(
            report.successful_transactions
                + report.failed_transactions
                + report.pending_transactions,
            0
        );
    }

    #[test]
    fn test_empty_snapshot_has_zero_average() {
        let report = compute_transaction_report(&[]);
        assert_eq!(report.average_transaction_amount, Decimal::ZERO);
        assert!(report.transactions_by_type.is_empty());
    }
}
