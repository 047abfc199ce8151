//! Fee revenue report

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

use super::{round2, sum_saturating, CalendarWindow};
use crate::models::{
    report::{MonthlyRevenue, RevenueReport},
    TransactionRecord,
};

/// Number of monthly buckets kept in `revenue_by_month`
pub const REVENUE_MONTHS: usize = 12;

/// Sum of fees over successful transactions
pub fn successful_fee_total(transactions: &[TransactionRecord]) -> Decimal {
    sum_saturating(
        transactions
            .iter()
            .filter(|t| t.is_successful())
            .map(TransactionRecord::revenue_fee),
    )
}

/// Single pass over all transactions; only successful ones earn revenue.
///
/// The scalar totals are rounded to cents; monthly buckets carry the exact
/// fee sums. Buckets are sorted by `YYYY-MM` and only the latest
/// [`REVENUE_MONTHS`] are returned. Older buckets are dropped, not folded
/// into the kept ones. Interest revenue and growth are not tracked and stay
/// at zero.
pub fn compute_revenue_report(
    transactions: &[TransactionRecord],
    now: DateTime<FixedOffset>,
) -> RevenueReport {
    let window = CalendarWindow::new(now);
    let mut total = Decimal::ZERO;
    let mut this_month = Decimal::ZERO;
    let mut this_year = Decimal::ZERO;
    let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.is_successful()) {
        let fee = txn.revenue_fee();
        total = total.saturating_add(fee);

        if let Some(created) = txn.created_at {
            if window.is_current_month(&created) {
                this_month = this_month.saturating_add(fee);
            }
            if window.is_current_year(&created) {
                this_year = this_year.saturating_add(fee);
            }
            let bucket = by_month.entry(window.month_key(&created)).or_default();
            *bucket = bucket.saturating_add(fee);
        }
    }

    let skip = by_month.len().saturating_sub(REVENUE_MONTHS);
    let revenue_by_month = by_month
        .into_iter()
        .skip(skip)
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect();

    RevenueReport {
        total_revenue: round2(total),
        monthly_revenue: round2(this_month),
        revenue_this_year: round2(this_year),
        platform_fees: round2(total),
        interest_revenue: Decimal::ZERO,
        revenue_growth: 0.0,
        revenue_by_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{fixed_now, utc};
    use crate::models::TransactionStatus;

    fn txn(
        status: TransactionStatus,
        platform_fee: Option<i64>,
        fee: Option<i64>,
        created: Option<(i32, u32)>,
    ) -> TransactionRecord {
        TransactionRecord {
            id: "t".to_string(),
            kind: None,
            status: Some(status),
            amount: None,
            platform_fee: platform_fee.map(Decimal::from),
            fee: fee.map(Decimal::from),
            created_at: created.map(|(y, m)| utc(y, m, 10, 12, 0)),
        }
    }

    #[test]
    fn test_only_successful_transactions_earn() {
        let txns = vec![
            txn(TransactionStatus::Successful, Some(100), None, Some((2024, 1))),
            txn(TransactionStatus::Pending, None, Some(30), Some((2024, 1))),
            txn(TransactionStatus::Failed, Some(40), None, Some((2024, 1))),
        ];

        let report = compute_revenue_report(&txns, fixed_now());

        assert_eq!(report.total_revenue, Decimal::from(100));
        assert_eq!(report.platform_fees, report.total_revenue);
        assert_eq!(report.interest_revenue, Decimal::ZERO);
        assert_eq!(report.revenue_growth, 0.0);
    }

    #[test]
    fn test_month_and_year_windows() {
        let txns = vec![
            txn(TransactionStatus::Successful, Some(10), None, Some((2024, 6))),
            txn(TransactionStatus::Successful, Some(20), None, Some((2024, 2))),
            txn(TransactionStatus::Successful, Some(40), None, Some((2023, 6))),
            // No timestamp: all-time total only
            txn(TransactionStatus::Successful, None, Some(5), None),
        ];

        let report = compute_revenue_report(&txns, fixed_now());

        assert_eq!(report.total_revenue, Decimal::from(75));
        assert_eq!(report.monthly_revenue, Decimal::from(10));
        assert_eq!(report.revenue_this_year, Decimal::from(30));
        let months: Vec<&str> = report
            .revenue_by_month
            .iter()
            .map(|m| m.month.as_str())
            .collect();
        assert_eq!(months, vec!["2023-06", "2024-02", "2024-06"]);
    }

    #[test]
    fn test_buckets_sum_to_total_within_a_year() {
        let txns: Vec<_> = (1..=6)
            .map(|m| {
                let fee = Some(m as i64 * 10);
                txn(TransactionStatus::Successful, fee, None, Some((2024, m)))
            })
            .collect();

        let report = compute_revenue_report(&txns, fixed_now());

        let bucket_sum: Decimal = report.revenue_by_month.iter().map(|m| m.revenue).sum();
        assert_eq!(bucket_sum, report.total_revenue);
    }

    #[test]
    fn test_keeps_latest_twelve_months() {
        // 2023-01 .. 2024-06: 18 months
        let txns: Vec<_> = (0..18)
            .map(|i| {
                let year = 2023 + i / 12;
                let month = (i % 12) as u32 + 1;
                txn(TransactionStatus::Successful, Some(1), None, Some((year, month)))
            })
            .collect();

        let report = compute_revenue_report(&txns, fixed_now());

        assert_eq!(report.revenue_by_month.len(), REVENUE_MONTHS);
        assert_eq!(report.revenue_by_month.first().unwrap().month, "2023-07");
        assert_eq!(report.revenue_by_month.last().unwrap().month, "2024-06");
        // Dropped buckets still count toward the all-time total
        assert_eq!(report.total_revenue, Decimal::from(18));
        assert!(report.revenue_by_month.iter().all(|m| m.revenue == Decimal::ONE));
    }

    #[test]
    fn test_totals_are_rounded_buckets_are_exact() {
        let mut t = txn(TransactionStatus::Successful, None, None, Some((2024, 6)));
        t.platform_fee = Some(Decimal::new(1005, 3));

        let report = compute_revenue_report(&[t], fixed_now());

        assert_eq!(report.total_revenue, Decimal::new(101, 2));
        assert_eq!(report.monthly_revenue, Decimal::new(101, 2));
        assert_eq!(report.revenue_by_month[0].revenue, Decimal::new(1005, 3));
    }

    #[test]
    fn test_sub_cent_fees_in_separate_months_sum_to_total() {
        let txns: Vec<_> = [1, 2]
            .into_iter()
            .map(|m| {
                let mut t = txn(TransactionStatus::Successful, None, None, Some((2024, m)));
                t.platform_fee = Some(Decimal::new(5, 3));
                t
            })
            .collect();

        let report = compute_revenue_report(&txns, fixed_now());

        let bucket_sum: Decimal = report.revenue_by_month.iter().map(|m| m.revenue).sum();
        assert_eq!(report.revenue_by_month.len(), 2);
        assert_eq!(report.total_revenue, Decimal::new(1, 2));
        assert_eq!(bucket_sum, report.total_revenue);
    }

    #[test]
    fn test_huge_fees_saturate() {
        let mut t = txn(TransactionStatus::Successful, None, None, Some((2024, 6)));
        t.platform_fee = Some(Decimal::from_scientific("5e28").unwrap());

        let report = compute_revenue_report(&[t.clone(), t], fixed_now());

        assert_eq!(report.total_revenue, Decimal::MAX);
        assert_eq!(report.revenue_by_month[0].revenue, Decimal::MAX);
    }
}
