//! Composite dashboard snapshot with threshold alerts

use chrono::{DateTime, FixedOffset, Utc};

use super::{revenue::successful_fee_total, round2, CalendarWindow};
use crate::models::{
    report::{Alert, AlertKind, DashboardAnalytics, DashboardOverview, RecentActivity, Trends},
    DisputeRecord, LoanAdRecord, TransactionRecord, UserRecord,
};

/// More active disputes than this raises a warning
pub const ACTIVE_DISPUTES_THRESHOLD: i64 = 5;
/// More registrations today than this raises an info alert
pub const NEW_USERS_TODAY_THRESHOLD: i64 = 10;

/// Cross-collection snapshot: totals, activity since local midnight and
/// threshold alerts. Trend rates have no historical baseline and stay zero.
pub fn compute_dashboard_analytics(
    users: &[UserRecord],
    loan_ads: &[LoanAdRecord],
    transactions: &[TransactionRecord],
    disputes: &[DisputeRecord],
    now: DateTime<FixedOffset>,
) -> DashboardAnalytics {
    let window = CalendarWindow::new(now);

    let active_disputes = disputes.iter().filter(|d| d.is_active()).count() as i64;

    let recent_activity = RecentActivity {
        new_users_today: count_today(&window, users.iter().map(|u| u.created_at)),
        loans_created_today: count_today(&window, loan_ads.iter().map(|a| a.created_at)),
        transactions_today: count_today(&window, transactions.iter().map(|t| t.created_at)),
        disputes_resolved_today: count_today(&window, disputes.iter().map(|d| d.resolved_at)),
    };

    let alerts = build_alerts(active_disputes, recent_activity.new_users_today);

    DashboardAnalytics {
        overview: DashboardOverview {
            total_users: users.len() as i64,
            total_loans: loan_ads.len() as i64,
            total_revenue: round2(successful_fee_total(transactions)),
            active_disputes,
        },
        recent_activity,
        trends: Trends::default(),
        alerts,
    }
}

fn count_today(
    window: &CalendarWindow,
    timestamps: impl Iterator<Item = Option<DateTime<Utc>>>,
) -> i64 {
    timestamps
        .filter(|ts| ts.is_some_and(|ts| window.is_today(&ts)))
        .count() as i64
}

/// Threshold alerts, always in the same order: disputes first, then
/// registrations.
pub fn build_alerts(active_disputes: i64, new_users_today: i64) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if active_disputes > ACTIVE_DISPUTES_THRESHOLD {
        alerts.push(Alert {
            kind: AlertKind::Warning,
            message: "High number of active disputes".to_string(),
            count: active_disputes,
        });
    }

    if new_users_today > NEW_USERS_TODAY_THRESHOLD {
        alerts.push(Alert {
            kind: AlertKind::Info,
            message: "Unusual spike in new user registrations".to_string(),
            count: new_users_today,
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{fixed_now, utc};
    use crate::models::{DisputeStatus, TransactionStatus};
    use rust_decimal::Decimal;

    fn user_created(ts: Option<DateTime<Utc>>) -> UserRecord {
        UserRecord {
            id: "u".to_string(),
            role: None,
            status: None,
            created_at: ts,
        }
    }

    fn dispute(
        status: Option<DisputeStatus>,
        resolved_at: Option<DateTime<Utc>>,
    ) -> DisputeRecord {
        DisputeRecord {
            id: "d".to_string(),
            status,
            resolved_at,
        }
    }

    #[test]
    fn test_alert_order() {
        let alerts = build_alerts(6, 11);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::Warning);
        assert_eq!(alerts[0].count, 6);
        assert_eq!(alerts[1].kind, AlertKind::Info);
        assert_eq!(alerts[1].count, 11);
    }

    #[test]
    fn test_no_alerts_below_thresholds() {
        assert!(build_alerts(3, 2).is_empty());
        // Thresholds are exclusive
        assert!(build_alerts(5, 10).is_empty());
        assert_eq!(build_alerts(0, 11).len(), 1);
    }

    #[test]
    fn test_overview_and_recent_activity() {
        let today = utc(2024, 6, 15, 8, 0);
        let yesterday = utc(2024, 6, 14, 8, 0);

        let users = vec![
            user_created(Some(today)),
            user_created(Some(yesterday)),
            user_created(None),
        ];
        let ads = vec![LoanAdRecord {
            id: "a".to_string(),
            status: None,
            amount: None,
            created_at: Some(today),
        }];
        let transactions = vec![
            TransactionRecord {
                id: "t1".to_string(),
                kind: None,
                status: Some(TransactionStatus::Successful),
                amount: None,
                platform_fee: Some(Decimal::new(12345, 3)),
                fee: None,
                created_at: Some(yesterday),
            },
            TransactionRecord {
                id: "t2".to_string(),
                kind: None,
                status: Some(TransactionStatus::Failed),
                amount: None,
                platform_fee: Some(Decimal::from(99)),
                fee: None,
                created_at: Some(today),
            },
        ];
        let disputes = vec![
            dispute(Some(DisputeStatus::Open), None),
            dispute(Some(DisputeStatus::InProgress), None),
            dispute(Some(DisputeStatus::Escalated), None),
            dispute(Some(DisputeStatus::Resolved), Some(today)),
            dispute(Some(DisputeStatus::Resolved), Some(yesterday)),
            dispute(None, None),
        ];

        let analytics =
            compute_dashboard_analytics(&users, &ads, &transactions, &disputes, fixed_now());

        assert_eq!(analytics.overview.total_users, 3);
        assert_eq!(analytics.overview.total_loans, 1);
        assert_eq!(analytics.overview.total_revenue, Decimal::new(1235, 2));
        assert_eq!(analytics.overview.active_disputes, 3);
        assert_eq!(analytics.recent_activity.new_users_today, 1);
        assert_eq!(analytics.recent_activity.loans_created_today, 1);
        assert_eq!(analytics.recent_activity.transactions_today, 1);
        assert_eq!(analytics.recent_activity.disputes_resolved_today, 1);
        assert_eq!(analytics.trends, Trends::default());
        assert!(analytics.alerts.is_empty());
    }

    #[test]
    fn test_registration_spike_raises_alert() {
        let users: Vec<_> = (0..11).map(|_| user_created(Some(utc(2024, 6, 15, 9, 0)))).collect();
        let disputes: Vec<_> = (0..6).map(|_| dispute(Some(DisputeStatus::Open), None)).collect();

        let analytics = compute_dashboard_analytics(&users, &[], &[], &disputes, fixed_now());

        let kinds: Vec<_> = analytics.alerts.iter().map(|a| (a.kind, a.count)).collect();
        assert_eq!(kinds, vec![(AlertKind::Warning, 6), (AlertKind::Info, 11)]);
    }
}
