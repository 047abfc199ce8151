//! Aggregate report shapes returned by the reporting endpoints.
//!
//! Reports are recomputed on every request and never persisted. Currency
//! values are decimals serialized as JSON numbers.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Which report a computation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Users,
    Loans,
    Transactions,
    Revenue,
    Dashboard,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReportKind::Users => "users report",
            ReportKind::Loans => "loans report",
            ReportKind::Transactions => "transactions report",
            ReportKind::Revenue => "revenue report",
            ReportKind::Dashboard => "dashboard analytics",
        };
        write!(f, "{}", label)
    }
}

/// Success envelope wrapping every report
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[aliases(
    UserReportResponse = ReportEnvelope<UserReport>,
    LoanReportResponse = ReportEnvelope<LoanReport>,
    TransactionReportResponse = ReportEnvelope<TransactionReport>,
    RevenueReportResponse = ReportEnvelope<RevenueReport>,
    DashboardAnalyticsResponse = ReportEnvelope<DashboardAnalytics>
)]
pub struct ReportEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ReportEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub total_users: i64,
    pub active_users: i64,
    pub suspended_users: i64,
    pub borrowers: i64,
    pub lenders: i64,
    /// Users created during the current calendar month
    pub new_users_this_month: i64,
    pub users_by_role: UsersByRole,
    pub users_by_status: UsersByStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct UsersByRole {
    pub admin: i64,
    pub borrower: i64,
    pub lender: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct UsersByStatus {
    pub active: i64,
    pub suspended: i64,
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanReport {
    pub total_loans: i64,
    pub active_loans: i64,
    /// Loan ads in the `closed` state
    pub completed_loans: i64,
    /// Always zero: defaults are not tracked
    pub defaulted_loans: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_loan_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub average_loan_amount: Decimal,
    pub pending_approvals: i64,
    pub loans_by_status: LoansByStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct LoansByStatus {
    pub pending: i64,
    pub approved: i64,
    pub active: i64,
    pub rejected: i64,
    pub completed: i64,
}

impl LoansByStatus {
    pub fn total(&self) -> i64 {
        self.pending + self.approved + self.active + self.rejected + self.completed
    }
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReport {
    pub total_transactions: i64,
    pub successful_transactions: i64,
    pub failed_transactions: i64,
    pub pending_transactions: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_transaction_volume: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub average_transaction_amount: Decimal,
    /// Count per transaction type; untyped transactions are not listed
    pub transactions_by_type: BTreeMap<String, i64>,
}

// ---------------------------------------------------------------------------
// Revenue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
    /// Revenue of the current calendar month
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub monthly_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub revenue_this_year: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub platform_fees: Decimal,
    /// Always zero: interest accrual is not tracked
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub interest_revenue: Decimal,
    /// Always zero: no historical baseline
    pub revenue_growth: f64,
    /// At most the 12 latest months, oldest first; exact (unrounded) fee sums
    pub revenue_by_month: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlyRevenue {
    /// Bucket key, `YYYY-MM`
    pub month: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub revenue: Decimal,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    pub overview: DashboardOverview,
    pub recent_activity: RecentActivity,
    pub trends: Trends,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_users: i64,
    pub total_loans: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
    pub active_disputes: i64,
}

/// Activity since local midnight
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub new_users_today: i64,
    pub loans_created_today: i64,
    pub transactions_today: i64,
    pub disputes_resolved_today: i64,
}

/// Growth rates. All zero until a historical baseline exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub user_growth_rate: f64,
    pub loan_growth_rate: f64,
    pub revenue_growth_rate: f64,
    pub dispute_resolution_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Lender dashboard
// ---------------------------------------------------------------------------

/// Offer statistics for a single lender
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LenderDashboardStats {
    pub total_active_offers: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_amount_offered: Decimal,
    /// Always zero: issued loans are not tracked per lender yet
    pub total_loans_issued: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_returns: Decimal,
    pub active_loans_count: i64,
}
