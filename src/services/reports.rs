//! Admin reports service
//!
//! Each report takes a fresh snapshot of the collections it needs and hands
//! it to the pure aggregators in [`crate::analytics`]. The `_at` variants take
//! an explicit reference time.

use chrono::{DateTime, FixedOffset};

use crate::{
    analytics,
    error::{AppError, AppResult},
    models::report::{
        DashboardAnalytics, LoanReport, ReportKind, RevenueReport, TransactionReport, UserReport,
    },
    repository::Repository,
};

use super::local_now;

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_users_report(&self) -> AppResult<UserReport> {
        self.get_users_report_at(local_now()).await
    }

    pub async fn get_users_report_at(&self, now: DateTime<FixedOffset>) -> AppResult<UserReport> {
        let users = self
            .repository
            .users
            .list_all()
            .await
            .map_err(AppError::report(ReportKind::Users))?;

        tracing::debug!(users = users.len(), "Computing users report");
        Ok(analytics::compute_user_report(&users, now))
    }

    pub async fn get_loans_report(&self) -> AppResult<LoanReport> {
        let ads = self
            .repository
            .loan_ads
            .list_all()
            .await
            .map_err(AppError::report(ReportKind::Loans))?;

        tracing::debug!(loan_ads = ads.len(), "Computing loans report");
        Ok(analytics::compute_loan_report(&ads))
    }

    pub async fn get_transactions_report(&self) -> AppResult<TransactionReport> {
        let transactions = self
            .repository
            .transactions
            .list_all()
            .await
            .map_err(AppError::report(ReportKind::Transactions))?;

        tracing::debug!(transactions = transactions.len(), "Computing transactions report");
        Ok(analytics::compute_transaction_report(&transactions))
    }

    pub async fn get_revenue_report(&self) -> AppResult<RevenueReport> {
        self.get_revenue_report_at(local_now()).await
    }

    pub async fn get_revenue_report_at(
        &self,
        now: DateTime<FixedOffset>,
    ) -> AppResult<RevenueReport> {
        let transactions = self
            .repository
            .transactions
            .list_all()
            .await
            .map_err(AppError::report(ReportKind::Revenue))?;

        tracing::debug!(transactions = transactions.len(), "Computing revenue report");
        Ok(analytics::compute_revenue_report(&transactions, now))
    }

    pub async fn get_dashboard_analytics(&self) -> AppResult<DashboardAnalytics> {
        self.get_dashboard_analytics_at(local_now()).await
    }

    /// Reads all four collections concurrently; the first failure aborts
    pub async fn get_dashboard_analytics_at(
        &self,
        now: DateTime<FixedOffset>,
    ) -> AppResult<DashboardAnalytics> {
        let repo = &self.repository;
        let (users, loan_ads, transactions, disputes) = tokio::try_join!(
            repo.users.list_all(),
            repo.loan_ads.list_all(),
            repo.transactions.list_all(),
            repo.disputes.list_all(),
        )
        .map_err(AppError::report(ReportKind::Dashboard))?;

        tracing::debug!(
            users = users.len(),
            loan_ads = loan_ads.len(),
            transactions = transactions.len(),
            disputes = disputes.len(),
            "Computing dashboard analytics"
        );

        Ok(analytics::compute_dashboard_analytics(
            &users,
            &loan_ads,
            &transactions,
            &disputes,
            now,
        ))
    }
}
