//! Lender-facing dashboard service

use crate::{
    analytics,
    error::{AppError, AppResult},
    models::{report::LenderDashboardStats, LoanOfferRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct LendersService {
    repository: Repository,
}

impl LendersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Offer totals for one lender
    pub async fn get_dashboard_stats(&self, lender_id: &str) -> AppResult<LenderDashboardStats> {
        if !self.repository.lenders.exists(lender_id).await? {
            return Err(AppError::NotFound(format!(
                "Lender with ID {} not found",
                lender_id
            )));
        }
        let offers = self.repository.lenders.list_offers(lender_id).await?;

        tracing::debug!(lender_id, offers = offers.len(), "Computing lender dashboard");
        Ok(analytics::compute_lender_dashboard(&offers))
    }

    /// Offers published by `lender_id`; empty when the lender has none or
    /// does not exist
    pub async fn list_offers(&self, lender_id: &str) -> AppResult<Vec<LoanOfferRecord>> {
        Ok(self.repository.lenders.list_offers(lender_id).await?)
    }
}
