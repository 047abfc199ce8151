//! Loan ads repository

use std::sync::Arc;

use super::store::{Collection, RecordStore, StoreError};
use crate::models::LoanAdRecord;

#[derive(Clone)]
pub struct LoanAdsRepository {
    store: Arc<dyn RecordStore>,
}

impl LoanAdsRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Snapshot of every loan ad
    pub async fn list_all(&self) -> Result<Vec<LoanAdRecord>, StoreError> {
        let docs = self.store.fetch_all(Collection::LoanAds).await?;
        Ok(docs.iter().map(LoanAdRecord::from).collect())
    }
}
