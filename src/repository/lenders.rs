//! Lenders and their loan offers

use std::sync::Arc;

use serde_json::Value;

use super::store::{Collection, RecordStore, StoreError};
use crate::models::LoanOfferRecord;

#[derive(Clone)]
pub struct LendersRepository {
    store: Arc<dyn RecordStore>,
}

impl LendersRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn exists(&self, lender_id: &str) -> Result<bool, StoreError> {
        let doc = self.store.fetch_by_id(Collection::Lenders, lender_id).await?;
        Ok(doc.is_some())
    }

    /// Loan offers published by one lender
    pub async fn list_offers(&self, lender_id: &str) -> Result<Vec<LoanOfferRecord>, StoreError> {
        let docs = self
            .store
            .fetch_where(
                Collection::LoanOffers,
                "lenderId",
                &Value::String(lender_id.to_string()),
            )
            .await?;
        Ok(docs.iter().map(LoanOfferRecord::from).collect())
    }
}
