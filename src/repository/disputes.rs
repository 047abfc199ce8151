//! Disputes repository

use std::sync::Arc;

use super::store::{Collection, RecordStore, StoreError};
use crate::models::DisputeRecord;

#[derive(Clone)]
pub struct DisputesRepository {
    store: Arc<dyn RecordStore>,
}

impl DisputesRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<DisputeRecord>, StoreError> {
        let docs = self.store.fetch_all(Collection::Disputes).await?;
        Ok(docs.iter().map(DisputeRecord::from).collect())
    }
}
