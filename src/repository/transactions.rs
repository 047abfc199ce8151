//! Transactions repository

use std::sync::Arc;

use super::store::{Collection, RecordStore, StoreError};
use crate::models::TransactionRecord;

#[derive(Clone)]
pub struct TransactionsRepository {
    store: Arc<dyn RecordStore>,
}

impl TransactionsRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<TransactionRecord>, StoreError> {
        let docs = self.store.fetch_all(Collection::Transactions).await?;
        Ok(docs.iter().map(TransactionRecord::from).collect())
    }
}
