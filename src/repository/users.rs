//! Users repository

use std::sync::Arc;

use super::store::{Collection, RecordStore, StoreError};
use crate::models::UserRecord;

#[derive(Clone)]
pub struct UsersRepository {
    store: Arc<dyn RecordStore>,
}

impl UsersRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Snapshot of every user
    pub async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let docs = self.store.fetch_all(Collection::Users).await?;
        Ok(docs.iter().map(UserRecord::from).collect())
    }
}
