//! Repository layer over the record store

pub mod disputes;
pub mod lenders;
pub mod loan_ads;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod transactions;
pub mod users;

use std::sync::Arc;

pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;
pub use store::{Collection, RecordStore, StoreError};

/// Main repository struct holding the record store handle
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn RecordStore>,
    pub users: users::UsersRepository,
    pub loan_ads: loan_ads::LoanAdsRepository,
    pub transactions: transactions::TransactionsRepository,
    pub disputes: disputes::DisputesRepository,
    pub lenders: lenders::LendersRepository,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store: store.clone(),
            users: users::UsersRepository::new(store.clone()),
            loan_ads: loan_ads::LoanAdsRepository::new(store.clone()),
            transactions: transactions::TransactionsRepository::new(store.clone()),
            disputes: disputes::DisputesRepository::new(store.clone()),
            lenders: lenders::LendersRepository::new(store),
        }
    }

    /// Check that the underlying store answers
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
