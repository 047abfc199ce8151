//! Record store interface
//!
//! The store holds named collections of JSON documents. Reports only ever
//! read whole collections; scoped reads (`field == value`) and lookups by id
//! serve the lender endpoints.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::Document;

/// Collections known to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    LoanAds,
    Transactions,
    Disputes,
    Lenders,
    LoanOffers,
}

impl Collection {
    /// Name of the collection in the store
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::LoanAds => "ads",
            Collection::Transactions => "transactions",
            Collection::Disputes => "disputes",
            Collection::Lenders => "lenders",
            Collection::LoanOffers => "loanOffers",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Failure of a store read
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the document store
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Snapshot of every document in `collection`; order is unspecified
    async fn fetch_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// Documents of `collection` whose `field` equals `value`
    async fn fetch_where(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError>;

    async fn fetch_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Cheap connectivity check used by the readiness probe
    async fn ping(&self) -> Result<(), StoreError>;
}
