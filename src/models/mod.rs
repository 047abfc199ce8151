//! Data models: raw documents, typed records and report shapes

pub mod dispute;
pub mod document;
pub mod loan_ad;
pub mod loan_offer;
pub mod report;
pub mod transaction;
pub mod user;

// Re-export commonly used types
pub use dispute::{DisputeRecord, DisputeStatus};
pub use document::Document;
pub use loan_ad::{LoanAdRecord, LoanAdStatus};
pub use loan_offer::LoanOfferRecord;
pub use transaction::{TransactionRecord, TransactionStatus};
pub use user::{UserRecord, UserRole, UserStatus};
