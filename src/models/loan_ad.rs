//! Loan ads published by borrowers

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::Document;

/// Lifecycle status of a loan ad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanAdStatus {
    Pending,
    Approved,
    Active,
    Rejected,
    Closed,
}

impl std::str::FromStr for LoanAdStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LoanAdStatus::Pending),
            "approved" => Ok(LoanAdStatus::Approved),
            "active" => Ok(LoanAdStatus::Active),
            "rejected" => Ok(LoanAdStatus::Rejected),
            "closed" => Ok(LoanAdStatus::Closed),
            _ => Err(format!("Invalid loan ad status: {}", s)),
        }
    }
}

/// Loan ad record as read from the `ads` collection
#[derive(Debug, Clone, PartialEq)]
pub struct LoanAdRecord {
    pub id: String,
    pub status: Option<LoanAdStatus>,
    pub amount: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
}

impl LoanAdRecord {
    /// Requested amount, zero when absent
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or_default()
    }
}

impl From<&Document> for LoanAdRecord {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            status: doc.str_field("status").and_then(|s| s.parse().ok()),
            amount: doc.decimal_field("amount"),
            created_at: doc.timestamp_field("createdAt"),
        }
    }
}
