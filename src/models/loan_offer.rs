//! Loan offers published by lenders

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::Document;

/// Loan offer record as read from the `loanOffers` collection
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanOfferRecord {
    pub id: String,
    pub lender_id: Option<String>,
    /// Offered principal
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Decimal>,
    /// Yearly interest rate, in percent
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub interest_rate: Option<Decimal>,
    /// Tenure in months
    pub tenure: Option<i64>,
    pub min_credit_score: Option<i64>,
    pub description: Option<String>,
    /// `active`, `inactive`, ...
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl LoanOfferRecord {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }

    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or_default()
    }
}

impl From<&Document> for LoanOfferRecord {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            lender_id: doc.str_field("lenderId").map(String::from),
            amount: doc.decimal_field("amount"),
            interest_rate: doc.decimal_field("interestRate"),
            tenure: doc.i64_field("tenure"),
            min_credit_score: doc.i64_field("minCreditScore"),
            description: doc.str_field("description").map(String::from),
            status: doc.str_field("status").map(String::from),
            created_at: doc.timestamp_field("createdAt"),
        }
    }
}
