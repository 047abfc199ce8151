//! Money movements (disbursements, repayments, deposits, withdrawals)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::Document;

/// Settlement state of a transaction.
///
/// `completed` and `success` both map to [`TransactionStatus::Successful`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Successful,
    Failed,
    Pending,
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" | "success" => Ok(TransactionStatus::Successful),
            "failed" => Ok(TransactionStatus::Failed),
            "pending" => Ok(TransactionStatus::Pending),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

/// Transaction record as read from the `transactions` collection
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    /// Free-form type such as `loan_disbursement` or `repayment`
    pub kind: Option<String>,
    pub status: Option<TransactionStatus>,
    pub amount: Option<Decimal>,
    pub platform_fee: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
}

impl TransactionRecord {
    pub fn is_successful(&self) -> bool {
        self.status == Some(TransactionStatus::Successful)
    }

    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or_default()
    }

    /// Fee earned by the platform: `platformFee`, falling back to `fee` when
    /// the platform fee is absent or zero, else zero.
    pub fn revenue_fee(&self) -> Decimal {
        self.platform_fee
            .filter(|f| !f.is_zero())
            .or(self.fee)
            .unwrap_or_default()
    }
}

impl From<&Document> for TransactionRecord {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            kind: doc.str_field("type").map(String::from),
            status: doc.str_field("status").and_then(|s| s.parse().ok()),
            amount: doc.decimal_field("amount"),
            platform_fee: doc.decimal_field("platformFee"),
            fee: doc.decimal_field("fee"),
            created_at: doc.timestamp_field("createdAt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn txn(value: serde_json::Value) -> TransactionRecord {
        TransactionRecord::from(&Document::from_value("t1", value))
    }

    #[test]
    fn test_status_synonyms() {
        assert!(txn(json!({ "status": "completed" })).is_successful());
        assert!(txn(json!({ "status": "success" })).is_successful());
        assert!(!txn(json!({ "status": "Completed" })).is_successful());
        assert_eq!(txn(json!({ "status": "refunded" })).status, None);
    }

    #[test]
    fn test_revenue_fee_fallbacks() {
        assert_eq!(txn(json!({ "platformFee": 100, "fee": 5 })).revenue_fee(), Decimal::from(100));
        assert_eq!(txn(json!({ "fee": 30 })).revenue_fee(), Decimal::from(30));
        assert_eq!(txn(json!({ "platformFee": 0, "fee": 7 })).revenue_fee(), Decimal::from(7));
        assert_eq!(txn(json!({})).revenue_fee(), Decimal::ZERO);
    }

    #[test]
    fn test_type_field() {
        assert_eq!(txn(json!({ "type": "repayment" })).kind.as_deref(), Some("repayment"));
        assert_eq!(txn(json!({ "type": "" })).kind, None);
    }
}
