//! Disputes raised between borrowers and lenders

use chrono::{DateTime, Utc};

use super::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisputeStatus {
    Open,
    InProgress,
    Escalated,
    Resolved,
}

impl DisputeStatus {
    /// Open, in progress and escalated disputes still need attention
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            DisputeStatus::Open | DisputeStatus::InProgress | DisputeStatus::Escalated
        )
    }
}

impl std::str::FromStr for DisputeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(DisputeStatus::Open),
            "in-progress" => Ok(DisputeStatus::InProgress),
            "escalated" => Ok(DisputeStatus::Escalated),
            "resolved" => Ok(DisputeStatus::Resolved),
            _ => Err(format!("Invalid dispute status: {}", s)),
        }
    }
}

/// Dispute record as read from the `disputes` collection
#[derive(Debug, Clone, PartialEq)]
pub struct DisputeRecord {
    pub id: String,
    pub status: Option<DisputeStatus>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl DisputeRecord {
    pub fn is_active(&self) -> bool {
        self.status.is_some_and(|s| s.is_active())
    }
}

impl From<&Document> for DisputeRecord {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            status: doc.str_field("status").and_then(|s| s.parse().ok()),
            resolved_at: doc.timestamp_field("resolvedAt"),
        }
    }
}
