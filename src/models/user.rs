//! Platform user accounts

use chrono::{DateTime, Utc};

use super::Document;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Borrower,
    Lender,
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "borrower" => Ok(UserRole::Borrower),
            "lender" => Ok(UserRole::Lender),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Suspended,
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "suspended" => Ok(UserStatus::Suspended),
            _ => Err(format!("Invalid user status: {}", s)),
        }
    }
}

/// User record as read from the `users` collection.
///
/// Missing or unrecognized role/status values are `None` and are left out of
/// the corresponding breakdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Document> for UserRecord {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            role: doc.str_field("role").and_then(|s| s.parse().ok()),
            status: doc.str_field("status").and_then(|s| s.parse().ok()),
            created_at: doc.timestamp_field("createdAt"),
        }
    }
}
