//! Account records and the normalisation rules applied before they are stored.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Message returned when a required field is missing or empty.
pub const MISSING_FIELDS: &str = "All fields are required";

/// A persisted account, as read back from `users`.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub username: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// An account about to be inserted. `password_hash` is already a PHC digest.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub username: Option<String>,
    pub password_hash: String,
}

/// Emails are stored as typed but compared case-insensitively, like the
/// `lower(email)` unique index on `users`.
pub fn emails_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// An absent or empty username is stored as `NULL`.
pub fn normalize_username(username: Option<String>) -> Option<String> {
    username.filter(|u| !u.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_match_ignoring_case() {
        assert!(emails_match("Ann@X.com", "ann@x.com"));
        assert!(emails_match("a@x.com", "a@x.com"));
        assert!(!emails_match("a@x.com", "b@x.com"));
    }

    #[test]
    fn empty_username_becomes_none() {
        assert_eq!(normalize_username(Some(String::new())), None);
        assert_eq!(normalize_username(None), None);
        assert_eq!(
            normalize_username(Some("ann".to_string())),
            Some("ann".to_string())
        );
    }
}
