//! In-memory [`AccountStore`] for handler tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use super::{AccountStore, EMAIL_TAKEN};
use crate::error::{AppError, AppResult};
use crate::models::{emails_match, AccountRow, NewAccount};

/// Mirrors the Postgres schema: case-insensitively unique email, non-unique username.
#[derive(Default)]
pub struct MemoryAccountStore {
    rows: Mutex<Vec<AccountRow>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_by_email(&self, email: &str) -> Option<AccountRow> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| emails_match(&r.email, email))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.get_by_email(email).is_some())
    }

    async fn insert(&self, account: &NewAccount) -> AppResult<AccountRow> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| emails_match(&r.email, &account.email)) {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }
        let row = AccountRow {
            id: Uuid::new_v4(),
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            username: account.username.clone(),
            password_hash: account.password_hash.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_for_login(&self, identifier: &str) -> AppResult<Option<AccountRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| {
                emails_match(&r.email, identifier) || r.username.as_deref() == Some(identifier)
            })
            .min_by_key(|r| (!emails_match(&r.email, identifier), r.created_at, r.id))
            .cloned())
    }
}
