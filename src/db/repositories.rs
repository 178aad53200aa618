//! Account store: the `users` table behind an async trait.

use async_trait::async_trait;

use super::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{AccountRow, NewAccount};

/// Message for a signup whose email is already registered.
pub const EMAIL_TAKEN: &str = "Email already exists";

/// Persistence operations needed by the signup and login handlers.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Whether an account already uses `email`, ignoring case.
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Insert a new account.
    ///
    /// Fails with [`AppError::Conflict`] when the email is taken, even if a
    /// concurrent signup slipped past [`AccountStore::email_exists`].
    async fn insert(&self, account: &NewAccount) -> AppResult<AccountRow>;

    /// Find the account for a login identifier.
    ///
    /// The identifier matches `email` ignoring case, or `username` exactly.
    /// An email match wins over a username match; ties go to the oldest account.
    async fn find_for_login(&self, identifier: &str) -> AppResult<Option<AccountRow>>;
}

/// PostgreSQL implementation of [`AccountStore`].
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let row: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE lower(email) = lower($1)")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    async fn insert(&self, account: &NewAccount) -> AppResult<AccountRow> {
        sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO users (full_name, email, username, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, email, username, password_hash, created_at
            "#,
        )
        .bind(&account.full_name)
        .bind(&account.email)
        .bind(&account.username)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(EMAIL_TAKEN.to_string())
            } else {
                AppError::Db(e)
            }
        })
    }

    async fn find_for_login(&self, identifier: &str) -> AppResult<Option<AccountRow>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, full_name, email, username, password_hash, created_at
            FROM users
            WHERE lower(email) = lower($1) OR username = $1
            ORDER BY (lower(email) = lower($1)) DESC, created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

/// SQLSTATE 23505: the `users_email_lower_key` index rejected the insert.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
