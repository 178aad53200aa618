//! Auth HTTP handlers: signup, login.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::http::AppState;
use crate::middleware::AppJson;
use crate::models::{normalize_username, NewAccount, MISSING_FIELDS};

/// Fields are optional so that a missing one is a 400, not a body rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(required, length(min = 1))]
    pub full_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email_or_username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: UserInfo,
}

/// The only account fields a client ever sees.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    AppJson(body): AppJson<SignupRequest>,
) -> AppResult<Json<SignupResponse>> {
    body.validate()
        .map_err(|_| AppError::Validation(MISSING_FIELDS.to_string()))?;
    let (Some(full_name), Some(email), Some(password)) = (body.full_name, body.email, body.password)
    else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };

    // Fast path only: the unique index on lower(email) settles concurrent signups.
    if state.store().email_exists(&email).await? {
        return Err(AppError::Conflict(crate::db::EMAIL_TAKEN.to_string()));
    }

    let passwords = state.passwords().clone();
    let password_hash = tokio::task::spawn_blocking(move || passwords.hash(&password))
        .await
        .map_err(anyhow::Error::from)??;

    let account = NewAccount {
        full_name,
        email,
        username: normalize_username(body.username),
        password_hash,
    };
    let row = state.store().insert(&account).await?;
    info!(account_id = %row.id, "account created");

    Ok(Json(SignupResponse {
        success: true,
        message: "Signup successful",
    }))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    body.validate()
        .map_err(|_| AppError::Validation(MISSING_FIELDS.to_string()))?;
    let (Some(identifier), Some(password)) = (body.email_or_username, body.password) else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };

    let account = state
        .store()
        .find_for_login(&identifier)
        .await?;

    let passwords = state.passwords().clone();
    let (account, matched) = tokio::task::spawn_blocking(move || match account {
        Some(account) => {
            let matched = passwords.verify(&password, &account.password_hash)?;
            Ok::<_, AppError>((Some(account), matched))
        }
        None => Ok((None, passwords.verify_absent(&password))),
    })
    .await
    .map_err(anyhow::Error::from)??;

    let account = match account {
        Some(account) if matched => account,
        Some(account) => {
            debug!(account_id = %account.id, "login rejected: wrong password");
            return Err(AppError::Auth);
        }
        None => {
            debug!("login rejected: unknown identifier");
            return Err(AppError::Auth);
        }
    };

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        user: UserInfo {
            id: account.id.to_string(),
            name: account.full_name,
            email: account.email,
        },
    }))
}
