use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::ApiError, routes::present, state::AppState};
use pledger_store::models::PublicUser;

/// One message for both unknown email and wrong password, so the response
/// does not reveal which part failed.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: PublicUser,
    pub message: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let (Some(name), Some(email), Some(password)) = (
        present(body.name),
        present(body.email),
        present(body.password),
    ) else {
        return Err(ApiError::Validation(
            "Name, email and password are required".to_string(),
        ));
    };
    info!(%email, "Register request");

    let password_hash = state.auth.hash_password(&password)?;
    let user = state.users.create(name, email, password_hash).await?;

    Ok(Json(UserEnvelope {
        user: user.public(),
        message: "Registration successful".to_string(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let (Some(email), Some(password)) = (present(body.email), present(body.password)) else {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    };
    info!(%email, "Login request");

    let user = state
        .users
        .find_by_email(&email)
        .await
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if !state.auth.verify_password(&password, &user.password)? {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    Ok(Json(UserEnvelope {
        user: user.public(),
        message: "Login successful".to_string(),
    }))
}
