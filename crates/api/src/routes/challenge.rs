use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::{error::ApiError, routes::present, state::AppState};
use pledger_services::dao::challenge::NewChallenge;
use pledger_store::models::{Challenge, PenaltyEvent};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallengeRequest {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<Value>,
    pub penalty: Option<Value>,
    pub charity_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPenaltyRequest {
    pub recorded_by: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWitnessRequest {
    pub witness_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChallengeEnvelope {
    pub challenge: Challenge,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PenaltyEnvelope {
    pub challenge: Challenge,
    pub penalty: PenaltyEvent,
    pub message: String,
}

/// Clients send duration/penalty either as JSON numbers or as numeric
/// strings. Anything else, and anything non-positive, is rejected.
fn positive_int(value: &Value) -> Option<i64> {
    let n = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.parse::<i64>().ok()?,
        _ => return None,
    };
    (n > 0).then_some(n)
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateChallengeRequest>,
) -> Result<Json<ChallengeEnvelope>, ApiError> {
    let (Some(user_id), Some(title), Some(charity_id), Some(duration), Some(penalty)) = (
        present(body.user_id),
        present(body.title),
        present(body.charity_id),
        body.duration,
        body.penalty,
    ) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let duration = positive_int(&duration).ok_or_else(|| {
        ApiError::Validation("Duration must be a positive integer".to_string())
    })?;
    let penalty = positive_int(&penalty).ok_or_else(|| {
        ApiError::Validation("Penalty must be a positive integer".to_string())
    })?;

    info!(%user_id, %title, "Create challenge request");

    let challenge = state
        .challenges
        .create(NewChallenge {
            user_id,
            title,
            description: body.description.unwrap_or_default(),
            duration,
            penalty,
            charity_id,
        })
        .await?;

    Ok(Json(ChallengeEnvelope {
        challenge,
        message: "Challenge created".to_string(),
    }))
}

pub async fn record_penalty(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<RecordPenaltyRequest>,
) -> Result<Json<PenaltyEnvelope>, ApiError> {
    info!(challenge_id = %id, recorded_by = ?body.recorded_by, "Record penalty request");

    let (challenge, penalty) = state.challenges.record_penalty(&id, body.recorded_by).await?;

    Ok(Json(PenaltyEnvelope {
        challenge,
        penalty,
        message: "Penalty recorded".to_string(),
    }))
}

pub async fn confirm_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ConfirmPaymentRequest>,
) -> Result<Json<ChallengeEnvelope>, ApiError> {
    info!(challenge_id = %id, user_id = ?body.user_id, "Confirm payment request");

    // A missing user id simply fails the ownership lookup.
    let user_id = body.user_id.unwrap_or_default();
    let challenge = state.challenges.confirm_payment(&id, &user_id).await?;

    Ok(Json(ChallengeEnvelope {
        challenge,
        message: "Payment confirmed and penalties cleared".to_string(),
    }))
}

pub async fn add_witness(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AddWitnessRequest>,
) -> Result<Json<ChallengeEnvelope>, ApiError> {
    info!(challenge_id = %id, witness_id = ?body.witness_id, "Add witness request");

    // A missing witness id fails the user lookup below.
    let witness_id = body.witness_id.unwrap_or_default();
    let challenge = state.challenges.add_witness(&id, &witness_id).await?;

    Ok(Json(ChallengeEnvelope {
        challenge,
        message: "Witness added".to_string(),
    }))
}

pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Challenge>>, ApiError> {
    let challenges = state.challenges.list_for_user(&user_id).await?;
    Ok(Json(challenges))
}

pub async fn list_penalties(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PenaltyEvent>>, ApiError> {
    let penalties = state.challenges.penalties_for(&id).await?;
    Ok(Json(penalties))
}
