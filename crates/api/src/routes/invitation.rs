use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::ApiError, routes::present, state::AppState};
use pledger_store::models::Invitation;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    pub from_user_id: Option<String>,
    pub to_user_id: Option<String>,
    pub challenge_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InvitationEnvelope {
    pub invitation: Invitation,
    pub message: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateInvitationRequest>,
) -> Result<Json<InvitationEnvelope>, ApiError> {
    let (Some(from_user_id), Some(to_user_id), Some(challenge_id)) = (
        present(body.from_user_id),
        present(body.to_user_id),
        present(body.challenge_id),
    ) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };
    info!(%from_user_id, %to_user_id, %challenge_id, "Invitation request");

    let invitation = state
        .invitations
        .create(from_user_id, to_user_id, challenge_id)
        .await?;

    Ok(Json(InvitationEnvelope {
        invitation,
        message: "Invitation sent".to_string(),
    }))
}

pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Invitation>>, ApiError> {
    let invitations = state.invitations.list_for_user(&user_id).await?;
    Ok(Json(invitations))
}
