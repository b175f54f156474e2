use axum::{Json, extract::State};

use crate::{error::ApiError, state::AppState};
use pledger_store::models::Charity;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Charity>>, ApiError> {
    let charities = state.charities.list().await?;
    Ok(Json(charities))
}
