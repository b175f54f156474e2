use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::state::AppState;
use pledger_services::stats::{ProfileStats, WeeklyStats};

#[derive(Debug, Serialize)]
pub struct StatsEnvelope<T> {
    pub stats: T,
    pub message: String,
}

pub async fn profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<StatsEnvelope<ProfileStats>> {
    let stats = state.stats.profile(&user_id).await;
    Json(StatsEnvelope {
        stats,
        message: "Profile statistics".to_string(),
    })
}

pub async fn weekly(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<StatsEnvelope<WeeklyStats>> {
    let stats = state.stats.weekly(&user_id).await;
    Json(StatsEnvelope {
        stats,
        message: "Weekly statistics".to_string(),
    })
}
