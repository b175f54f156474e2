use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded miss against a challenge. `amount` is copied from the
/// challenge's penalty value at recording time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyEvent {
    pub id: String,
    pub challenge_id: String,
    pub date: DateTime<Utc>,
    pub amount: i64,
    pub recorded_by: String,
}
