use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub challenge_id: String,
    /// Always `"pending"`; nothing accepts, declines or expires invitations.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub const PENDING: &'static str = "pending";
}
