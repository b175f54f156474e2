use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    /// Owner. Immutable for the lifetime of the challenge.
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Required number of check-ins.
    pub duration: i64,
    /// Monetary amount accrued per recorded miss.
    pub penalty: i64,
    /// Deliberately not validated against the charity collection.
    pub charity_id: String,
    pub progress: i64,
    pub total_penalty: i64,
    #[serde(default)]
    pub witnesses: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    pub fn is_owner(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub fn has_witness(&self, user_id: &str) -> bool {
        self.witnesses.iter().any(|w| w == user_id)
    }

    /// Owner or witness.
    pub fn involves(&self, user_id: &str) -> bool {
        self.is_owner(user_id) || self.has_witness(user_id)
    }
}
