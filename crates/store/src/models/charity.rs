use serde::{Deserialize, Serialize};

/// Static seed data, read-only through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charity {
    pub id: String,
    pub name: String,
    pub link: String,
}
