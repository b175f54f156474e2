use serde::{Deserialize, Serialize};

use crate::models::{Challenge, Charity, Invitation, PenaltyEvent, User};

/// The single persisted document. Struct field order is the key order of the
/// serialized file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub invitations: Vec<Invitation>,
    #[serde(default)]
    pub penalties: Vec<PenaltyEvent>,
    #[serde(default)]
    pub charities: Vec<Charity>,
}

impl StoreDocument {
    /// Fresh document: empty collections plus the two seeded charities.
    pub fn seeded() -> Self {
        Self {
            charities: vec![
                Charity {
                    id: "charity1".to_string(),
                    name: "Mahak".to_string(),
                    link: "https://mahak-charity.org/online-payment/".to_string(),
                },
                Charity {
                    id: "charity2".to_string(),
                    name: "Kahrizak".to_string(),
                    link: "https://kahrizakcharity.com/".to_string(),
                },
            ],
            ..Self::default()
        }
    }
}
