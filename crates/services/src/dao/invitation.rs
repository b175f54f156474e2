use std::sync::Arc;

use chrono::Utc;
use pledger_store::JsonStore;
use pledger_store::models::Invitation;
use tracing::debug;

use super::base::{DaoError, DaoResult, new_id};

pub struct InvitationDao {
    store: Arc<JsonStore>,
}

impl InvitationDao {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Both users and the challenge must exist. The record is created in the
    /// `"pending"` state and never transitions out of it.
    pub async fn create(
        &self,
        from_user_id: String,
        to_user_id: String,
        challenge_id: String,
    ) -> DaoResult<Invitation> {
        self.store
            .update(|doc| {
                let from_exists = doc.users.iter().any(|u| u.id == from_user_id);
                let to_exists = doc.users.iter().any(|u| u.id == to_user_id);
                let challenge_exists = doc.challenges.iter().any(|c| c.id == challenge_id);
                if !from_exists || !to_exists || !challenge_exists {
                    return Err(DaoError::NotFound(
                        "User or challenge not found".to_string(),
                    ));
                }

                let invitation = Invitation {
                    id: new_id(),
                    from_user_id,
                    to_user_id,
                    challenge_id,
                    status: Invitation::PENDING.to_string(),
                    created_at: Utc::now(),
                };
                doc.invitations.push(invitation.clone());
                debug!(id = %invitation.id, "Inserted invitation");
                Ok(invitation)
            })
            .await
    }

    /// Invitations addressed to the user, in store insertion order.
    pub async fn list_for_user(&self, user_id: &str) -> DaoResult<Vec<Invitation>> {
        Ok(self
            .store
            .read(|doc| {
                doc.invitations
                    .iter()
                    .filter(|i| i.to_user_id == user_id)
                    .cloned()
                    .collect()
            })
            .await)
    }
}
