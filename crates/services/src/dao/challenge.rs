use std::sync::Arc;

use chrono::Utc;
use pledger_store::JsonStore;
use pledger_store::models::{Challenge, PenaltyEvent};
use tracing::debug;

use super::base::{DaoError, DaoResult, new_id};

pub struct NewChallenge {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub penalty: i64,
    pub charity_id: String,
}

pub struct ChallengeDao {
    store: Arc<JsonStore>,
}

impl ChallengeDao {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new: NewChallenge) -> DaoResult<Challenge> {
        let challenge = Challenge {
            id: new_id(),
            user_id: new.user_id,
            title: new.title,
            description: new.description,
            duration: new.duration,
            penalty: new.penalty,
            // Not checked against the charity collection.
            charity_id: new.charity_id,
            progress: 0,
            total_penalty: 0,
            witnesses: Vec::new(),
            created_at: Utc::now(),
        };

        self.store
            .update(|doc| {
                doc.challenges.push(challenge.clone());
                Ok::<_, DaoError>(())
            })
            .await?;

        debug!(id = %challenge.id, "Inserted challenge");
        Ok(challenge)
    }

    /// Idempotent: adding an already-present witness is a no-op.
    pub async fn add_witness(&self, challenge_id: &str, witness_id: &str) -> DaoResult<Challenge> {
        self.store
            .update(|doc| {
                let Some(idx) = doc.challenges.iter().position(|c| c.id == challenge_id) else {
                    return Err(DaoError::NotFound("Challenge not found".to_string()));
                };
                if !doc.users.iter().any(|u| u.id == witness_id) {
                    return Err(DaoError::NotFound("Witness user not found".to_string()));
                }

                let challenge = &mut doc.challenges[idx];
                if !challenge.has_witness(witness_id) {
                    challenge.witnesses.push(witness_id.to_string());
                }
                Ok(challenge.clone())
            })
            .await
    }

    /// Only the owner or a witness may record. Progress is clamped at
    /// `duration`; the event's `recorded_by` falls back to the owner id when
    /// the caller sent none.
    pub async fn record_penalty(
        &self,
        challenge_id: &str,
        recorded_by: Option<String>,
    ) -> DaoResult<(Challenge, PenaltyEvent)> {
        self.store
            .update(|doc| {
                let challenge = doc
                    .challenges
                    .iter_mut()
                    .find(|c| c.id == challenge_id)
                    .ok_or_else(|| DaoError::NotFound("Challenge not found".to_string()))?;

                let actor = recorded_by.as_deref().unwrap_or_default();
                if !challenge.involves(actor) {
                    return Err(DaoError::Forbidden(
                        "Only the challenge owner or a witness can record a penalty".to_string(),
                    ));
                }

                challenge.progress = (challenge.progress + 1).min(challenge.duration);
                challenge.total_penalty += challenge.penalty;

                let event = PenaltyEvent {
                    id: new_id(),
                    challenge_id: challenge.id.clone(),
                    date: Utc::now(),
                    amount: challenge.penalty,
                    recorded_by: recorded_by
                        .filter(|r| !r.is_empty())
                        .unwrap_or_else(|| challenge.user_id.clone()),
                };
                let snapshot = challenge.clone();

                doc.penalties.push(event.clone());
                debug!(id = %event.id, challenge_id = %snapshot.id, "Inserted penalty event");
                Ok((snapshot, event))
            })
            .await
    }

    /// Ownership is part of the lookup predicate: a wrong `user_id` reads as
    /// not-found, not as forbidden. Resets both the accrued liability and the
    /// progress counter and deletes the challenge's penalty events.
    pub async fn confirm_payment(&self, challenge_id: &str, user_id: &str) -> DaoResult<Challenge> {
        self.store
            .update(|doc| {
                let challenge = doc
                    .challenges
                    .iter_mut()
                    .find(|c| c.id == challenge_id && c.user_id == user_id)
                    .ok_or_else(|| {
                        DaoError::NotFound("Challenge not found or not owned by you".to_string())
                    })?;

                challenge.total_penalty = 0;
                challenge.progress = 0;
                let snapshot = challenge.clone();

                doc.penalties.retain(|p| p.challenge_id != challenge_id);
                Ok(snapshot)
            })
            .await
    }

    /// Challenges the user owns or witnesses, in store insertion order.
    pub async fn list_for_user(&self, user_id: &str) -> DaoResult<Vec<Challenge>> {
        Ok(self
            .store
            .read(|doc| {
                doc.challenges
                    .iter()
                    .filter(|c| c.involves(user_id))
                    .cloned()
                    .collect()
            })
            .await)
    }

    pub async fn penalties_for(&self, challenge_id: &str) -> DaoResult<Vec<PenaltyEvent>> {
        Ok(self
            .store
            .read(|doc| {
                doc.penalties
                    .iter()
                    .filter(|p| p.challenge_id == challenge_id)
                    .cloned()
                    .collect()
            })
            .await)
    }
}
