use std::sync::Arc;

use pledger_store::JsonStore;
use pledger_store::models::User;
use tracing::debug;

use super::base::{DaoError, DaoResult, new_id};

pub struct UserDao {
    store: Arc<JsonStore>,
}

impl UserDao {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Insert a new user. Email uniqueness is an exact, case-sensitive match.
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> DaoResult<User> {
        self.store
            .update(|doc| {
                if doc.users.iter().any(|u| u.email == email) {
                    return Err(DaoError::DuplicateKey(
                        "Email is already registered".to_string(),
                    ));
                }
                let user = User {
                    id: new_id(),
                    name,
                    email,
                    password: password_hash,
                };
                doc.users.push(user.clone());
                debug!(id = %user.id, "Inserted user");
                Ok(user)
            })
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<User> {
        self.store
            .read(|doc| doc.users.iter().find(|u| u.email == email).cloned())
            .await
            .ok_or_else(|| DaoError::NotFound("User not found".to_string()))
    }
}
