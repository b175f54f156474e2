use std::sync::Arc;

use pledger_store::JsonStore;
use pledger_store::models::Charity;

use super::base::DaoResult;

pub struct CharityDao {
    store: Arc<JsonStore>,
}

impl CharityDao {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> DaoResult<Vec<Charity>> {
        Ok(self.store.read(|doc| doc.charities.clone()).await)
    }
}
