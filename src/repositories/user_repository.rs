use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::{errors::AppResult, models::domain::UserProfile, store::DocumentStore};

/// Source of the full profile collection, keyed by storage key.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn fetch_all(&self) -> AppResult<BTreeMap<String, UserProfile>>;
}

pub struct StoreUserRepository {
    store: DocumentStore,
    path: String,
}

impl StoreUserRepository {
    pub fn new(store: DocumentStore, path: &str) -> Self {
        Self {
            store,
            path: path.to_string(),
        }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn fetch_all(&self) -> AppResult<BTreeMap<String, UserProfile>> {
        let Some(value) = self.store.get_document(&self.path).await? else {
            return Ok(BTreeMap::new());
        };

        let profiles = super::collection_from_value(&self.path, value)?;
        log::info!("fetched {} profiles from '{}'", profiles.len(), self.path);
        Ok(profiles)
    }
}
