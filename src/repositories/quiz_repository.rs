use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::{errors::AppResult, models::domain::QuizDocument, store::DocumentStore};

/// Source of the full quiz collection, keyed by storage key.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn fetch_all(&self) -> AppResult<BTreeMap<String, QuizDocument>>;
}

pub struct StoreQuizRepository {
    store: DocumentStore,
    path: String,
}

impl StoreQuizRepository {
    pub fn new(store: DocumentStore, path: &str) -> Self {
        Self {
            store,
            path: path.to_string(),
        }
    }
}

#[async_trait]
impl QuizRepository for StoreQuizRepository {
    async fn fetch_all(&self) -> AppResult<BTreeMap<String, QuizDocument>> {
        // An absent subtree reads back as null: no quizzes yet.
        let Some(value) = self.store.get_document(&self.path).await? else {
            return Ok(BTreeMap::new());
        };

        let documents = super::collection_from_value(&self.path, value)?;
        log::info!("fetched {} quizzes from '{}'", documents.len(), self.path);
        Ok(documents)
    }
}
