use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{QuizDocument, QuizRecord},
    repositories::QuizRepository,
};

/// Quiz records partitioned by the identifier of their creator.
pub type QuizGrouping = HashMap<String, Vec<QuizRecord>>;

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// Fetches every quiz and groups them by creator, leaving out the
    /// current user's own quizzes.
    pub async fn fetch_grouped_by_creator(&self, current_user_id: &str) -> AppResult<QuizGrouping> {
        let documents = self.repository.fetch_all().await?;
        Ok(group_by_creator(&documents, current_user_id))
    }
}

/// Partitions a fetched quiz collection by creator. Each record's id is
/// stamped from its storage key. Quizzes authored by `current_user_id`
/// are left out entirely, as are documents with no creator field.
/// In-group order follows the iteration order of `documents`; callers
/// must not read anything chronological into it.
pub fn group_by_creator(
    documents: &BTreeMap<String, QuizDocument>,
    current_user_id: &str,
) -> QuizGrouping {
    let mut grouping = QuizGrouping::new();
    let mut missing_creator = 0usize;

    for (key, document) in documents {
        let Some(record) = QuizRecord::from_document(key, document) else {
            missing_creator += 1;
            continue;
        };
        if record.created_by_user_id == current_user_id {
            continue;
        }
        grouping
            .entry(record.created_by_user_id.clone())
            .or_default()
            .push(record);
    }

    if missing_creator > 0 {
        log::warn!(
            "skipped {} quiz documents without createdByUserId",
            missing_creator
        );
    }

    grouping
}
