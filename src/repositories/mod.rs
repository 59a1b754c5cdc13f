pub mod quiz_repository;
pub mod user_repository;

pub use quiz_repository::{QuizRepository, StoreQuizRepository};
pub use user_repository::{StoreUserRepository, UserRepository};

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Decodes a fetched collection root into keyed documents. The root
/// must be a JSON object; individual entries that fail to decode are
/// skipped with a warning so one bad record cannot sink the batch.
pub(crate) fn collection_from_value<T: DeserializeOwned>(
    path: &str,
    value: Value,
) -> AppResult<BTreeMap<String, T>> {
    let Value::Object(entries) = value else {
        return Err(AppError::FetchFailed(format!(
            "collection at '{}' is not a JSON object",
            path
        )));
    };

    let mut documents = BTreeMap::new();
    let mut skipped = 0usize;
    for (key, entry) in entries {
        match serde_json::from_value::<T>(entry) {
            Ok(document) => {
                documents.insert(key, document);
            }
            Err(err) => {
                skipped += 1;
                log::warn!("skipping malformed entry '{}' in '{}': {}", key, path, err);
            }
        }
    }

    if skipped > 0 {
        log::warn!("skipped {} malformed entries in '{}'", skipped, path);
    }

    Ok(documents)
}
