use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    auth::IdentityProvider,
    errors::{AppError, AppResult},
};

const SESSION_FILE: &str = "session.json";

/// The persisted sign-in session. Written on login, read on every
/// screen activation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserSession {
    pub user_id: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Session storage backed by a JSON file under the app data directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE),
        }
    }

    /// Persists the session using temp-file-then-rename so a crash
    /// mid-write cannot leave a half-written file behind.
    pub async fn save(&self, user_id: &str) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|err| AppError::SessionError(err.to_string()))?;
        }

        let session = UserSession {
            user_id: user_id.to_string(),
            logged_in_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&session)?;

        let temp_path = self
            .path
            .with_extension(format!("json.tmp.{}", std::process::id()));
        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|err| AppError::SessionError(err.to_string()))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|err| AppError::SessionError(err.to_string()))?;

        log::info!("saved session for user {}", user_id);
        Ok(())
    }

    pub async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::SessionError(err.to_string())),
        }
    }
}

#[async_trait]
impl IdentityProvider for FileSessionStore {
    async fn current_user_id(&self) -> AppResult<Option<String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            // No file yet means first launch, not an error.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(AppError::SessionError(err.to_string())),
        };

        match serde_json::from_str::<UserSession>(&contents) {
            Ok(session) => Ok(Some(session.user_id)),
            Err(err) => {
                // A corrupted session reads as logged out.
                log::warn!("session file corrupted at {:?}: {}", self.path, err);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quiz-social-{}-{}", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_missing_session_reads_as_logged_out() {
        let store = FileSessionStore::new(&scratch_dir("missing"));
        let resolved = store.current_user_id().await.expect("read should work");
        assert_eq!(resolved, None);
    }

    #[tokio::test]
    async fn test_save_then_read_round_trips_the_user_id() {
        let dir = scratch_dir("save");
        let store = FileSessionStore::new(&dir);

        store.save("user-a").await.expect("save should work");
        let resolved = store.current_user_id().await.expect("read should work");
        assert_eq!(resolved.as_deref(), Some("user-a"));

        store.clear().await.expect("clear should work");
        let after_clear = store.current_user_id().await.expect("read should work");
        assert_eq!(after_clear, None);

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_corrupted_session_reads_as_logged_out() {
        let dir = scratch_dir("corrupt");
        tokio::fs::create_dir_all(&dir)
            .await
            .expect("scratch dir should be creatable");
        tokio::fs::write(dir.join(SESSION_FILE), "{not json")
            .await
            .expect("write should work");

        let store = FileSessionStore::new(&dir);
        let resolved = store.current_user_id().await.expect("read should work");
        assert_eq!(resolved, None);

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_clear_without_session_is_a_noop() {
        let store = FileSessionStore::new(&scratch_dir("clear-noop"));
        store.clear().await.expect("clear should be a no-op");
    }
}
