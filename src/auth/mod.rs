pub mod session;

pub use session::{FileSessionStore, UserSession};

use async_trait::async_trait;

use crate::errors::AppResult;

/// Resolves the identifier persisted by the sign-in flow. Local state
/// only, no network.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user_id(&self) -> AppResult<Option<String>>;
}
