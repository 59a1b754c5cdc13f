use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{FileSessionStore, IdentityProvider},
    config::Config,
    errors::AppResult,
    notify::{LogNotificationSink, NotificationSink},
    repositories::{StoreQuizRepository, StoreUserRepository},
    screens::SocialScreen,
    services::{QuizService, UserService},
    store::DocumentStore,
};

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub quiz_service: Arc<QuizService>,
    pub user_service: Arc<UserService>,
    pub notifier: Arc<dyn NotificationSink>,
    pub store: DocumentStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;
        let store = DocumentStore::new(&config)?;

        let quiz_repository = Arc::new(StoreQuizRepository::new(
            store.clone(),
            &config.quizzes_path,
        ));
        let quiz_service = Arc::new(QuizService::new(quiz_repository));

        let user_repository = Arc::new(StoreUserRepository::new(store.clone(), &config.users_path));
        let user_service = Arc::new(UserService::new(user_repository));

        let identity = Arc::new(FileSessionStore::new(&config.session_dir));

        Ok(Self {
            identity,
            quiz_service,
            user_service,
            notifier: Arc::new(LogNotificationSink),
            store,
            config: Arc::new(config),
        })
    }

    /// Builds a freshly activatable social screen over the shared
    /// services.
    pub fn social_screen(&self) -> Arc<SocialScreen> {
        Arc::new(SocialScreen::new(
            Arc::clone(&self.identity),
            Arc::clone(&self.quiz_service),
            Arc::clone(&self.user_service),
            Arc::clone(&self.notifier),
        ))
    }
}
