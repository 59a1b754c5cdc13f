use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::{
    auth::IdentityProvider,
    errors::AppError,
    models::domain::UserProfile,
    notify::{NotificationSink, StatusKind},
    services::{QuizGrouping, QuizService, UserService},
};

/// What the presentation layer renders.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenState {
    Loading,
    Ready {
        users: Vec<UserProfile>,
        quizzes_by_creator: QuizGrouping,
    },
    Error(String),
}

#[derive(Debug)]
enum Phase {
    Loading,
    Ready,
    Error(String),
}

/// Each fetch writes only its own slot: the user fetch owns `users` and
/// the phase transition, the quiz fetch owns `quizzes_by_creator`.
struct ScreenSlots {
    phase: Phase,
    users: Vec<UserProfile>,
    quizzes_by_creator: QuizGrouping,
}

/// View model for the social screen: resolves the signed-in user, runs
/// the two collection fetches, and composes the screen state.
pub struct SocialScreen {
    identity: Arc<dyn IdentityProvider>,
    quiz_service: Arc<QuizService>,
    user_service: Arc<UserService>,
    notifier: Arc<dyn NotificationSink>,
    slots: Mutex<ScreenSlots>,
    active: AtomicBool,
}

impl SocialScreen {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        quiz_service: Arc<QuizService>,
        user_service: Arc<UserService>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            identity,
            quiz_service,
            user_service,
            notifier,
            slots: Mutex::new(ScreenSlots {
                phase: Phase::Loading,
                users: Vec::new(),
                quizzes_by_creator: QuizGrouping::new(),
            }),
            active: AtomicBool::new(true),
        }
    }

    /// Snapshot of the current screen state.
    pub async fn state(&self) -> ScreenState {
        let slots = self.slots.lock().await;
        match &slots.phase {
            Phase::Loading => ScreenState::Loading,
            Phase::Error(message) => ScreenState::Error(message.clone()),
            Phase::Ready => ScreenState::Ready {
                users: slots.users.clone(),
                quizzes_by_creator: slots.quizzes_by_creator.clone(),
            },
        }
    }

    /// Runs both fetches to completion. The screen leaves `Loading` the
    /// moment the user fetch settles; the quiz grouping fills its own
    /// slot whenever that fetch completes, before or after.
    pub async fn refresh(&self) {
        let resolved = match self.identity.current_user_id().await {
            Ok(resolved) => resolved,
            Err(err) => {
                log::warn!("identity lookup failed [{}]: {}", err.error_code(), err);
                None
            }
        };

        let Some(current_user_id) = resolved else {
            let message = AppError::NotAuthenticated.to_string();
            self.notifier.show(StatusKind::Error, &message);
            self.set_phase(Phase::Error(message)).await;
            return;
        };

        futures::join!(
            self.load_quizzes(&current_user_id),
            self.load_users(&current_user_id)
        );
    }

    /// Fire-and-forget activation: spawns `refresh` onto the runtime.
    pub fn activate(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move { self.refresh().await })
    }

    /// Marks the screen as torn down. Fetches settling afterwards are
    /// discarded instead of written into the slots.
    pub fn teardown(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// The user closed the current status message.
    pub fn dismiss_status(&self) {
        self.notifier.dismiss();
    }

    pub fn handle_profile_click(&self, index: usize) {
        log::info!("profile clicked: {}", index);
    }

    async fn load_users(&self, current_user_id: &str) {
        let result = self.user_service.fetch_display_list(current_user_id).await;
        if !self.active.load(Ordering::SeqCst) {
            log::debug!("discarding user fetch result after teardown");
            return;
        }

        let mut slots = self.slots.lock().await;
        match result {
            Ok(users) => {
                slots.users = users;
                slots.phase = Phase::Ready;
            }
            Err(err) => {
                log::warn!("user fetch failed [{}]: {}", err.error_code(), err);
                let message = "Failed to get users".to_string();
                self.notifier.show(StatusKind::Error, &message);
                slots.phase = Phase::Error(message);
            }
        }
    }

    async fn load_quizzes(&self, current_user_id: &str) {
        let result = self
            .quiz_service
            .fetch_grouped_by_creator(current_user_id)
            .await;
        if !self.active.load(Ordering::SeqCst) {
            log::debug!("discarding quiz fetch result after teardown");
            return;
        }

        match result {
            Ok(grouping) => {
                self.slots.lock().await.quizzes_by_creator = grouping;
            }
            Err(err) => {
                // The grouping slot keeps its empty default so profiles
                // still render, just without quizzes.
                log::warn!("quiz fetch failed [{}]: {}", err.error_code(), err);
                self.notifier.show(StatusKind::Error, "Failed to get quizes");
            }
        }
    }

    async fn set_phase(&self, phase: Phase) {
        if !self.active.load(Ordering::SeqCst) {
            return;
        }
        self.slots.lock().await.phase = phase;
    }
}
