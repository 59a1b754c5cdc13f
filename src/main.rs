use log::{error, info};

use quiz_social::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    screens::ScreenState,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config)?;

    if let Err(err) = state.store.health_check().await {
        log::warn!("document store unreachable [{}]: {}", err.error_code(), err);
    }

    let screen = state.social_screen();
    screen.refresh().await;

    match screen.state().await {
        ScreenState::Loading => info!("screen still loading"),
        ScreenState::Ready {
            users,
            quizzes_by_creator,
        } => {
            info!("{} profiles to show", users.len());
            for profile in &users {
                let quiz_count = profile
                    .user_id
                    .as_deref()
                    .and_then(|id| quizzes_by_creator.get(id))
                    .map_or(0, Vec::len);
                info!("  {}: {} quizzes", profile.display_name(), quiz_count);
            }
        }
        ScreenState::Error(message) => error!("{}", message),
    }

    Ok(())
}
