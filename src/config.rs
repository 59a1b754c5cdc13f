use std::env;
use std::path::PathBuf;

use secrecy::SecretString;
use validator::Validate;

#[derive(Clone, Debug, Validate)]
pub struct Config {
    #[validate(url)]
    pub store_base_url: String,
    pub store_auth_token: Option<SecretString>,
    #[validate(length(min = 1))]
    pub quizzes_path: String,
    #[validate(length(min = 1))]
    pub users_path: String,
    pub session_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            store_base_url: env::var("STORE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
            store_auth_token: env::var("STORE_AUTH_TOKEN").ok().map(SecretString::from),
            // "quizes" is the collection path the mobile clients write to
            quizzes_path: env::var("QUIZZES_PATH").unwrap_or_else(|_| "quizes".to_string()),
            users_path: env::var("USERS_PATH").unwrap_or_else(|_| "users".to_string()),
            session_dir: env::var("SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".quiz-social")),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the store is still pointed at the local default
    pub fn validate_for_production(&self) {
        if self.store_base_url == "http://localhost:9000" {
            panic!(
                "FATAL: STORE_BASE_URL is using the local default! Set STORE_BASE_URL to the real document store."
            );
        }

        if self.store_auth_token.is_none() {
            panic!("FATAL: STORE_AUTH_TOKEN is not set! The production store rejects anonymous reads.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            store_base_url: "http://localhost:9000".to_string(),
            store_auth_token: Some(SecretString::from("test-token".to_string())),
            quizzes_path: "quizes".to_string(),
            users_path: "users".to_string(),
            session_dir: PathBuf::from(".quiz-social-test"),
        }
    }
}
