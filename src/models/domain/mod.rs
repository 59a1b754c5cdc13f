pub mod quiz;
pub mod user_profile;

pub use quiz::{QuizDocument, QuizRecord};
pub use user_profile::UserProfile;
