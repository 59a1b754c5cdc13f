pub mod quiz_service;
pub mod user_service;

pub use quiz_service::{group_by_creator, QuizGrouping, QuizService};
pub use user_service::{display_users, UserService};
