pub mod social;

pub use social::{ScreenState, SocialScreen};
