//! Data models for the user service.

mod page;
mod user;

pub use page::UserPage;
pub use user::{UserDraft, UserId, UserRecord};
