use crate::error::ApiError;
use crate::models::{UserDraft, UserId, UserPage, UserRecord};

/// Async interface to the remote user service.
///
/// Each method is a single attempt: no retry, no timeout, no backoff.
/// Implementations live in sibling modules ([`crate::http`], [`crate::memory`]).
pub trait UserService {
    /// Fetch one page of users matching `search` (empty matches all).
    fn list_users(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> impl std::future::Future<Output = Result<UserPage, ApiError>>;

    fn get_user(
        &self,
        id: &UserId,
    ) -> impl std::future::Future<Output = Result<UserRecord, ApiError>>;

    fn create_user(
        &self,
        draft: &UserDraft,
    ) -> impl std::future::Future<Output = Result<UserRecord, ApiError>>;

    /// Replace the name and email of an existing user.
    fn update_user(
        &self,
        id: &UserId,
        draft: &UserDraft,
    ) -> impl std::future::Future<Output = Result<UserRecord, ApiError>>;

    fn delete_user(
        &self,
        id: &UserId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}
