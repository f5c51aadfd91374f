use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::models::{UserDraft, UserId, UserPage, UserRecord};
use crate::service::UserService;

#[derive(Debug, Default)]
struct Inner {
    users: Vec<UserRecord>,
    next_id: u64,
}

/// In-memory UserService for tests and offline demos.
///
/// Follows the REST backend's contract: case-insensitive substring search over
/// name and email, 1-based pages, `404` for unknown ids and `400` for drafts
/// missing a name or email.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserService {
    inner: Arc<Mutex<Inner>>,
    calls: Arc<AtomicUsize>,
}

impl MemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service pre-populated with the given `(name, email)` pairs, ids from 1.
    pub fn with_users(users: &[(&str, &str)]) -> Self {
        let service = Self::new();
        {
            let mut inner = service.lock();
            for (name, email) in users {
                inner.next_id += 1;
                let id = UserId::from(inner.next_id);
                inner.users.push(UserRecord {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                });
            }
        }
        service
    }

    /// Number of service calls made so far, successful or not.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn not_found(id: &UserId) -> ApiError {
    ApiError::Server {
        status: 404,
        message: format!("User {id} not found"),
    }
}

fn check_draft(draft: &UserDraft) -> Result<(), ApiError> {
    if draft.name.trim().is_empty() || draft.email.trim().is_empty() {
        return Err(ApiError::Server {
            status: 400,
            message: "Name and email are required".to_string(),
        });
    }
    Ok(())
}

impl UserService for MemoryUserService {
    async fn list_users(&self, page: u32, limit: u32, search: &str) -> Result<UserPage, ApiError> {
        self.record_call();
        let limit = limit.max(1);
        let needle = search.trim().to_lowercase();
        let inner = self.lock();
        let matching: Vec<&UserRecord> = inner
            .users
            .iter()
            .filter(|u| {
                needle.is_empty()
                    || u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .collect();

        let total_users = matching.len() as u64;
        let total_pages = matching.len().div_ceil(limit as usize) as u32;
        let page = page.max(1);
        let start = (page as usize - 1) * limit as usize;
        let users = matching
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(UserPage {
            users,
            current_page: page,
            total_pages,
            total_users,
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<UserRecord, ApiError> {
        self.record_call();
        self.lock()
            .users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, ApiError> {
        self.record_call();
        check_draft(draft)?;
        let mut inner = self.lock();
        inner.next_id += 1;
        let record = UserRecord {
            id: UserId::from(inner.next_id),
            name: draft.name.clone(),
            email: draft.email.clone(),
        };
        inner.users.push(record.clone());
        Ok(record)
    }

    async fn update_user(&self, id: &UserId, draft: &UserDraft) -> Result<UserRecord, ApiError> {
        self.record_call();
        check_draft(draft)?;
        let mut inner = self.lock();
        let user = inner
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| not_found(id))?;
        user.name = draft.name.clone();
        user.email = draft.email.clone();
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        self.record_call();
        let mut inner = self.lock();
        let before = inner.users.len();
        inner.users.retain(|u| &u.id != id);
        if inner.users.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryUserService {
        MemoryUserService::with_users(&[
            ("Amit Sharma", "amit.sharma@example.com"),
            ("Priya Singh", "priya.singh@example.com"),
            ("Rahul Verma", "rahul.verma@example.com"),
        ])
    }

    #[tokio::test]
    async fn test_list_pages() {
        let names: Vec<String> = (1..=23).map(|i| format!("user{i}")).collect();
        let pairs: Vec<(String, String)> = names
            .iter()
            .map(|n| (n.clone(), format!("{n}@example.com")))
            .collect();
        let refs: Vec<(&str, &str)> = pairs.iter().map(|(n, e)| (n.as_str(), e.as_str())).collect();
        let service = MemoryUserService::with_users(&refs);

        let page = service.list_users(3, 10, "").await.unwrap();
        assert_eq!(page.total_users, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.users.len(), 3);
        assert_eq!(page.users[0].name, "user21");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_over_name_and_email() {
        let service = sample();

        let by_name = service.list_users(1, 10, "PRIYA").await.unwrap();
        assert_eq!(by_name.users.len(), 1);
        assert_eq!(by_name.users[0].name, "Priya Singh");

        let by_email = service.list_users(1, 10, "verma@").await.unwrap();
        assert_eq!(by_email.users.len(), 1);

        let none = service.list_users(1, 10, "zzz").await.unwrap();
        assert!(none.users.is_empty());
        assert_eq!(none.total_pages, 0);
    }

    #[tokio::test]
    async fn test_crud() {
        let service = sample();

        let created = service
            .create_user(&UserDraft::new("Neha Gupta", "neha@example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, UserId::from(4));
        assert_eq!(service.len(), 4);

        let fetched = service.get_user(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        let updated = service
            .update_user(&created.id, &UserDraft::new("Neha G", "neha.g@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.email, "neha.g@example.com");

        service.delete_user(&created.id).await.unwrap();
        assert_eq!(service.len(), 3);
        assert_eq!(service.call_count(), 4);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let service = sample();
        let missing = UserId::from(99);

        let err = service.get_user(&missing).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "User 99 not found");

        let err = service.delete_user(&missing).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_rejects_incomplete_draft() {
        let service = sample();
        let err = service
            .create_user(&UserDraft::new("", "x@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(service.len(), 3);
    }
}
