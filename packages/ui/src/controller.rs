//! # Dashboard controller state
//!
//! [`DashboardState`] is the only holder of cross-cutting UI state: the users on
//! screen, the pagination metadata, the search term, and the loading/error flags.
//! Views keep it in a `Signal<DashboardState>` and drive it with two steps:
//!
//! 1. [`load`] fetches a page through a [`UserService`], guarded by a
//!    [`LatestGate`](crate::latest::LatestGate) ticket so that a slower
//!    response to an older request is discarded instead of overwriting newer
//!    results.
//! 2. [`DashboardState::apply`] folds the outcome into state.
//!
//! The server is the source of truth. After every create, update or delete the
//! dashboard re-fetches the current page ([`DashboardState::current_query`])
//! rather than patching the local list.

use api::{ApiError, UserPage, UserRecord, UserService};

use crate::latest::Ticket;
use crate::pagination::Pagination;

/// Default number of users per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Arguments of one list request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub users: Vec<UserRecord>,
    pub pagination: Pagination,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    limit: u32,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DashboardState {
    pub fn new(limit: u32) -> Self {
        let limit = limit.max(1);
        Self {
            users: Vec::new(),
            pagination: Pagination {
                current_page: 1,
                limit,
                ..Pagination::default()
            },
            search: String::new(),
            loading: true,
            error: None,
            limit,
        }
    }

    fn query(&self, page: u32) -> UserQuery {
        UserQuery {
            page: page.max(1),
            limit: self.limit,
            search: self.search.clone(),
        }
    }

    /// The page on screen, for re-fetching after a mutation.
    pub fn current_query(&self) -> UserQuery {
        self.query(self.pagination.current_page)
    }

    /// Record a new search term and return the page-1 query it triggers.
    pub fn search_query(&mut self, term: &str) -> UserQuery {
        self.search = term.to_string();
        self.query(1)
    }

    /// Query for a page-change request, or `None` when `target` is out of range
    /// or already showing.
    pub fn page_request(&self, target: u32) -> Option<UserQuery> {
        self.pagination.accepts(target).then(|| self.query(target))
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply(&mut self, result: Result<UserPage, ApiError>) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.pagination = Pagination::from_page(&page, self.limit);
                self.users = page.users;
                self.error = None;
            }
            Err(e) => {
                self.users.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    /// Whether the spinner replaces the table.
    ///
    /// Only a load with nothing on screen yet shows it. Reloads keep the current
    /// rows, and the table component, mounted.
    pub fn shows_spinner(&self) -> bool {
        self.loading && self.users.is_empty()
    }

    /// Whether the current search matches nothing at all.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.users.is_empty()
    }
}

/// Fetch the page described by `query`.
///
/// Returns `None` when `ticket` was superseded while the request was in flight.
/// A page past the end (left behind when the last row of the last page is
/// deleted) is replaced by the new last page.
pub async fn load<S: UserService>(
    service: &S,
    ticket: Ticket,
    query: &UserQuery,
) -> Option<Result<UserPage, ApiError>> {
    let mut result = service
        .list_users(query.page, query.limit, &query.search)
        .await;

    let past_end = match &result {
        Ok(page)
            if page.users.is_empty()
                && page.total_pages >= 1
                && query.page > page.total_pages =>
        {
            Some(page.total_pages)
        }
        _ => None,
    };
    if let Some(last) = past_end {
        tracing::debug!("page {} is past the end, loading page {}", query.page, last);
        result = service.list_users(last, query.limit, &query.search).await;
    }

    if !ticket.is_current() {
        tracing::warn!(
            "discarding stale response for page {} search {:?}",
            query.page,
            query.search
        );
        return None;
    }
    Some(result)
}
