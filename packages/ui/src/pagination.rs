//! # Pagination window and summary
//!
//! The server returns `currentPage`, `totalPages` and `totalUsers` with every
//! list response. [`Pagination`] keeps those alongside the page size the client
//! asked for and derives everything the pagination bar shows:
//!
//! - [`page_window`]: up to [`WINDOW_SIZE`] contiguous page numbers centred on
//!   the current page, slid left when the right edge is clamped.
//! - [`Pagination::summary`]: `"Showing 21 to 23 of 23 users"`.
//! - [`Pagination::accepts`]: whether a page-change target should trigger a fetch.
//!   Targets outside `[1, totalPages]` and the current page itself are ignored.

use api::UserPage;

/// Number of page links shown at once.
pub const WINDOW_SIZE: u32 = 5;

/// Page numbers to show around `current_page`.
///
/// Returns `min(WINDOW_SIZE, total_pages)` ascending, contiguous numbers, or an
/// empty list when there are no pages. A `current_page` outside
/// `[1, total_pages]` is clamped into it.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current_page = current_page.clamp(1, total_pages);
    let half_range = WINDOW_SIZE / 2;
    let mut start = current_page.saturating_sub(half_range).max(1);
    let end = (start + WINDOW_SIZE - 1).min(total_pages);
    if end - start + 1 < WINDOW_SIZE {
        start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
    }

    (start..=end).collect()
}

/// Pagination metadata for the page currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_users: u64,
    pub limit: u32,
}

impl Pagination {
    pub fn from_page(page: &UserPage, limit: u32) -> Self {
        Self {
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_users: page.total_users,
            limit,
        }
    }

    pub fn window(&self) -> Vec<u32> {
        page_window(self.current_page, self.total_pages)
    }

    /// Whether navigating to `target` should fetch anything.
    pub fn accepts(&self, target: u32) -> bool {
        target >= 1 && target <= self.total_pages && target != self.current_page
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// `"Showing {start} to {end} of {total} users"`, or `None` when there are no users.
    pub fn summary(&self) -> Option<String> {
        if self.total_users == 0 || self.current_page == 0 {
            return None;
        }
        let limit = u64::from(self.limit.max(1));
        let page = u64::from(self.current_page);
        let start = (page - 1) * limit + 1;
        let end = (page * limit).min(self.total_users);
        Some(format!(
            "Showing {start} to {end} of {} users",
            self.total_users
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_properties_hold_for_every_page() {
        for total in 1..=20u32 {
            for current in 1..=total {
                let window = page_window(current, total);
                let context = format!("total={total} current={current}");
                assert_eq!(window.len() as u32, WINDOW_SIZE.min(total), "{context}");
                assert!(window.contains(&current), "{context}");
                assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
                assert!(window[0] >= 1 && *window.last().unwrap() <= total);
            }
        }
    }

    #[test]
    fn test_window_examples() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_empty_without_pages() {
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_window_clamps_current_page_past_the_end() {
        assert_eq!(page_window(10, 3), vec![1, 2, 3]);
        assert_eq!(page_window(0, 3), vec![1, 2, 3]);

        let stale = Pagination {
            current_page: 10,
            total_pages: 3,
            total_users: 23,
            limit: 10,
        };
        assert_eq!(stale.window(), vec![1, 2, 3]);
    }

    #[test]
    fn test_last_page_scenario() {
        let pagination = Pagination {
            current_page: 3,
            total_pages: 3,
            total_users: 23,
            limit: 10,
        };
        assert_eq!(pagination.total_pages, 3);
        assert!(!pagination.accepts(4));
        assert!(!pagination.accepts(0));
        assert!(!pagination.accepts(3));
        assert!(pagination.accepts(1));
        assert!(!pagination.has_next());
        assert_eq!(
            pagination.summary().as_deref(),
            Some("Showing 21 to 23 of 23 users")
        );
    }

    #[test]
    fn test_summary_first_page_and_empty() {
        let first = Pagination {
            current_page: 1,
            total_pages: 3,
            total_users: 23,
            limit: 10,
        };
        assert_eq!(first.summary().as_deref(), Some("Showing 1 to 10 of 23 users"));
        assert!(!first.has_previous());

        assert_eq!(Pagination::default().summary(), None);
    }
}
