use api::{ApiError, HttpUserService, UserId, UserRecord, UserService};
use dioxus::prelude::*;

use crate::controller::{load, DashboardState, UserQuery};
use crate::debounce::Debouncer;
use crate::latest::LatestGate;
use crate::service::{use_dashboard_config, use_user_service};
use crate::toast::{show_toast, use_toasts, ToastKind, Toasts};

/// Handle to the page-level controller created by [`use_users_controller`].
///
/// All reads inside use `peek` so that calling these methods from an effect does
/// not subscribe the effect to controller state.
#[derive(Clone, Copy, PartialEq)]
pub struct UsersController {
    pub state: Signal<DashboardState>,
    service: Signal<HttpUserService>,
    gate: Signal<LatestGate>,
    debouncer: Signal<Debouncer>,
    toasts: Signal<Toasts>,
}

/// Create the controller for a users page and fetch the first page on mount.
pub fn use_users_controller() -> UsersController {
    let config = use_dashboard_config();
    let service = use_user_service();
    let page_size = config.pagination.page_size;
    let debounce = config.debounce();

    let controller = UsersController {
        state: use_signal(move || DashboardState::new(page_size)),
        service: use_signal(move || service),
        gate: use_signal(LatestGate::new),
        debouncer: use_signal(move || Debouncer::new(debounce)),
        toasts: use_toasts(),
    };

    use_effect(move || controller.reload());

    // Nothing scheduled by this page may land after it unmounts.
    let debouncer = controller.debouncer.peek().clone();
    let gate = controller.gate.peek().clone();
    use_drop(move || {
        debouncer.cancel();
        gate.invalidate();
    });

    controller
}

impl UsersController {
    /// Fetch `query`, discarding the result if a newer fetch starts meanwhile.
    pub fn fetch(&self, query: UserQuery) {
        let mut state = self.state;
        let service = self.service.peek().clone();
        let ticket = self.gate.peek().issue();
        state.write().begin_load();

        spawn(async move {
            if let Some(result) = load(&service, ticket, &query).await {
                if let Err(e) = &result {
                    tracing::warn!("loading users failed: {}", e);
                }
                state.write().apply(result);
            }
        });
    }

    /// Re-fetch the page on screen.
    pub fn reload(&self) {
        let query = self.state.peek().current_query();
        self.fetch(query);
    }

    /// Update the search term now and fetch page 1 once typing pauses.
    pub fn search(&self, term: String) {
        let mut state = self.state;
        let query = state.write().search_query(&term);
        let debouncer = self.debouncer.peek().clone();
        let this = *self;
        spawn(async move {
            debouncer.call(move || async move { this.fetch(query) }).await;
        });
    }

    /// Go to `target`; out-of-range targets and the current page are ignored.
    pub fn go_to_page(&self, target: u32) {
        let request = self.state.peek().page_request(target);
        match request {
            Some(query) => self.fetch(query),
            None => tracing::debug!("ignoring page change to {}", target),
        }
    }

    /// Load the authoritative copy of a user.
    pub async fn fetch_user(&self, id: UserId) -> Result<UserRecord, ApiError> {
        let service = self.service.peek().clone();
        service.get_user(&id).await
    }

    /// Delete `user`, report the outcome, and re-fetch the current page.
    pub fn delete(&self, user: UserRecord) {
        let service = self.service.peek().clone();
        let mut toasts = self.toasts;
        let this = *self;
        spawn(async move {
            match service.delete_user(&user.id).await {
                Ok(()) => {
                    show_toast(&mut toasts, ToastKind::Success, "User deleted successfully!");
                    this.reload();
                }
                Err(e) => show_toast(&mut toasts, ToastKind::Error, &e.to_string()),
            }
        });
    }

    /// Called after the form saved a record.
    pub fn saved(&self, message: &str) {
        let mut toasts = self.toasts;
        show_toast(&mut toasts, ToastKind::Success, message);
        self.reload();
    }
}
