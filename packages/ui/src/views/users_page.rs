use dioxus::prelude::*;

use crate::components::{
    ErrorMessage, LoadingSpinner, PaginationBar, SearchBox, UserForm, UserTable,
};
use crate::submission::FormMode;
use crate::users_controller::use_users_controller;

/// Compact users page: inline add form above a searchable, paged table.
#[component]
pub fn UsersView(navigation: Element) -> Element {
    let controller = use_users_controller();
    let state = controller.state.read().clone();

    rsx! {
        div {
            class: "users-page",
            nav { class: "users-page-nav", {navigation} }

            section {
                class: "panel",
                h1 { class: "panel-title", "Add User" }
                UserForm {
                    on_complete: move |_| controller.saved(FormMode::Create.success_message()),
                }
            }

            section {
                class: "panel",
                div {
                    class: "panel-header",
                    h1 { class: "panel-title", "Users" }
                    SearchBox {
                        value: state.search.clone(),
                        on_search: move |term: String| controller.search(term),
                    }
                }

                if state.shows_spinner() {
                    LoadingSpinner {}
                } else if let Some(message) = state.error.clone() {
                    ErrorMessage {
                        message,
                        on_retry: move |_| controller.reload(),
                    }
                } else if state.is_empty() {
                    p { class: "empty-state", "No users found." }
                } else {
                    UserTable { users: state.users.clone() }
                    PaginationBar {
                        pagination: state.pagination,
                        on_page: move |page| controller.go_to_page(page),
                    }
                }
            }
        }
    }
}
