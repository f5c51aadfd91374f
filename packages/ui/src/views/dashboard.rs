use api::UserRecord;
use dioxus::prelude::*;

use crate::components::{
    ConfirmDialog, ErrorMessage, LoadingSpinner, PaginationBar, SearchBox, StatCard, UserForm,
    UserTable,
};
use crate::icons::{FaPlus, FaUsers};
use crate::submission::FormMode;
use crate::theme::DarkModeToggle;
use crate::toast::{show_toast, use_toasts, ToastKind};
use crate::users_controller::use_users_controller;
use crate::views::ModalOverlay;
use crate::Icon;

/// Full dashboard: side navigation, search header, stat card, and the user
/// table with add/edit in a modal.
///
/// `navigation` is rendered inside the sidebar so the app can supply router links.
#[component]
pub fn DashboardView(navigation: Element) -> Element {
    let controller = use_users_controller();
    let mut toasts = use_toasts();
    let mut form_mode = use_signal(|| Option::<FormMode>::None);
    let mut pending_delete = use_signal(|| Option::<UserRecord>::None);

    let state = controller.state.read().clone();

    let on_edit = move |user: UserRecord| {
        spawn(async move {
            match controller.fetch_user(user.id).await {
                Ok(record) => form_mode.set(Some(FormMode::Edit(record))),
                Err(e) => show_toast(&mut toasts, ToastKind::Error, &e.to_string()),
            }
        });
    };

    let form_modal = form_mode().map(move |mode| {
        let title = mode.title();
        let key = form_key(&mode);
        let message = mode.success_message();
        rsx! {
            ModalOverlay {
                on_close: move |_| form_mode.set(None),
                div {
                    class: "modal-body",
                    h2 { class: "modal-title", "{title}" }
                    UserForm {
                        key: "{key}",
                        mode,
                        on_complete: move |_| {
                            form_mode.set(None);
                            controller.saved(message);
                        },
                        on_cancel: move |_| form_mode.set(None),
                    }
                }
            }
        }
    });

    let delete_modal = pending_delete().map(move |user| {
        let message = format!("Are you sure you want to delete {}?", user.name);
        rsx! {
            ConfirmDialog {
                title: "Delete User",
                message,
                on_confirm: move |_| {
                    pending_delete.set(None);
                    controller.delete(user.clone());
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    });

    rsx! {
        div {
            class: "dashboard",
            aside {
                class: "dashboard-sidebar",
                div { class: "dashboard-brand", "User Dashboard" }
                nav { class: "dashboard-nav", {navigation} }
            }

            div {
                class: "dashboard-main",
                header {
                    class: "dashboard-header",
                    SearchBox {
                        value: state.search.clone(),
                        on_search: move |term: String| controller.search(term),
                    }
                    DarkModeToggle {}
                }

                main {
                    class: "dashboard-content",
                    StatCard {
                        label: "Total Users",
                        value: state.pagination.total_users.to_string(),
                        Icon { icon: FaUsers, width: 20, height: 20 }
                    }

                    section {
                        class: "panel",
                        div {
                            class: "panel-header",
                            h1 { class: "panel-title", "Users" }
                            button {
                                class: "btn btn--primary",
                                onclick: move |_| form_mode.set(Some(FormMode::Create)),
                                Icon { icon: FaPlus, width: 12, height: 12 }
                                "Add New User"
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
                            p {
                                class: "empty-state",
                                "No users found. Add one using the button above!"
                            }
                        } else {
                            UserTable {
                                users: state.users.clone(),
                                on_edit,
                                on_delete: move |user| pending_delete.set(Some(user)),
                            }
                            PaginationBar {
                                pagination: state.pagination,
                                on_page: move |page| controller.go_to_page(page),
                            }
                        }
                    }
                }
            }
        }

        {form_modal}
        {delete_modal}
    }
}

/// Remount the form whenever the record being edited changes.
pub(crate) fn form_key(mode: &FormMode) -> String {
    match mode {
        FormMode::Create => "create".to_string(),
        FormMode::Edit(user) => format!("edit-{}", user.id),
    }
}
