use api::UserRecord;
use dioxus::prelude::*;

use crate::icons::{FaPenToSquare, FaTrash};
use crate::sorting::{SortField, SortState};
use crate::Icon;

/// User list with click-to-sort headers.
///
/// Sorting is local to this component and resets when it unmounts. Edit and
/// delete clicks are handed to the caller; the table never modifies `users`.
#[component]
pub fn UserTable(
    users: Vec<UserRecord>,
    #[props(default)] on_edit: Option<EventHandler<UserRecord>>,
    #[props(default)] on_delete: Option<EventHandler<UserRecord>>,
) -> Element {
    let sort = use_signal(SortState::default);
    let sorted = sort().apply(&users);
    let show_actions = on_edit.is_some() || on_delete.is_some();

    rsx! {
        div {
            class: "table-wrap",
            table {
                class: "user-table",
                thead {
                    tr {
                        SortHeader { label: "Name", field: SortField::Name, sort }
                        SortHeader { label: "Email", field: SortField::Email, sort }
                        if show_actions {
                            th { class: "user-table-actions", "Actions" }
                        }
                    }
                }
                tbody {
                    for user in sorted {
                        tr {
                            key: "{user.id}",
                            td { "{user.name}" }
                            td { "{user.email}" }
                            if show_actions {
                                td {
                                    class: "user-table-actions",
                                    if let Some(on_edit) = on_edit {
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let user = user.clone();
                                                move |_| on_edit.call(user.clone())
                                            },
                                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        }
                                    }
                                    if let Some(on_delete) = on_delete {
                                        button {
                                            class: "icon-button icon-button--danger",
                                            title: "Delete",
                                            onclick: {
                                                let user = user.clone();
                                                move |_| on_delete.call(user.clone())
                                            },
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SortHeader(label: String, field: SortField, sort: Signal<SortState>) -> Element {
    let mut sort = sort;
    let indicator = sort().indicator(field).unwrap_or("");

    rsx! {
        th {
            class: "sortable",
            onclick: move |_| {
                let next = sort().toggled(field);
                sort.set(next);
            },
            "{label} {indicator}"
        }
    }
}
