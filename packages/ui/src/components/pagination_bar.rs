use dioxus::prelude::*;

use crate::pagination::Pagination;

/// Summary line plus First / Previous / page window / Next / Last controls.
///
/// Every click is reported through `on_page`; the controller decides whether the
/// target is worth fetching.
#[component]
pub fn PaginationBar(pagination: Pagination, on_page: EventHandler<u32>) -> Element {
    if pagination.total_pages == 0 {
        return rsx! {};
    }

    let current = pagination.current_page;
    let last = pagination.total_pages;
    let summary = pagination.summary();

    rsx! {
        nav {
            class: "pagination",
            if let Some(summary) = summary {
                p { class: "pagination-summary", "{summary}" }
            }
            div {
                class: "pagination-controls",
                button {
                    class: "page-link",
                    disabled: !pagination.has_previous(),
                    onclick: move |_| on_page.call(1),
                    "First"
                }
                button {
                    class: "page-link",
                    disabled: !pagination.has_previous(),
                    onclick: move |_| on_page.call(current.saturating_sub(1)),
                    "Previous"
                }
                for page in pagination.window() {
                    button {
                        key: "{page}",
                        class: if page == current {
                            "page-link page-link--active"
                        } else {
                            "page-link"
                        },
                        onclick: move |_| on_page.call(page),
                        "{page}"
                    }
                }
                button {
                    class: "page-link",
                    disabled: !pagination.has_next(),
                    onclick: move |_| on_page.call(current + 1),
                    "Next"
                }
                button {
                    class: "page-link",
                    disabled: !pagination.has_next(),
                    onclick: move |_| on_page.call(last),
                    "Last"
                }
            }
        }
    }
}
