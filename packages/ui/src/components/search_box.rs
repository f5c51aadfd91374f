use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Controlled search input. Debouncing is the caller's job.
#[component]
pub fn SearchBox(value: String, on_search: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "text",
                placeholder: "Search users...",
                value: value,
                oninput: move |evt: FormEvent| on_search.call(evt.value()),
            }
        }
    }
}
