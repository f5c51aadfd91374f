use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner", role: "status", "aria-label": "Loading" }
        }
    }
}
