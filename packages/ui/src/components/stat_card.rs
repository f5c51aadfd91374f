use dioxus::prelude::*;

/// Dashboard summary tile. `children` renders as the tile's icon.
#[component]
pub fn StatCard(label: String, value: String, children: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-card-icon", {children} }
            div {
                h2 { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
            }
        }
    }
}
