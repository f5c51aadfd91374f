use dioxus::prelude::*;

/// Page-level error display with an optional retry button.
#[component]
pub fn ErrorMessage(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "error-message",
            role: "alert",
            p { "{message}" }
            if let Some(on_retry) = on_retry {
                button {
                    class: "btn btn--outline",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
