//! Dark mode: stored flag, document class, and the header toggle.

use dioxus::prelude::*;
use store::{PreferenceStore, Preferences};

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

/// Dark-mode flag shared through context.
pub type DarkModeSignal = Signal<bool>;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn preferences() -> Preferences<impl PreferenceStore> {
    Preferences::new(store::LocalStorage)
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn preferences() -> Preferences<impl PreferenceStore> {
    use std::sync::LazyLock;
    static SESSION: LazyLock<store::MemoryPreferences> =
        LazyLock::new(store::MemoryPreferences::new);
    Preferences::new(SESSION.clone())
}

/// Read the stored flag and apply it to the document.
pub fn load_dark_mode(signal: &mut DarkModeSignal) {
    let enabled = preferences().dark_mode();
    apply_dark_mode(enabled);
    signal.set(enabled);
}

/// Add or remove the `dark` class on the document root.
pub fn apply_dark_mode(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.class_list().toggle_with_force("dark", enabled) {
                tracing::error!("failed to toggle dark class: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("dark mode {}", if enabled { "on" } else { "off" });
}

/// Header button that flips dark mode and persists the choice.
#[component]
pub fn DarkModeToggle() -> Element {
    let mut dark = use_context::<DarkModeSignal>();

    rsx! {
        button {
            class: "icon-button",
            title: if dark() { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let enabled = !dark();
                apply_dark_mode(enabled);
                preferences().set_dark_mode(enabled);
                dark.set(enabled);
            },
            if dark() {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
