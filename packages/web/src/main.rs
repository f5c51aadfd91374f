use dioxus::prelude::*;

use store::DashboardConfig;
use ui::{load_dark_mode, DarkModeSignal, ServiceProvider, ToastProvider};
use views::{Dashboard, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/users")]
    Users {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Settings baked into the bundle; `DASHBOARD_API_URL` still overrides the base URL.
const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut dark_mode: DarkModeSignal = use_context_provider(|| Signal::new(false));
    use_effect(move || load_dark_mode(&mut dark_mode));

    let config = use_hook(|| {
        let config = DashboardConfig::load(DASHBOARD_TOML);
        tracing::info!(
            "dashboard config: api={} page_size={} debounce={}ms",
            config.api.base_url,
            config.pagination.page_size,
            config.search.debounce_ms
        );
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Stylesheet { href: ui::DASHBOARD_CSS }

        ServiceProvider {
            config,
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
