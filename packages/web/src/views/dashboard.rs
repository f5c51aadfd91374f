use dioxus::prelude::*;
use ui::DashboardView;

use super::nav_links;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        DashboardView { navigation: nav_links() }
    }
}
