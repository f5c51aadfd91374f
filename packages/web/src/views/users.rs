use dioxus::prelude::*;
use ui::UsersView;

use super::nav_links;

#[component]
pub fn Users() -> Element {
    rsx! {
        UsersView { navigation: nav_links() }
    }
}
