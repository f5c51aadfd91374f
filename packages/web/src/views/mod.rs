mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::Users;

use dioxus::prelude::*;

use crate::Route;

/// Links shared by both pages.
fn nav_links() -> Element {
    rsx! {
        Link { to: Route::Dashboard {}, "Dashboard" }
        Link { to: Route::Users {}, "Users" }
    }
}
