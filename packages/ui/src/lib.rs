//! Shared UI for the user dashboard.
//!
//! The pure pieces (`controller`, `pagination`, `sorting`, `validation`,
//! `debounce`, `submission`) hold all of the page logic and are tested without
//! a DOM. Components and views are thin Dioxus wrappers over them.

use dioxus::prelude::*;

pub mod components;
pub mod controller;
pub mod debounce;
pub mod latest;
pub mod pagination;
pub mod sorting;
pub mod submission;
pub mod validation;
pub mod views;

mod service;
mod theme;
mod timer;
mod toast;
mod users_controller;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub use controller::{DashboardState, UserQuery};
pub use service::{use_dashboard_config, use_user_service, ServiceProvider};
pub use theme::{apply_dark_mode, load_dark_mode, DarkModeSignal, DarkModeToggle};
pub use toast::{show_toast, use_toasts, Toast, ToastKind, ToastProvider, Toasts, TOAST_DURATION};
pub use users_controller::{use_users_controller, UsersController};
pub use views::{DashboardView, UsersView};

pub const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");
