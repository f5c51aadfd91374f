//! # API crate: client for the remote user service
//!
//! Everything the dashboard knows about the REST backend lives here: the wire
//! models, the error taxonomy, and the [`UserService`] trait with its two
//! implementations.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`UserRecord`], [`UserDraft`], [`UserId`] and the paged envelope [`UserPage`] |
//! | [`error`] | [`ApiError`] (transport / server / decode) and per-operation fallback messages |
//! | [`service`] | The async [`UserService`] trait: list, get, create, update, delete |
//! | [`http`] | [`HttpUserService`], the `reqwest` implementation used by the app |
//! | [`memory`] | [`MemoryUserService`], an in-process implementation for tests and demos |
//!
//! The server is the only source of truth. Nothing in this crate caches: every
//! call is a single request whose result the caller owns.

pub mod error;
pub mod http;
pub mod memory;
pub mod models;
pub mod service;

pub use error::{ApiError, Operation};
pub use http::HttpUserService;
pub use memory::MemoryUserService;
pub use models::{UserDraft, UserId, UserPage, UserRecord};
pub use service::UserService;

pub use store::DashboardConfig;
