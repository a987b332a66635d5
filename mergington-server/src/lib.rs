//! HTTP surface of the Mergington activities service.
//!
//! The binary in `main.rs` loads configuration, seeds an
//! [`ActivityRegistry`](mergington_core::ActivityRegistry), wraps it in
//! [`AppState`], and serves the router built by [`create_app`].

pub mod app;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use app::create_app;
pub use infra::app_state::AppState;
pub use infra::errors::{AppError, AppResult};
