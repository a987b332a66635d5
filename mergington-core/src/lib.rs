//! Core domain for the Mergington activities service.
//!
//! The crate owns the [`ActivityRegistry`], the in-memory store that maps an
//! activity name to its [`Activity`] record, together with the seed roster the
//! registry starts from and the error taxonomy its operations report. The HTTP
//! surface lives in `mergington-server`; the route paths and wire types it
//! shares with clients are defined under [`api`].

/// Activity records.
pub mod activity;
pub mod api;
/// Registry error taxonomy.
pub mod error;
pub mod registry;
pub mod seed;

pub use activity::{Activity, ActivityRoster};
pub use error::{RegistryError, Result};
pub use registry::ActivityRegistry;
