//! Route paths and wire types shared by the server and its clients.

/// Route path constants.
pub mod routes;
/// Request and response bodies.
pub mod types;

pub use types::{ActionMessage, EmailQuery, ErrorBody};
