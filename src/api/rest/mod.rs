//! # REST API
//!
//! Trade query endpoints over HTTP.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
