//! # API Layer
//!
//! External interfaces for the trade query service.
//!
//! ## Protocols
//!
//! - **REST**: the read-only trade query surface
//!
//! The transport layer owns parameter parsing and coercion, range
//! validation of pagination inputs, wire-name serialization and the
//! mapping of NotFound to a documented response. The query engine
//! underneath assumes validated inputs.

pub mod rest;

pub use rest as rest_api;
