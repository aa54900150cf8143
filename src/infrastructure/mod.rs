//! # Infrastructure Layer
//!
//! Adapters backing the domain: the record store lives here.

pub mod persistence;

pub use persistence as repos;
