//! Domain rules for the article service.
//!
//! This crate performs no I/O. It holds the shared id/timestamp types,
//! the domain error type, and the article input rules (allow-list and
//! validation) so both the persistence and HTTP layers agree on them.

pub mod article;
pub mod error;
pub mod types;
