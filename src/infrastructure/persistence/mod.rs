//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
