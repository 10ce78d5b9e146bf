//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations

pub mod persistence;
