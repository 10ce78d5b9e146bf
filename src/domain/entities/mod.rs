//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping, the sole persisted entity
//! - [`ImportRecord`] / [`ImportOutcome`] / [`ImportReport`] - Bulk import
//!   input and per-record results
//!
//! Creation uses a separate input struct ([`NewLink`]) so callers never
//! hand-construct persisted state.

pub mod import;
pub mod link;

pub use import::{ImportOutcome, ImportRecord, ImportReport};
pub use link::{Link, NewLink};
