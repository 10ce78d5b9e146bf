//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod health;
pub mod import;
pub mod shorten;
pub mod stats;
