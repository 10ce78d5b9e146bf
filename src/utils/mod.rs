//! Utility functions shared across the application.
//!
//! - [`id_generator`] - Short identifier generation

pub mod id_generator;
