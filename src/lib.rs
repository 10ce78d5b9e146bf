//! # linksnip
//!
//! A small URL-shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and the repository trait
//! - **Application Layer** ([`application`]) - Shortening, redirect, import, and stats services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Idempotent shortening: the same URL maps to the same short link
//! - Optional aliases with silent collision resolution
//! - Asynchronous click counting decoupled from the redirect path
//! - Bulk import with per-record outcomes
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional; see the config module for variables
//! export DATABASE_URL="sqlite://urls.db"
//! export BASE_URL="http://localhost:3001"
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ImportService, LinkService, RedirectService, StatsService,
    };
    pub use crate::domain::entities::{ImportRecord, ImportReport, Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
