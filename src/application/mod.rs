//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and identifier-collision resolution
//! - [`services::redirect_service::RedirectService`] - Identifier resolution and click enqueueing
//! - [`services::import_service::ImportService`] - Sequential bulk import
//! - [`services::stats_service::StatsService`] - Read-only statistics

pub mod services;
