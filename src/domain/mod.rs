//! Domain layer containing business entities and contracts.
//!
//! Defines entities, the repository interface, and the click processing
//! primitives, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. Redirect resolver looks up the target URL
//! 2. A [`click_event::ClickEvent`] is sent to a bounded channel
//! 3. [`click_worker::run_click_worker`] drains the channel and increments
//!    counters via [`repositories::LinkRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
