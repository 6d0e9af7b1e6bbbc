//! WaniKani API access.
//!
//! This module provides:
//! - [`ApiConfig`] for endpoint configuration
//! - [`WaniKaniClient`] for authentication and catalog download
//! - [`Session`], the immutable result of authentication
//! - Response models in [`models`]

pub mod client;
pub mod config;
pub mod models;
pub mod session;

pub use client::{FetchProgress, WaniKaniClient};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use session::Session;
