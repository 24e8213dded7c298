//! # Time Service
//!
//! A small web service that displays the current wall-clock time for a
//! requested IANA timezone.
//!
//! ## Features
//! - `/time` pages guarded by a request-validation filter
//! - Rejects unknown query parameters and unparseable timezones with a
//!   rendered HTML error page (HTTP 400)
//! - Remembers the last requested zone in a `lastTimezone` cookie
//! - Health endpoint for liveness probes

/// Configuration management and environment variables
pub mod config;
/// Router assembly, the timezone filter, and page handlers
pub mod server;
/// HTML template engine and page rendering
pub mod templates;
/// Utility functions for validation and logging
pub mod utils;
