//! Logging and observability
//!
//! Structured logging built on tracing: console output for development,
//! JSON file output with rotation for production.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
