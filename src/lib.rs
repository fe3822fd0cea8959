// Surveyor - SurveyMonkey Response Export Tool
// Copyright (c) 2025 Surveyor Contributors
// Licensed under the MIT License

//! # Surveyor - SurveyMonkey Response Export
//!
//! Surveyor is an ETL tool built in Rust that exports survey responses from
//! the SurveyMonkey v3 API into normalized JSON records, incrementally and
//! crash-safely.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** responses page by page via the bulk responses endpoint
//! - **Transforming** raw answers into typed fields using per-survey schemas
//! - **Storing** normalized records through pluggable sinks
//! - **Checkpointing** progress with per-survey watermarks for incremental sync
//!
//! ## Architecture
//!
//! Surveyor follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export, transform, state)
//! - [`adapters`] - External integrations (SurveyMonkey, sinks, state store)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Incremental Sync
//!
//! Surveyor tracks the maximum `date_modified` of each fully stored page in
//! a per-survey watermark. A page is checkpointed only after every one of
//! its responses has been stored, so interrupted runs resume from the last
//! committed page and can only re-deliver, never skip, responses.
//!
//! ## Error Handling
//!
//! Surveyor uses the [`domain::SurveyorError`] type for all errors:
//!
//! ```rust,no_run
//! use surveyor::domain::SurveyorError;
//!
//! fn example() -> Result<(), SurveyorError> {
//!     let config = surveyor::config::load_config("surveyor.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Surveyor uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting export");
//! warn!(survey_id = "316084387", "No responses in page");
//! error!(error = "timeout", "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
