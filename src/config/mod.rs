//! Configuration management for Surveyor.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Surveyor uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SURVEYOR_*` environment variable overrides
//! - Default values for optional settings
//! - Eager validation, including the per-survey field→shape bindings
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use surveyor::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("surveyor.toml")?;
//!
//! println!("API: {}", config.surveymonkey.base_url);
//! println!("Surveys configured: {}", config.surveys.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [surveymonkey]
//! access_token = "${SURVEYMONKEY_ACCESS_TOKEN}"
//! page_size = 100
//!
//! [sink]
//! target = "file"
//! output_dir = "./export"
//!
//! [state]
//! state_dir = "./state"
//!
//! [[surveys]]
//! id = "316084387"
//! title = "Programming Trends in 2023"
//!
//! [surveys.questions]
//! "116254887" = "languages"
//! "116261824" = "would_recommend"
//!
//! [surveys.fields]
//! languages = "multi_choice"
//! would_recommend = "boolean"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportConfig, ExportMode, LoggingConfig, RetryConfig, SinkConfig,
    SinkTarget, StateConfig, SurveyEntry, SurveyMonkeyConfig, SurveyorConfig,
};
pub use secret::{SecretString, SecretValue};
