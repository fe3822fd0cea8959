//! Configuration schema types
//!
//! This module defines the configuration structure for Surveyor as it maps to
//! the `surveyor.toml` file. Survey schemas are static configuration: the
//! question→field mapping and the field→shape bindings are declared here and
//! validated eagerly at load, never discovered from the provider.

use crate::config::SecretString;
use crate::domain::{AnswerShape, QuestionId, SurveyId, SurveySchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Storage sink selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkTarget {
    /// One JSON file per response under the output directory
    File,
    /// Print each normalized record to stdout as JSON
    Stdout,
}

/// Main Surveyor configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyorConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// SurveyMonkey API configuration
    pub surveymonkey: SurveyMonkeyConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Sink selection and settings
    pub sink: SinkConfig,

    /// Watermark state persistence settings
    pub state: StateConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Survey schemas to export, in run order
    #[serde(rename = "surveys")]
    pub surveys: Vec<SurveyEntry>,
}

impl SurveyorConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.surveymonkey.validate()?;
        self.export.validate()?;
        self.sink.validate()?;
        self.state.validate()?;
        self.logging.validate()?;

        if self.surveys.is_empty() {
            return Err("at least one [[surveys]] entry is required".to_string());
        }

        // Schema construction performs the eager question/field/shape checks
        let mut seen = std::collections::BTreeSet::new();
        for entry in &self.surveys {
            let schema = entry.to_schema()?;
            if !seen.insert(schema.id.clone()) {
                return Err(format!("duplicate [[surveys]] entry for id {}", schema.id));
            }
        }

        Ok(())
    }

    /// Resolve the configured survey entries into validated domain schemas
    ///
    /// Order is preserved: surveys are exported in the order they are listed.
    pub fn survey_schemas(&self) -> Result<Vec<SurveySchema>, String> {
        self.surveys.iter().map(SurveyEntry::to_schema).collect()
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Retry configuration for transient fetch failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Backoff multiplier
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

/// SurveyMonkey API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyMonkeyConfig {
    /// Base URL of the SurveyMonkey API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OAuth bearer token
    /// Stored securely in memory and automatically zeroized on drop
    pub access_token: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Responses fetched per page (provider maximum is 100)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Retry configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

impl SurveyMonkeyConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("surveymonkey.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("surveymonkey.base_url must start with http:// or https://".to_string());
        }

        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(format!("surveymonkey.base_url is not a valid URL: {e}"));
        }

        if self.access_token.expose_secret().is_empty() {
            return Err("surveymonkey.access_token cannot be empty".to_string());
        }

        if !(1..=100).contains(&self.page_size) {
            return Err(format!(
                "surveymonkey.page_size must be between 1 and 100, got {}",
                self.page_size
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("surveymonkey.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

/// Export mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Resume from the stored watermark
    #[default]
    Incremental,
    /// Ignore the stored watermark and fetch full history
    Full,
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incremental" => Ok(Self::Incremental),
            "full" => Ok(Self::Full),
            _ => Err(format!(
                "Invalid export mode '{s}'. Must be one of: incremental, full"
            )),
        }
    }
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incremental => write!(f, "incremental"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Export mode (full or incremental)
    #[serde(default)]
    pub mode: ExportMode,

    /// Dry run mode - fetch and transform without storing or checkpointing
    #[serde(default)]
    pub dry_run: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Sink backend (file or stdout)
    pub target: SinkTarget,

    /// Output directory for the file sink
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl SinkConfig {
    fn validate(&self) -> Result<(), String> {
        if self.target == SinkTarget::File && self.output_dir.is_empty() {
            return Err("sink.output_dir cannot be empty when sink.target = 'file'".to_string());
        }
        Ok(())
    }
}

/// Watermark state persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Directory holding one watermark document per survey
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
}

impl StateConfig {
    fn validate(&self) -> Result<(), String> {
        if self.state_dir.is_empty() {
            return Err("state.state_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging (console logging is always on)
    #[serde(default)]
    pub file_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.file_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.file_rotation '{}'. Must be one of: {}",
                self.file_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_path: default_log_path(),
            file_rotation: default_log_rotation(),
        }
    }
}

/// One configured survey: id, title and its transformation mappings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyEntry {
    /// Survey id (decimal digit string)
    pub id: String,

    /// Survey title (informational)
    #[serde(default)]
    pub title: String,

    /// Question id → normalized field name
    pub questions: BTreeMap<String, String>,

    /// Field name → answer shape binding
    pub fields: BTreeMap<String, String>,
}

impl SurveyEntry {
    /// Convert into a validated domain schema
    ///
    /// Performs the eager checks: valid survey id, parseable shapes, and every
    /// mapped field bound to a shape.
    pub fn to_schema(&self) -> Result<SurveySchema, String> {
        let id = SurveyId::new(self.id.clone())?;

        let mut question_fields = BTreeMap::new();
        for (question_id, field) in &self.questions {
            question_fields.insert(QuestionId::new(question_id.clone())?, field.clone());
        }

        let mut field_shapes = BTreeMap::new();
        for (field, shape) in &self.fields {
            let shape = AnswerShape::from_str(shape)
                .map_err(|e| format!("survey {}: field '{field}': {e}", self.id))?;
            field_shapes.insert(field.clone(), shape);
        }

        SurveySchema::new(id, self.title.clone(), question_fields, field_shapes)
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://api.surveymonkey.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_page_size() -> usize {
    100
}

fn default_max_retries() -> usize {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    30000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_output_dir() -> String {
    "./export".to_string()
}

fn default_state_dir() -> String {
    "./state".to_string()
}

fn default_log_path() -> String {
    "/var/log/surveyor".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
