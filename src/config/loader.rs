//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SurveyorConfig;
use crate::config::secret::SecretValue;
use crate::domain::errors::SurveyorError;
use crate::domain::result::Result;
use regex::Regex;
use secrecy::Secret;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SurveyorConfig
/// 4. Applies environment variable overrides (SURVEYOR_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use surveyor::config::load_config;
///
/// let config = load_config("surveyor.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SurveyorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SurveyorError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SurveyorError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: SurveyorConfig = toml::from_str(&contents)
        .map_err(|e| SurveyorError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        SurveyorError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched so annotated sample configs don't demand
/// the variables they merely mention.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SurveyorError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SURVEYOR_* prefix
///
/// Environment variables follow the pattern: SURVEYOR_<SECTION>_<KEY>.
/// For example: SURVEYOR_SURVEYMONKEY_ACCESS_TOKEN, SURVEYOR_EXPORT_MODE.
fn apply_env_overrides(config: &mut SurveyorConfig) {
    use super::schema::ExportMode;

    // Application overrides
    if let Ok(val) = std::env::var("SURVEYOR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // SurveyMonkey overrides
    if let Ok(val) = std::env::var("SURVEYOR_SURVEYMONKEY_BASE_URL") {
        config.surveymonkey.base_url = val;
    }
    if let Ok(val) = std::env::var("SURVEYOR_SURVEYMONKEY_ACCESS_TOKEN") {
        config.surveymonkey.access_token = Secret::new(SecretValue::from(val));
    }
    if let Ok(val) = std::env::var("SURVEYOR_SURVEYMONKEY_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.surveymonkey.page_size = size;
        }
    }
    if let Ok(val) = std::env::var("SURVEYOR_SURVEYMONKEY_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.surveymonkey.timeout_seconds = timeout;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("SURVEYOR_EXPORT_MODE") {
        if let Ok(mode) = ExportMode::from_str(&val) {
            config.export.mode = mode;
        }
    }
    if let Ok(val) = std::env::var("SURVEYOR_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }

    // Sink overrides
    if let Ok(val) = std::env::var("SURVEYOR_SINK_OUTPUT_DIR") {
        config.sink.output_dir = val;
    }

    // State overrides
    if let Ok(val) = std::env::var("SURVEYOR_STATE_STATE_DIR") {
        config.state.state_dir = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SURVEYOR_LOGGING_FILE_ENABLED") {
        config.logging.file_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SURVEYOR_LOGGING_FILE_PATH") {
        config.logging.file_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars_replaces_set_variable() {
        std::env::set_var("SURVEYOR_TEST_SUB_VAR", "replaced");
        let input = "token = \"${SURVEYOR_TEST_SUB_VAR}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("token = \"replaced\""));
        std::env::remove_var("SURVEYOR_TEST_SUB_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing_variable_errors() {
        let input = "token = \"${SURVEYOR_TEST_DEFINITELY_UNSET}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err
            .to_string()
            .contains("SURVEYOR_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# example: token = \"${SURVEYOR_TEST_COMMENT_ONLY}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("SURVEYOR_TEST_COMMENT_ONLY"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/surveyor.toml");
        assert!(matches!(
            result,
            Err(SurveyorError::Configuration(msg)) if msg.contains("not found")
        ));
    }
}
