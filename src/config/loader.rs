//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::EncodaConfig;
use crate::domain::errors::EncodaError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into EncodaConfig
/// 4. Applies environment variable overrides (ENCODA_* prefix)
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
/// use encoda::config::loader::load_config;
///
/// let config = load_config("encoda.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<EncodaConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EncodaError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        EncodaError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: EncodaConfig = toml::from_str(&contents)
        .map_err(|e| EncodaError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        EncodaError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched so documentation examples in the file
/// don't demand real variables.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var regex is valid");
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
        return Err(EncodaError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the ENCODA_* prefix
///
/// Environment variables follow the pattern: ENCODA_<SECTION>_<KEY>
/// For example: ENCODA_HOST_BASE_URL, ENCODA_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut EncodaConfig) {
    if let Ok(val) = std::env::var("ENCODA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("ENCODA_HOST_BASE_URL") {
        config.host.base_url = val;
    }
    if let Ok(val) = std::env::var("ENCODA_HOST_REQUEST_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.host.request_timeout_secs = secs;
        }
    }
    if let Ok(val) = std::env::var("ENCODA_HOST_SELECTION_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.host.selection_timeout_secs = secs;
        }
    }

    if let Ok(val) = std::env::var("ENCODA_LOGGING_FILE_ENABLED") {
        config.logging.file_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ENCODA_LOGGING_FILE_PATH") {
        config.logging.file_path = val;
    }
}
