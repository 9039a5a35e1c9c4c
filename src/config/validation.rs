use crate::config::types::{AnalysisConfig, ClientConfig, Config};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_client_config(&config.client)?;
    validate_analysis_config(&config.analysis)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    // Validate agent name: non-empty, alphanumeric + hyphens only
    if config.agent_name.is_empty() {
        return Err(ConfigError::Validation(
            "agent_name cannot be empty".to_string(),
        ));
    }

    if !config
        .agent_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "agent_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.agent_name
        )));
    }

    if config.agent_version.is_empty() {
        return Err(ConfigError::Validation(
            "agent_version cannot be empty".to_string(),
        ));
    }

    if config.timeout_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_seconds must be >= 1, got {}",
            config.timeout_seconds
        )));
    }

    if config.connect_timeout_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_seconds must be >= 1, got {}",
            config.connect_timeout_seconds
        )));
    }

    Ok(())
}

/// Validates the analytics defaults
fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.top_words < 1 {
        return Err(ConfigError::Validation(format!(
            "top_words must be >= 1, got {}",
            config.top_words
        )));
    }

    if config.summary_sentences < 1 {
        return Err(ConfigError::Validation(format!(
            "summary_sentences must be >= 1, got {}",
            config.summary_sentences
        )));
    }

    Ok(())
}
