use crate::config::types::MadoConfig;
use crate::errors::ConfigError;

/// Validate the configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when the messaging timeout is
/// not a positive, finite number of seconds.
pub fn validate_config(config: &MadoConfig) -> Result<(), ConfigError> {
    if let Some(timeout) = config.accessibility.messaging_timeout_secs
        && (!timeout.is_finite() || timeout <= 0.0)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "accessibility.messaging_timeout_secs must be greater than 0, got {}",
                timeout
            ),
        });
    }

    Ok(())
}
