//! Configuration loading and merging logic.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{AccessibilityConfig, DisplayConfig, MadoConfig, OutputConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".madosize";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.madosize/config.toml`)
/// 3. Project config (`./.madosize/config.toml`)
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if validation
/// fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<MadoConfig, ConfigError> {
    let home_dir = dirs::home_dir();
    let project_dir = std::env::current_dir()?;
    load_hierarchy_from(home_dir.as_deref(), &project_dir)
}

/// [`load_hierarchy`] with explicit base directories.
pub fn load_hierarchy_from(
    home_dir: Option<&Path>,
    project_dir: &Path,
) -> Result<MadoConfig, ConfigError> {
    let mut config = MadoConfig::default();

    match home_dir {
        Some(home) => {
            if let Some(user_config) = load_config_file(&config_path(home))? {
                config = merge_configs(config, user_config);
            }
        }
        None => debug!(event = "core.config.home_dir_unavailable"),
    }

    if let Some(project_config) = load_config_file(&config_path(project_dir))? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

fn config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load a configuration file, returning `None` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<MadoConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "core.config.file_not_found", path = %path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: MadoConfig, override_config: MadoConfig) -> MadoConfig {
    MadoConfig {
        accessibility: AccessibilityConfig {
            messaging_timeout_secs: override_config
                .accessibility
                .messaging_timeout_secs
                .or(base.accessibility.messaging_timeout_secs),
        },
        display: DisplayConfig {
            fallback: override_config.display.fallback.or(base.display.fallback),
        },
        output: OutputConfig {
            json: override_config.output.json.or(base.output.json),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayFallback;

    fn write_config(base: &Path, content: &str) {
        let dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), content).unwrap();
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let home = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();

        let config = load_hierarchy_from(Some(home.path()), project.path()).unwrap();
        assert_eq!(config, MadoConfig::default());
    }

    #[test]
    fn test_project_overrides_user() {
        let home = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();

        write_config(
            home.path(),
            r#"
[accessibility]
messaging_timeout_secs = 2.0

[display]
fallback = "nearest"
"#,
        );
        write_config(
            project.path(),
            r#"
[display]
fallback = "first"

[output]
json = true
"#,
        );

        let config = load_hierarchy_from(Some(home.path()), project.path()).unwrap();
        assert_eq!(config.messaging_timeout_secs(), 2.0);
        assert_eq!(config.display_fallback(), DisplayFallback::First);
        assert!(config.json_output());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let home = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        write_config(project.path(), "invalid toml [[[");

        let err = load_hierarchy_from(Some(home.path()), project.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let project = tempfile::tempdir().unwrap();
        write_config(
            project.path(),
            r#"
[accessibility]
messaging_timeout_secs = -1.0
"#,
        );

        let err = load_hierarchy_from(None, project.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_merge_keeps_base_when_override_empty() {
        let base = MadoConfig {
            output: OutputConfig { json: Some(true) },
            ..Default::default()
        };
        let merged = merge_configs(base, MadoConfig::default());
        assert!(merged.json_output());
    }
}
