use tracing::{error, info, warn};

use crate::errors::MadoError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Log a typed error at the level its kind calls for.
pub fn log_mado_error(error: &dyn MadoError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error = %error,
            error_code = error.error_code()
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn test_app_events() {
        // Test that event functions don't panic
        log_app_startup();

        let test_error = std::io::Error::other("test");
        log_app_error(&test_error);

        let config_error = ConfigError::InvalidConfiguration {
            message: "bad".to_string(),
        };
        log_mado_error(&config_error);
    }
}
