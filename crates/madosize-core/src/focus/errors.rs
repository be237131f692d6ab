use crate::errors::MadoError;

#[derive(Debug, thiserror::Error)]
pub enum FocusError {
    #[error(
        "Accessibility permission required: enable in System Settings > Privacy & Security > Accessibility"
    )]
    PermissionDenied,

    #[error("Could not create the system-wide accessibility element")]
    SystemWideUnavailable,

    #[error("No application has focus (AXError: {code})")]
    NoFocusedApplication { code: i32 },

    #[error("Focused application has no focused window (AXError: {code})")]
    NoFocusedWindow { code: i32 },

    #[error("Focused window lookup is not supported on {os}")]
    Unsupported { os: &'static str },
}

impl MadoError for FocusError {
    fn error_code(&self) -> &'static str {
        match self {
            FocusError::PermissionDenied => "FOCUS_PERMISSION_DENIED",
            FocusError::SystemWideUnavailable => "FOCUS_SYSTEM_WIDE_UNAVAILABLE",
            FocusError::NoFocusedApplication { .. } => "FOCUS_NO_APPLICATION",
            FocusError::NoFocusedWindow { .. } => "FOCUS_NO_WINDOW",
            FocusError::Unsupported { .. } => "FOCUS_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, FocusError::SystemWideUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_points_at_settings() {
        let error = FocusError::PermissionDenied;
        assert!(error.to_string().contains("Privacy & Security"));
        assert_eq!(error.error_code(), "FOCUS_PERMISSION_DENIED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_no_focused_window_carries_code() {
        let error = FocusError::NoFocusedWindow { code: -25212 };
        assert_eq!(
            error.to_string(),
            "Focused application has no focused window (AXError: -25212)"
        );
        assert_eq!(error.error_code(), "FOCUS_NO_WINDOW");
    }

    #[test]
    fn test_system_wide_unavailable_is_not_user_error() {
        assert!(!FocusError::SystemWideUnavailable.is_user_error());
        assert!(FocusError::Unsupported { os: "linux" }.is_user_error());
    }
}
