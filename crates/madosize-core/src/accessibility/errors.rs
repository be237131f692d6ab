use super::types::Attribute;
use crate::errors::MadoError;

#[derive(Debug, thiserror::Error)]
pub enum AccessibilityError {
    #[error(
        "Accessibility permission required: enable in System Settings > Privacy & Security > Accessibility"
    )]
    PermissionDenied,

    #[error("UI element is no longer a valid window")]
    ElementInvalid,

    #[error("Attribute {attribute} is not supported by this element")]
    AttributeUnsupported { attribute: Attribute },

    #[error("Attribute {attribute} returned a {found} value, expected {expected}")]
    WrongValueType {
        attribute: Attribute,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to create a value for attribute {attribute}")]
    ValueCreationFailed { attribute: Attribute },

    #[error("Accessibility call for {attribute} failed (AXError: {code})")]
    ApiError { attribute: Attribute, code: i32 },

    #[error("Accessibility API is not available on {os}")]
    Unsupported { os: &'static str },
}

impl MadoError for AccessibilityError {
    fn error_code(&self) -> &'static str {
        match self {
            AccessibilityError::PermissionDenied => "AX_PERMISSION_DENIED",
            AccessibilityError::ElementInvalid => "AX_ELEMENT_INVALID",
            AccessibilityError::AttributeUnsupported { .. } => "AX_ATTRIBUTE_UNSUPPORTED",
            AccessibilityError::WrongValueType { .. } => "AX_WRONG_VALUE_TYPE",
            AccessibilityError::ValueCreationFailed { .. } => "AX_VALUE_CREATION_FAILED",
            AccessibilityError::ApiError { .. } => "AX_API_ERROR",
            AccessibilityError::Unsupported { .. } => "AX_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            AccessibilityError::PermissionDenied | AccessibilityError::Unsupported { .. }
        )
    }
}
