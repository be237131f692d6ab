//! Capability interface over the OS accessibility layer.
//!
//! The rest of the crate only sees [`UiElement`]: read or write one
//! attribute of one foreign UI element. Everything OS-specific lives in the
//! platform binding.

pub mod errors;
#[cfg(target_os = "macos")]
pub mod macos;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use errors::AccessibilityError;
pub use types::{Attribute, AttributeValue, UiElement};
