//! Focused-window lookup.
//!
//! [`current_focused_window`] is the single entry point the control surface
//! polls. Each call returns a fresh [`WindowHandle`](crate::window::WindowHandle);
//! nothing is cached between calls.

pub mod errors;
pub mod handler;
#[cfg(target_os = "macos")]
mod macos;

pub use errors::FocusError;
pub use handler::{FocusLocator, SystemFocusLocator, current_focused_window};
