//! Connected displays and owning-display selection.
//!
//! Displays are never cached: callers take a [`DisplaySet`] snapshot from a
//! [`DisplaySource`] once per user-triggered operation and pass it along.

#[cfg(target_os = "macos")]
mod macos;
pub mod operations;
pub mod source;
pub mod types;

pub use operations::{nearest_display_index, owning_display_index};
pub use source::{DisplaySource, StaticDisplays, SystemDisplays};
pub use types::{Display, DisplayFallback, DisplaySet};
