//! madosize-core: focused-window geometry for multi-display desktops
//!
//! This library reads and writes the frame of whatever window currently has
//! keyboard focus, translating between the accessibility layer's top-left
//! coordinates and a bottom-left desktop space that spans every display.
//! It is used by the `madosize` CLI.
//!
//! # Main Entry Points
//!
//! - [`focus`] - Locate the focused window
//! - [`window`] - Read, move, resize, center, maximize a window
//! - [`display`] - Display enumeration and owning-display selection
//! - [`geometry`] - Frame math and the coordinate flip
//! - [`config`] - Configuration management

pub mod accessibility;
pub mod config;
pub mod display;
pub mod errors;
pub mod events;
pub mod focus;
pub mod geometry;
pub mod logging;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use accessibility::{AccessibilityError, Attribute, AttributeValue, UiElement};
pub use config::MadoConfig;
pub use display::{Display, DisplayFallback, DisplaySet, DisplaySource, StaticDisplays, SystemDisplays};
pub use errors::{ConfigError, MadoError};
pub use focus::{FocusError, FocusLocator, SystemFocusLocator, current_focused_window};
pub use geometry::{Frame, Point, Size};
pub use window::{FrameField, FrameSpace, WindowHandle, WindowSnapshot};

// Re-export logging initialization
pub use logging::init_logging;
