//! The focused foreign window and everything that reads or moves it.

pub mod handler;
pub mod types;

pub use handler::WindowHandle;
pub use types::{FrameField, FrameSpace, WindowSnapshot};
