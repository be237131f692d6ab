//! Pure geometry for window and display frames.
//!
//! Two coordinate spaces flow through this crate and are never mixed
//! without an explicit conversion:
//!
//! - **local space**: what the accessibility layer reads and writes. Y grows
//!   downward from the top-left corner of the primary display.
//! - **desktop space**: Y grows upward from the bottom-left corner of the
//!   primary display and spans every connected display.
//!
//! [`flip_y`] is the only conversion law between them.

pub mod operations;
pub mod types;

pub use operations::{flip_frame, flip_y, intersect_area};
pub use types::{Frame, Point, Size};
