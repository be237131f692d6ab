use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::Frame;

/// Coordinate space a window frame is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSpace {
    /// Relative to the owning display's full-frame origin, Y-up.
    #[default]
    Screen,
    /// Global desktop space, Y-up from the primary display's bottom-left.
    Desktop,
    /// Raw accessibility space, Y-down from the primary display's top-left.
    Local,
}

impl FrameSpace {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameSpace::Screen => "screen",
            FrameSpace::Desktop => "desktop",
            FrameSpace::Local => "local",
        }
    }
}

impl fmt::Display for FrameSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameSpace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "screen" => Ok(FrameSpace::Screen),
            "desktop" => Ok(FrameSpace::Desktop),
            "local" => Ok(FrameSpace::Local),
            other => Err(format!(
                "Unknown frame space '{}'. Expected one of: screen, desktop, local",
                other
            )),
        }
    }
}

/// One of the four scalar fields a control surface edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameField {
    X,
    Y,
    Width,
    Height,
}

impl FrameField {
    pub fn get(&self, frame: &Frame) -> f64 {
        match self {
            FrameField::X => frame.origin.x,
            FrameField::Y => frame.origin.y,
            FrameField::Width => frame.size.width,
            FrameField::Height => frame.size.height,
        }
    }

    pub fn with_value(&self, frame: &Frame, value: f64) -> Frame {
        let mut updated = *frame;
        match self {
            FrameField::X => updated.origin.x = value,
            FrameField::Y => updated.origin.y = value,
            FrameField::Width => updated.size.width = value,
            FrameField::Height => updated.size.height = value,
        }
        updated
    }

    pub fn changes_size(&self) -> bool {
        matches!(self, FrameField::Width | FrameField::Height)
    }
}

/// Everything a control surface shows for one window, read in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    app_title: Option<String>,
    window_title: Option<String>,
    space: FrameSpace,
    frame: Frame,
    display_index: Option<usize>,
}

impl WindowSnapshot {
    pub fn new(
        app_title: Option<String>,
        window_title: Option<String>,
        space: FrameSpace,
        frame: Frame,
        display_index: Option<usize>,
    ) -> Self {
        Self {
            app_title,
            window_title,
            space,
            frame,
            display_index,
        }
    }

    pub fn app_title(&self) -> Option<&str> {
        self.app_title.as_deref()
    }
    pub fn window_title(&self) -> Option<&str> {
        self.window_title.as_deref()
    }
    pub fn space(&self) -> FrameSpace {
        self.space
    }
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
    pub fn display_index(&self) -> Option<usize> {
        self.display_index
    }
}
