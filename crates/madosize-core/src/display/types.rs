use serde::{Deserialize, Serialize};

use super::operations;
use super::source::DisplaySource;
use crate::geometry::Frame;

/// One connected display, both frames in desktop space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Display {
    full_frame: Frame,
    usable_frame: Frame,
}

impl Display {
    /// `usable_frame` excludes the menu bar and dock and must lie inside
    /// `full_frame`.
    pub fn new(full_frame: Frame, usable_frame: Frame) -> Self {
        Self {
            full_frame,
            usable_frame,
        }
    }

    /// A display without reserved system regions.
    pub fn uniform(full_frame: Frame) -> Self {
        Self::new(full_frame, full_frame)
    }

    pub fn full_frame(&self) -> &Frame {
        &self.full_frame
    }

    pub fn usable_frame(&self) -> &Frame {
        &self.usable_frame
    }
}

/// How to pick a display for a window that overlaps none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFallback {
    /// First display in enumeration order (the zero-area tie-break).
    #[default]
    First,
    /// Display whose full-frame center is closest to the window center.
    Nearest,
}

/// Snapshot of the connected displays in the OS enumeration order.
///
/// The first display is the primary one; its full frame anchors desktop
/// space and supplies the flip reference height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplaySet {
    displays: Vec<Display>,
}

impl DisplaySet {
    pub fn new(displays: Vec<Display>) -> Self {
        Self { displays }
    }

    /// Query `source` once and freeze the result.
    pub fn snapshot(source: &dyn DisplaySource) -> Self {
        Self::new(source.enumerate())
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn get(&self, index: usize) -> Option<&Display> {
        self.displays.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Display> {
        self.displays.iter()
    }

    pub fn primary(&self) -> Option<&Display> {
        self.displays.first()
    }

    /// Top edge of the primary display's full frame, the height every
    /// local/desktop conversion flips against.
    pub fn reference_height(&self) -> Option<f64> {
        self.primary().map(|display| display.full_frame().max_y())
    }

    /// Display with the strictly greatest overlap with `frame`.
    ///
    /// Equal areas resolve to the display enumerated first, including the
    /// case where `frame` overlaps nothing at all.
    pub fn owning_display(&self, frame: &Frame) -> Option<&Display> {
        self.owning_display_with(frame, DisplayFallback::First)
    }

    /// [`DisplaySet::owning_display`] with an explicit policy for frames
    /// that overlap no display.
    pub fn owning_display_with(&self, frame: &Frame, fallback: DisplayFallback) -> Option<&Display> {
        self.owning_display_index(frame, fallback)
            .and_then(|index| self.get(index))
    }

    pub fn owning_display_index(&self, frame: &Frame, fallback: DisplayFallback) -> Option<usize> {
        operations::owning_display_index(&self.displays, frame, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_reference_height_uses_primary_top_edge() {
        let set = DisplaySet::new(vec![
            Display::uniform(Frame::from_xywh(0.0, 0.0, 1440.0, 900.0)),
            Display::uniform(Frame::from_xywh(1440.0, -200.0, 1920.0, 1200.0)),
        ]);
        assert_eq!(set.reference_height(), Some(900.0));
        assert_eq!(set.primary().map(|d| d.full_frame().size), Some(Size::new(1440.0, 900.0)));
    }

    #[test]
    fn test_empty_set_has_no_reference() {
        let set = DisplaySet::default();
        assert!(set.is_empty());
        assert_eq!(set.reference_height(), None);
        assert!(set.primary().is_none());
    }

    #[test]
    fn test_owning_display_prefers_larger_overlap() {
        let d1 = Display::uniform(Frame::from_xywh(0.0, 0.0, 1000.0, 800.0));
        let d2 = Display::uniform(Frame::from_xywh(1000.0, 0.0, 1200.0, 900.0));
        let set = DisplaySet::new(vec![d1, d2]);
        let window = Frame::from_xywh(900.0, 100.0, 300.0, 200.0);

        // 200px of the window sit on d2, 100px on d1
        assert_eq!(set.owning_display(&window), Some(&d2));
        assert_eq!(set.owning_display(&window), Some(&d2));
        assert_eq!(set.owning_display_index(&window, DisplayFallback::First), Some(1));
    }

    #[test]
    fn test_owning_display_of_empty_set() {
        let set = DisplaySet::default();
        assert!(set.owning_display(&Frame::from_xywh(0.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn test_fallback_parses_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            fallback: DisplayFallback,
        }

        let parsed: Wrapper = toml::from_str(r#"fallback = "nearest""#).unwrap();
        assert_eq!(parsed.fallback, DisplayFallback::Nearest);
        assert_eq!(DisplayFallback::default(), DisplayFallback::First);
    }
}
