use tracing::debug;

use super::types::Display;

/// Anything that can list the currently connected displays.
///
/// Each call is a fresh query; implementations must not cache results
/// across calls since displays can be plugged in or removed at any time.
pub trait DisplaySource {
    /// Displays in the platform's enumeration order, primary first.
    /// An empty list is valid and makes display-relative work a no-op.
    fn enumerate(&self) -> Vec<Display>;
}

/// Fixed display list, for hosts that already know their layout and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDisplays {
    displays: Vec<Display>,
}

impl StaticDisplays {
    pub fn new(displays: Vec<Display>) -> Self {
        Self { displays }
    }
}

impl DisplaySource for StaticDisplays {
    fn enumerate(&self) -> Vec<Display> {
        self.displays.clone()
    }
}

/// Displays reported by the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDisplays;

impl DisplaySource for SystemDisplays {
    #[cfg(target_os = "macos")]
    fn enumerate(&self) -> Vec<Display> {
        let displays = super::macos::enumerate_displays();
        debug!(event = "core.display.enumerate_completed", count = displays.len());
        displays
    }

    #[cfg(not(target_os = "macos"))]
    fn enumerate(&self) -> Vec<Display> {
        debug!(
            event = "core.display.enumerate_unsupported",
            os = std::env::consts::OS
        );
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplaySet;
    use crate::geometry::Frame;

    #[test]
    fn test_static_displays_preserve_order() {
        let a = Display::uniform(Frame::from_xywh(0.0, 0.0, 100.0, 100.0));
        let b = Display::uniform(Frame::from_xywh(100.0, 0.0, 100.0, 100.0));
        let source = StaticDisplays::new(vec![a, b]);

        let set = DisplaySet::snapshot(&source);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some(&a));
        assert_eq!(set.get(1), Some(&b));
    }

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn test_system_displays_empty_off_macos() {
        assert!(SystemDisplays.enumerate().is_empty());
    }
}
