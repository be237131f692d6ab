use core_graphics::display::CGDisplay;
use objc2::MainThreadMarker;
use objc2_app_kit::NSScreen;
use objc2_foundation::NSRect;
use tracing::{debug, warn};

use super::types::Display;
use crate::geometry::{Frame, flip_frame};

/// List displays through AppKit, which reports both the full frame and the
/// visible frame (minus menu bar and dock) directly in desktop space.
///
/// AppKit is main-thread only; off the main thread this falls back to
/// Core Graphics, which knows nothing about reserved regions.
pub(super) fn enumerate_displays() -> Vec<Display> {
    let Some(mtm) = MainThreadMarker::new() else {
        debug!(
            event = "core.display.appkit_unavailable",
            reason = "not_main_thread"
        );
        return enumerate_cg_displays();
    };

    NSScreen::screens(mtm)
        .iter()
        .map(|screen| Display::new(frame_from_ns(screen.frame()), frame_from_ns(screen.visibleFrame())))
        .collect()
}

fn frame_from_ns(rect: NSRect) -> Frame {
    Frame::from_xywh(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

/// Core Graphics bounds are Y-down from the main display's top-left, so each
/// one is flipped into desktop space against the main display's height.
fn enumerate_cg_displays() -> Vec<Display> {
    let ids = match CGDisplay::active_displays() {
        Ok(ids) => ids,
        Err(code) => {
            warn!(event = "core.display.cg_enumeration_failed", error_code = code);
            return Vec::new();
        }
    };

    let local_frames: Vec<Frame> = ids
        .into_iter()
        .map(|id| {
            let bounds = CGDisplay::new(id).bounds();
            Frame::from_xywh(
                bounds.origin.x,
                bounds.origin.y,
                bounds.size.width,
                bounds.size.height,
            )
        })
        .collect();

    let Some(reference_height) = local_frames.first().map(|frame| frame.max_y()) else {
        return Vec::new();
    };

    local_frames
        .iter()
        .map(|frame| Display::uniform(flip_frame(frame, reference_height)))
        .collect()
}
