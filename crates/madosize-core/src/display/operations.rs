use super::types::{Display, DisplayFallback};
use crate::geometry::{Frame, intersect_area};

/// Index of the display owning `frame`: the one with the strictly greatest
/// intersection area against its full frame.
///
/// Equal areas keep the earlier display. When every area is zero the
/// `fallback` policy decides. Returns `None` for an empty display list or a
/// frame without a positive, finite size.
pub fn owning_display_index(
    displays: &[Display],
    frame: &Frame,
    fallback: DisplayFallback,
) -> Option<usize> {
    if displays.is_empty() || !frame.size.has_area() || !frame.origin.is_finite() {
        return None;
    }

    let mut best_index = 0;
    let mut best_area = intersect_area(displays[0].full_frame(), frame);

    for (index, display) in displays.iter().enumerate().skip(1) {
        let area = intersect_area(display.full_frame(), frame);
        if area > best_area {
            best_area = area;
            best_index = index;
        }
    }

    if best_area > 0.0 {
        return Some(best_index);
    }

    match fallback {
        DisplayFallback::First => Some(0),
        DisplayFallback::Nearest => nearest_display_index(displays, frame),
    }
}

/// Index of the display whose full-frame center is closest to the center of
/// `frame`, earlier displays winning ties.
pub fn nearest_display_index(displays: &[Display], frame: &Frame) -> Option<usize> {
    let target = frame.center();

    displays
        .iter()
        .enumerate()
        .map(|(index, display)| {
            let center = display.full_frame().center();
            let dx = center.x - target.x;
            let dy = center.y - target.y;
            (index, dx * dx + dy * dy)
        })
        .fold(None, |best: Option<(usize, f64)>, (index, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((index, distance)),
        })
        .map(|(index, _)| index)
}
