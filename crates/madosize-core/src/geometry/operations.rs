use super::types::{Frame, Point, Size};

/// Area of the overlap between two rectangles in the same coordinate space.
///
/// Returns 0 when the rectangles are disjoint, only touch along an edge, or
/// either one has a non-positive extent.
pub fn intersect_area(a: &Frame, b: &Frame) -> f64 {
    if !a.size.has_area() || !b.size.has_area() {
        return 0.0;
    }

    let width = a.max_x().min(b.max_x()) - a.min_x().max(b.min_x());
    let height = a.max_y().min(b.max_y()) - a.min_y().max(b.min_y());

    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }

    width * height
}

/// Flip a rectangle origin between local (Y-down) and desktop (Y-up) space.
///
/// `reference_height` is the top edge of the primary display's full frame.
/// The law is its own inverse for a fixed `size` and `reference_height`.
pub fn flip_y(point: Point, size: Size, reference_height: f64) -> Point {
    Point::new(point.x, reference_height - size.height - point.y)
}

/// [`flip_y`] applied to a whole frame; the size is carried over unchanged.
pub fn flip_frame(frame: &Frame, reference_height: f64) -> Frame {
    Frame::new(flip_y(frame.origin, frame.size, reference_height), frame.size)
}
