use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A coordinate in either local or desktop space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a window or display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both extents are finite and not negative, which is what a
    /// window can actually be given.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// True when both extents are finite and strictly positive.
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle: an origin plus a size.
///
/// The origin is the corner nearest the space's own origin, so in local
/// space it is the top-left corner and in desktop space the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// The same rectangle moved by `offset`.
    pub fn translated(&self, offset: Point) -> Frame {
        Frame::new(self.origin + offset, self.size)
    }

    /// A frame of `size` whose center sits on the center of `self`.
    pub fn centered_child(&self, size: Size) -> Frame {
        let origin = Point::new(
            self.mid_x() - size.width / 2.0,
            self.mid_y() - size.height / 2.0,
        );
        Frame::new(origin, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(a + b, Point::new(13.0, 16.0));
        assert_eq!(a - b, Point::new(7.0, 24.0));
        assert_eq!((a - b) + b, a);
    }

    #[test]
    fn test_frame_edges() {
        let frame = Frame::from_xywh(100.0, 50.0, 300.0, 200.0);
        assert_eq!(frame.min_x(), 100.0);
        assert_eq!(frame.max_x(), 400.0);
        assert_eq!(frame.min_y(), 50.0);
        assert_eq!(frame.max_y(), 250.0);
        assert_eq!(frame.center(), Point::new(250.0, 150.0));
    }

    #[test]
    fn test_centered_child_keeps_size() {
        let parent = Frame::from_xywh(0.0, 0.0, 1000.0, 800.0);
        let child = parent.centered_child(Size::new(200.0, 100.0));
        assert_eq!(child, Frame::from_xywh(400.0, 350.0, 200.0, 100.0));
        assert_eq!(child.center(), parent.center());
    }

    #[test]
    fn test_size_is_valid() {
        assert!(Size::new(0.0, 0.0).is_valid());
        assert!(Size::new(800.0, 600.0).is_valid());
        assert!(!Size::new(10.0, -1.0).is_valid());
        assert!(!Size::new(f64::INFINITY, 10.0).is_valid());
    }

    #[test]
    fn test_size_has_area() {
        assert!(Size::new(1.0, 1.0).has_area());
        assert!(!Size::new(0.0, 10.0).has_area());
        assert!(!Size::new(10.0, -1.0).has_area());
        assert!(!Size::new(f64::NAN, 10.0).has_area());
    }
}
