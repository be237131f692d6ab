use std::fmt;

use super::errors::AccessibilityError;
use crate::geometry::{Point, Size};

/// Attributes the core reads or writes on a foreign element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Top-left corner in local space.
    Position,
    Size,
    Title,
}

impl Attribute {
    /// Name of the attribute as the accessibility layer spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Position => "AXPosition",
            Attribute::Size => "AXSize",
            Attribute::Title => "AXTitle",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed attribute payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Point(Point),
    Size(Size),
    Text(String),
}

impl AttributeValue {
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Point(_) => "point",
            AttributeValue::Size(_) => "size",
            AttributeValue::Text(_) => "text",
        }
    }

    pub fn into_point(self, attribute: Attribute) -> Result<Point, AccessibilityError> {
        match self {
            AttributeValue::Point(point) => Ok(point),
            other => Err(AccessibilityError::WrongValueType {
                attribute,
                expected: "point",
                found: other.kind(),
            }),
        }
    }

    pub fn into_size(self, attribute: Attribute) -> Result<Size, AccessibilityError> {
        match self {
            AttributeValue::Size(size) => Ok(size),
            other => Err(AccessibilityError::WrongValueType {
                attribute,
                expected: "size",
                found: other.kind(),
            }),
        }
    }

    pub fn into_text(self, attribute: Attribute) -> Result<String, AccessibilityError> {
        match self {
            AttributeValue::Text(text) => Ok(text),
            other => Err(AccessibilityError::WrongValueType {
                attribute,
                expected: "text",
                found: other.kind(),
            }),
        }
    }
}

/// One foreign UI element (an application or a window) reachable through
/// the accessibility layer.
///
/// Every call is independently fallible and goes straight to the OS; no
/// value is cached between calls.
pub trait UiElement {
    fn read_attribute(&self, attribute: Attribute) -> Result<AttributeValue, AccessibilityError>;

    fn write_attribute(
        &self,
        attribute: Attribute,
        value: AttributeValue,
    ) -> Result<(), AccessibilityError>;
}
