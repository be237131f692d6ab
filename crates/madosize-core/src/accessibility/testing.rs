//! In-memory element standing in for a real foreign window in tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::errors::AccessibilityError;
use super::types::{Attribute, AttributeValue, UiElement};
use crate::geometry::{Point, Size};

#[derive(Debug, Default)]
pub(crate) struct ElementState {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub title: Option<String>,
    pub failing_reads: HashSet<Attribute>,
    pub failing_writes: HashSet<Attribute>,
    pub writes: Vec<(Attribute, AttributeValue)>,
}

/// Cloning shares the state, so a test keeps one clone for inspection
/// while the handle owns another.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    pub fn window(position: Point, size: Size) -> Self {
        let element = Self::default();
        {
            let mut state = element.state.borrow_mut();
            state.position = Some(position);
            state.size = Some(size);
        }
        element
    }

    pub fn titled(title: &str) -> Self {
        let element = Self::default();
        element.state.borrow_mut().title = Some(title.to_string());
        element
    }

    pub fn with_title(self, title: &str) -> Self {
        self.state.borrow_mut().title = Some(title.to_string());
        self
    }

    pub fn fail_reads(&self, attribute: Attribute) {
        self.state.borrow_mut().failing_reads.insert(attribute);
    }

    pub fn fail_writes(&self, attribute: Attribute) {
        self.state.borrow_mut().failing_writes.insert(attribute);
    }

    pub fn position(&self) -> Option<Point> {
        self.state.borrow().position
    }

    pub fn size(&self) -> Option<Size> {
        self.state.borrow().size
    }

    pub fn write_count(&self) -> usize {
        self.state.borrow().writes.len()
    }

    pub fn written_attributes(&self) -> Vec<Attribute> {
        self.state.borrow().writes.iter().map(|(a, _)| *a).collect()
    }
}

impl UiElement for MemoryElement {
    fn read_attribute(&self, attribute: Attribute) -> Result<AttributeValue, AccessibilityError> {
        let state = self.state.borrow();
        if state.failing_reads.contains(&attribute) {
            return Err(AccessibilityError::ApiError {
                attribute,
                code: -25202,
            });
        }

        let value = match attribute {
            Attribute::Position => state.position.map(AttributeValue::Point),
            Attribute::Size => state.size.map(AttributeValue::Size),
            Attribute::Title => state.title.clone().map(AttributeValue::Text),
        };
        value.ok_or(AccessibilityError::AttributeUnsupported { attribute })
    }

    fn write_attribute(
        &self,
        attribute: Attribute,
        value: AttributeValue,
    ) -> Result<(), AccessibilityError> {
        let mut state = self.state.borrow_mut();
        if state.failing_writes.contains(&attribute) {
            return Err(AccessibilityError::ApiError {
                attribute,
                code: -25200,
            });
        }

        match (&attribute, &value) {
            (Attribute::Position, AttributeValue::Point(point)) => state.position = Some(*point),
            (Attribute::Size, AttributeValue::Size(size)) => state.size = Some(*size),
            (Attribute::Title, AttributeValue::Text(_)) => {
                return Err(AccessibilityError::AttributeUnsupported { attribute });
            }
            _ => {
                return Err(AccessibilityError::WrongValueType {
                    attribute,
                    expected: "matching",
                    found: value.kind(),
                });
            }
        }
        state.writes.push((attribute, value));
        Ok(())
    }
}
