//! macOS binding of [`UiElement`] over `AXUIElementRef`.

use std::ffi::c_void;
use std::ptr;

use accessibility_sys::{
    AXError, AXUIElementCopyAttributeValue, AXUIElementCreateSystemWide, AXUIElementRef,
    AXUIElementSetAttributeValue, AXUIElementSetMessagingTimeout, kAXErrorAPIDisabled,
    kAXErrorAttributeUnsupported, kAXErrorInvalidUIElement, kAXErrorNoValue, kAXErrorSuccess,
    kAXPositionAttribute, kAXSizeAttribute, kAXTitleAttribute,
};
use core_foundation::base::{CFGetTypeID, CFRelease, CFType, CFTypeID, CFTypeRef, TCFType};
use core_foundation::string::CFString;
use core_graphics::geometry::{CGPoint, CGSize};
use tracing::debug;

use super::errors::AccessibilityError;
use super::types::{Attribute, AttributeValue, UiElement};
use crate::geometry::{Point, Size};

const K_AX_VALUE_TYPE_CG_POINT: u32 = 1;
const K_AX_VALUE_TYPE_CG_SIZE: u32 = 2;

// SAFETY: FFI declarations from the macOS ApplicationServices framework.
// AXIsProcessTrusted returns false when the process lacks accessibility
// permissions (does not crash).
#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn AXUIElementGetTypeID() -> CFTypeID;
    fn AXValueGetTypeID() -> CFTypeID;
    fn AXValueCreate(value_type: u32, value: *const c_void) -> CFTypeRef;
    fn AXValueGetType(value: CFTypeRef) -> u32;
    fn AXValueGetValue(value: CFTypeRef, value_type: u32, out: *mut c_void) -> bool;
}

/// Whether this process may drive other applications' UI.
pub fn is_process_trusted() -> bool {
    unsafe { AXIsProcessTrusted() }
}

/// Owned reference to one accessibility element (application or window).
///
/// Holds exactly one retain on the underlying element, released on drop.
#[derive(Debug)]
pub struct AxElement {
    raw: AXUIElementRef,
}

impl AxElement {
    /// Take ownership of a +1 retained element.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a valid `AXUIElementRef` whose retain the
    /// caller transfers to the returned value.
    unsafe fn from_create_rule(raw: AXUIElementRef) -> Option<Self> {
        if raw.is_null() { None } else { Some(Self { raw }) }
    }

    /// The system-wide element, the entry point for focus queries.
    pub fn system_wide() -> Option<Self> {
        // SAFETY: AXUIElementCreateSystemWide creates a +1 retained AXUIElementRef.
        unsafe { Self::from_create_rule(AXUIElementCreateSystemWide()) }
    }

    /// Bound every blocking call on this element to `seconds`.
    pub fn set_messaging_timeout(&self, seconds: f32) {
        // SAFETY: self.raw is a valid AXUIElementRef for our lifetime.
        let result = unsafe { AXUIElementSetMessagingTimeout(self.raw, seconds) };
        if result != kAXErrorSuccess {
            debug!(
                event = "core.ax.set_timeout_failed",
                timeout_secs = seconds,
                ax_error = result
            );
        }
    }

    /// Copy an attribute whose value is itself an element, such as the
    /// focused application or focused window.
    pub fn copy_element_attribute(&self, attribute: &str) -> Result<AxElement, AXError> {
        let value = self.copy_raw(attribute)?;

        // SAFETY: value is a valid CFTypeRef we own (+1) until released below.
        let is_element = unsafe { CFGetTypeID(value) == AXUIElementGetTypeID() };
        if !is_element {
            // SAFETY: Release the value we own but cannot use.
            unsafe { CFRelease(value) };
            return Err(kAXErrorNoValue);
        }

        // SAFETY: value is a +1 retained AXUIElementRef; ownership moves into AxElement.
        unsafe { Self::from_create_rule(value as AXUIElementRef) }.ok_or(kAXErrorNoValue)
    }

    fn is_ui_element(&self) -> bool {
        // SAFETY: self.raw is a valid CF object for our lifetime.
        unsafe { CFGetTypeID(self.raw as CFTypeRef) == AXUIElementGetTypeID() }
    }

    /// Raw copy of an attribute value; the caller owns the +1 result.
    fn copy_raw(&self, attribute: &str) -> Result<CFTypeRef, AXError> {
        let cf_attr = CFString::new(attribute);
        let mut value: CFTypeRef = ptr::null();

        // SAFETY: Standard AXUIElementCopyAttributeValue (Copy Rule: +1 retained on success).
        let result = unsafe {
            AXUIElementCopyAttributeValue(self.raw, cf_attr.as_concrete_TypeRef(), &mut value)
        };

        if result != kAXErrorSuccess {
            return Err(result);
        }
        if value.is_null() {
            return Err(kAXErrorNoValue);
        }
        Ok(value)
    }

    fn copy_attribute(&self, attribute: Attribute) -> Result<CFType, AccessibilityError> {
        let value = self
            .copy_raw(ax_attribute_name(attribute))
            .map_err(|code| map_ax_error(code, attribute))?;

        // SAFETY: value is a +1 retained CFTypeRef. wrap_under_create_rule takes ownership.
        Ok(unsafe { CFType::wrap_under_create_rule(value) })
    }
}

impl Drop for AxElement {
    fn drop(&mut self) {
        // SAFETY: We hold exactly one retain on self.raw (Create Rule).
        unsafe { CFRelease(self.raw as *mut c_void) };
    }
}

impl UiElement for AxElement {
    fn read_attribute(&self, attribute: Attribute) -> Result<AttributeValue, AccessibilityError> {
        if !self.is_ui_element() {
            return Err(AccessibilityError::ElementInvalid);
        }

        let value = self.copy_attribute(attribute)?;

        match attribute {
            Attribute::Position => {
                let point: CGPoint = ax_value_get(&value, K_AX_VALUE_TYPE_CG_POINT, attribute)?;
                Ok(AttributeValue::Point(Point::new(point.x, point.y)))
            }
            Attribute::Size => {
                let size: CGSize = ax_value_get(&value, K_AX_VALUE_TYPE_CG_SIZE, attribute)?;
                Ok(AttributeValue::Size(Size::new(size.width, size.height)))
            }
            Attribute::Title => {
                if !value.instance_of::<CFString>() {
                    return Err(AccessibilityError::WrongValueType {
                        attribute,
                        expected: "text",
                        found: "non-string",
                    });
                }
                let ptr = value.as_CFTypeRef() as *const _;
                // SAFETY: value is a CFString (checked above); get rule adds our own retain.
                let text = unsafe { CFString::wrap_under_get_rule(ptr) }.to_string();
                Ok(AttributeValue::Text(text))
            }
        }
    }

    fn write_attribute(
        &self,
        attribute: Attribute,
        value: AttributeValue,
    ) -> Result<(), AccessibilityError> {
        if !self.is_ui_element() {
            return Err(AccessibilityError::ElementInvalid);
        }

        let ax_value = match (attribute, value) {
            (Attribute::Position, AttributeValue::Point(point)) => ax_value_create(
                K_AX_VALUE_TYPE_CG_POINT,
                &CGPoint::new(point.x, point.y),
                attribute,
            )?,
            (Attribute::Size, AttributeValue::Size(size)) => ax_value_create(
                K_AX_VALUE_TYPE_CG_SIZE,
                &CGSize::new(size.width, size.height),
                attribute,
            )?,
            (Attribute::Title, _) => {
                return Err(AccessibilityError::AttributeUnsupported { attribute });
            }
            (attribute, other) => {
                return Err(AccessibilityError::WrongValueType {
                    attribute,
                    expected: expected_kind(attribute),
                    found: other.kind(),
                });
            }
        };

        let cf_attr = CFString::new(ax_attribute_name(attribute));

        // SAFETY: Setting an attribute on a valid element with a valid AXValue.
        let result = unsafe {
            AXUIElementSetAttributeValue(
                self.raw,
                cf_attr.as_concrete_TypeRef(),
                ax_value.as_CFTypeRef(),
            )
        };

        if result != kAXErrorSuccess {
            return Err(map_ax_error(result, attribute));
        }
        Ok(())
    }
}

fn ax_attribute_name(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Position => kAXPositionAttribute,
        Attribute::Size => kAXSizeAttribute,
        Attribute::Title => kAXTitleAttribute,
    }
}

fn expected_kind(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Position => "point",
        Attribute::Size => "size",
        Attribute::Title => "text",
    }
}

pub(crate) fn map_ax_error(code: AXError, attribute: Attribute) -> AccessibilityError {
    if code == kAXErrorAPIDisabled {
        AccessibilityError::PermissionDenied
    } else if code == kAXErrorInvalidUIElement {
        AccessibilityError::ElementInvalid
    } else if code == kAXErrorAttributeUnsupported || code == kAXErrorNoValue {
        AccessibilityError::AttributeUnsupported { attribute }
    } else {
        AccessibilityError::ApiError { attribute, code }
    }
}

/// Unpack a `CGPoint`/`CGSize` from an `AXValue`, checking its type tag.
fn ax_value_get<T: Default>(
    value: &CFType,
    value_type: u32,
    attribute: Attribute,
) -> Result<T, AccessibilityError> {
    let raw = value.as_CFTypeRef();

    // SAFETY: raw is a live CF object owned by `value`.
    let is_ax_value = unsafe { CFGetTypeID(raw) == AXValueGetTypeID() };
    if !is_ax_value || unsafe { AXValueGetType(raw) } != value_type {
        return Err(AccessibilityError::WrongValueType {
            attribute,
            expected: expected_kind(attribute),
            found: "other",
        });
    }

    let mut out = T::default();
    // SAFETY: The AXValue holds a value of `value_type`, which matches T's layout.
    let ok = unsafe { AXValueGetValue(raw, value_type, &mut out as *mut T as *mut c_void) };
    if !ok {
        return Err(AccessibilityError::WrongValueType {
            attribute,
            expected: expected_kind(attribute),
            found: "other",
        });
    }
    Ok(out)
}

fn ax_value_create<T>(
    value_type: u32,
    value: &T,
    attribute: Attribute,
) -> Result<CFType, AccessibilityError> {
    // SAFETY: value points to a CGPoint/CGSize matching `value_type`.
    let raw = unsafe { AXValueCreate(value_type, value as *const T as *const c_void) };
    if raw.is_null() {
        return Err(AccessibilityError::ValueCreationFailed { attribute });
    }
    // SAFETY: AXValueCreate returns a +1 retained value; the wrapper releases it.
    Ok(unsafe { CFType::wrap_under_create_rule(raw) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_ax_error_categories() {
        assert!(matches!(
            map_ax_error(kAXErrorAPIDisabled, Attribute::Position),
            AccessibilityError::PermissionDenied
        ));
        assert!(matches!(
            map_ax_error(kAXErrorInvalidUIElement, Attribute::Size),
            AccessibilityError::ElementInvalid
        ));
        assert!(matches!(
            map_ax_error(kAXErrorNoValue, Attribute::Title),
            AccessibilityError::AttributeUnsupported {
                attribute: Attribute::Title
            }
        ));
    }

    #[test]
    fn test_system_wide_element_is_created() {
        // Creating the system-wide element needs no permission.
        assert!(AxElement::system_wide().is_some());
    }
}
