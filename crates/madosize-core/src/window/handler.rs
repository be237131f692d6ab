use tracing::{debug, info, warn};

use super::types::{FrameField, FrameSpace, WindowSnapshot};
use crate::accessibility::{AccessibilityError, Attribute, AttributeValue, UiElement};
use crate::display::{Display, DisplayFallback, DisplaySet, DisplaySource};
use crate::errors::MadoError;
use crate::geometry::{Frame, Point, Size, flip_frame, flip_y};

/// One foreign window reached through the accessibility layer.
///
/// Created per focus query and dropped when focus moves on. Every getter
/// goes to the OS and every failure degrades to `None` (reads) or `false`
/// (writes) after being logged; nothing is raised to the caller. Setters
/// report whether the OS accepted the write, but the value read back
/// afterwards is what counts.
///
/// Displays are not owned: each public operation takes one fresh
/// [`DisplaySet`] snapshot and uses it for both lookup and conversion. The
/// `*_in` variants accept a caller-provided snapshot instead.
pub struct WindowHandle {
    app: Box<dyn UiElement>,
    window: Box<dyn UiElement>,
    displays: Box<dyn DisplaySource>,
    fallback: DisplayFallback,
}

/// Geometry of the window against one display snapshot, read once.
#[derive(Debug, Clone, Copy)]
struct Placement {
    desktop: Frame,
    display_index: usize,
    display: Display,
    reference_height: f64,
}

impl Placement {
    fn screen_frame(&self) -> Frame {
        Frame::new(
            self.desktop.origin - self.display.full_frame().origin,
            self.desktop.size,
        )
    }
}

impl WindowHandle {
    pub fn new(
        app: Box<dyn UiElement>,
        window: Box<dyn UiElement>,
        displays: Box<dyn DisplaySource>,
    ) -> Self {
        Self {
            app,
            window,
            displays,
            fallback: DisplayFallback::default(),
        }
    }

    pub fn with_display_fallback(mut self, fallback: DisplayFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Fresh snapshot of the connected displays.
    pub fn display_set(&self) -> DisplaySet {
        DisplaySet::snapshot(self.displays.as_ref())
    }

    // --- raw accessibility attributes (local space) ---

    pub fn position(&self) -> Option<Point> {
        read_value(
            self.window.as_ref(),
            "window",
            Attribute::Position,
            AttributeValue::into_point,
        )
    }

    pub fn set_position(&self, position: Point) -> bool {
        if !position.is_finite() {
            warn!(
                event = "core.window.position_rejected",
                x = position.x,
                y = position.y
            );
            return false;
        }
        write_value(
            self.window.as_ref(),
            Attribute::Position,
            AttributeValue::Point(position),
        )
    }

    pub fn size(&self) -> Option<Size> {
        read_value(
            self.window.as_ref(),
            "window",
            Attribute::Size,
            AttributeValue::into_size,
        )
    }

    pub fn set_size(&self, size: Size) -> bool {
        if !size.is_valid() {
            warn!(
                event = "core.window.size_rejected",
                width = size.width,
                height = size.height
            );
            return false;
        }
        write_value(
            self.window.as_ref(),
            Attribute::Size,
            AttributeValue::Size(size),
        )
    }

    /// Position and size together, or `None` if either read fails.
    pub fn local_frame(&self) -> Option<Frame> {
        let position = self.position()?;
        let size = self.size()?;
        Some(Frame::new(position, size))
    }

    pub fn app_title(&self) -> Option<String> {
        read_value(
            self.app.as_ref(),
            "application",
            Attribute::Title,
            AttributeValue::into_text,
        )
    }

    pub fn window_title(&self) -> Option<String> {
        read_value(
            self.window.as_ref(),
            "window",
            Attribute::Title,
            AttributeValue::into_text,
        )
    }

    // --- desktop space ---

    pub fn desktop_frame(&self) -> Option<Frame> {
        self.desktop_frame_in(&self.display_set())
    }

    pub fn desktop_frame_in(&self, displays: &DisplaySet) -> Option<Frame> {
        let local = self.local_frame()?;
        let Some(reference_height) = displays.reference_height() else {
            debug!(event = "core.window.desktop_frame_unavailable", reason = "no_displays");
            return None;
        };
        Some(flip_frame(&local, reference_height))
    }

    pub fn set_desktop_frame(&self, frame: Frame) -> bool {
        self.set_desktop_frame_in(&self.display_set(), frame)
    }

    /// Writes position first, then size. Not atomic.
    pub fn set_desktop_frame_in(&self, displays: &DisplaySet, frame: Frame) -> bool {
        if self.local_frame().is_none() {
            log_skipped("set_desktop_frame", "geometry_unavailable");
            return false;
        }
        let Some(reference_height) = displays.reference_height() else {
            log_skipped("set_desktop_frame", "no_displays");
            return false;
        };
        self.write_desktop_frame(reference_height, frame)
    }

    // --- owning display ---

    /// Display the window currently overlaps most, re-queried on every call.
    pub fn owning_display(&self) -> Option<Display> {
        self.owning_display_in(&self.display_set())
            .map(|(_, display)| display)
    }

    /// Owning display and its index within `displays`.
    pub fn owning_display_in(&self, displays: &DisplaySet) -> Option<(usize, Display)> {
        self.placement_in(displays, "owning_display")
            .map(|placement| (placement.display_index, placement.display))
    }

    // --- display-local frame ---

    /// Desktop frame relative to the owning display's full-frame origin.
    pub fn local_frame_on_screen(&self) -> Option<Frame> {
        self.local_frame_on_screen_in(&self.display_set())
    }

    pub fn local_frame_on_screen_in(&self, displays: &DisplaySet) -> Option<Frame> {
        self.placement_in(displays, "local_frame_on_screen")
            .map(|placement| placement.screen_frame())
    }

    pub fn set_local_frame_on_screen(&self, frame: Frame) -> bool {
        self.set_local_frame_on_screen_in(&self.display_set(), frame)
    }

    /// `frame` is taken relative to the display that owns the window
    /// *before* the write.
    pub fn set_local_frame_on_screen_in(&self, displays: &DisplaySet, frame: Frame) -> bool {
        let Some(placement) = self.placement_in(displays, "set_local_frame_on_screen") else {
            return false;
        };
        let desktop = frame.translated(placement.display.full_frame().origin);
        self.write_desktop_frame(placement.reference_height, desktop)
    }

    /// One display-local scalar, as a control surface field shows it.
    pub fn field(&self, field: FrameField) -> Option<f64> {
        self.local_frame_on_screen()
            .map(|frame| field.get(&frame))
    }

    /// Update one display-local scalar, keeping the other three.
    pub fn set_field(&self, field: FrameField, value: f64) -> bool {
        self.set_fields(&[(field, value)])
    }

    /// Update several display-local scalars against one display snapshot.
    ///
    /// Moving only writes the position; resizing writes both because the
    /// desktop origin is the bottom-left corner.
    pub fn set_fields(&self, changes: &[(FrameField, f64)]) -> bool {
        let displays = self.display_set();
        let Some(placement) = self.placement_in(&displays, "set_fields") else {
            return false;
        };

        let screen = changes
            .iter()
            .fold(placement.screen_frame(), |frame, (field, value)| {
                field.with_value(&frame, *value)
            });
        let desktop = screen.translated(placement.display.full_frame().origin);

        if changes.iter().any(|(field, _)| field.changes_size()) {
            self.write_desktop_frame(placement.reference_height, desktop)
        } else {
            self.set_position(flip_y(
                desktop.origin,
                desktop.size,
                placement.reference_height,
            ))
        }
    }

    // --- commands ---

    /// Center the window in its owning display's usable frame, size unchanged.
    pub fn center(&self) -> bool {
        self.center_in(&self.display_set())
    }

    pub fn center_in(&self, displays: &DisplaySet) -> bool {
        info!(event = "core.window.center_started");

        let Some(placement) = self.placement_in(displays, "center") else {
            return false;
        };

        let target = placement
            .display
            .usable_frame()
            .centered_child(placement.desktop.size);
        let applied = self.set_position(flip_y(
            target.origin,
            target.size,
            placement.reference_height,
        ));

        info!(
            event = "core.window.center_completed",
            display_index = placement.display_index,
            x = target.origin.x,
            y = target.origin.y,
            applied = applied
        );
        applied
    }

    /// Make the window exactly cover its owning display's usable frame.
    pub fn maximize(&self) -> bool {
        self.maximize_in(&self.display_set())
    }

    pub fn maximize_in(&self, displays: &DisplaySet) -> bool {
        info!(event = "core.window.maximize_started");

        let Some(placement) = self.placement_in(displays, "maximize") else {
            return false;
        };

        let target = *placement.display.usable_frame();
        let applied = self.write_desktop_frame(placement.reference_height, target);

        info!(
            event = "core.window.maximize_completed",
            display_index = placement.display_index,
            width = target.size.width,
            height = target.size.height,
            applied = applied
        );
        applied
    }

    /// Titles and frame in `space`, read against one display snapshot.
    ///
    /// `None` when the frame cannot be expressed in `space`.
    pub fn snapshot(&self, space: FrameSpace) -> Option<WindowSnapshot> {
        let displays = self.display_set();

        let (frame, display_index) = match space {
            FrameSpace::Local => {
                let local = self.local_frame()?;
                let index = self
                    .placement_in(&displays, "snapshot")
                    .map(|placement| placement.display_index);
                (local, index)
            }
            FrameSpace::Desktop => {
                let placement = self.placement_in(&displays, "snapshot");
                let desktop = match placement {
                    Some(placement) => placement.desktop,
                    None => self.desktop_frame_in(&displays)?,
                };
                (desktop, placement.map(|placement| placement.display_index))
            }
            FrameSpace::Screen => {
                let placement = self.placement_in(&displays, "snapshot")?;
                (placement.screen_frame(), Some(placement.display_index))
            }
        };

        Some(WindowSnapshot::new(
            self.app_title(),
            self.window_title(),
            space,
            frame,
            display_index,
        ))
    }

    // --- internals ---

    fn placement_in(&self, displays: &DisplaySet, operation: &'static str) -> Option<Placement> {
        let Some(local) = self.local_frame() else {
            log_skipped(operation, "geometry_unavailable");
            return None;
        };
        let Some(reference_height) = displays.reference_height() else {
            log_skipped(operation, "no_displays");
            return None;
        };

        let desktop = flip_frame(&local, reference_height);
        let Some(display_index) = displays.owning_display_index(&desktop, self.fallback) else {
            log_skipped(operation, "no_owning_display");
            return None;
        };
        let display = *displays.get(display_index)?;

        Some(Placement {
            desktop,
            display_index,
            display,
            reference_height,
        })
    }

    fn write_desktop_frame(&self, reference_height: f64, frame: Frame) -> bool {
        let local = flip_frame(&frame, reference_height);

        // Reject up front so a bad size never leaves the window moved
        if !local.origin.is_finite() || !local.size.is_valid() {
            warn!(
                event = "core.window.frame_rejected",
                x = frame.origin.x,
                y = frame.origin.y,
                width = frame.size.width,
                height = frame.size.height
            );
            return false;
        }

        if !self.set_position(local.origin) {
            log_skipped("write_desktop_frame", "position_write_failed");
            return false;
        }
        self.set_size(local.size)
    }
}

fn read_value<T>(
    element: &dyn UiElement,
    target: &'static str,
    attribute: Attribute,
    convert: fn(AttributeValue, Attribute) -> Result<T, AccessibilityError>,
) -> Option<T> {
    match element
        .read_attribute(attribute)
        .and_then(|value| convert(value, attribute))
    {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(
                event = "core.window.attribute_read_failed",
                target = target,
                attribute = %attribute,
                error = %e,
                error_code = e.error_code()
            );
            None
        }
    }
}

fn write_value(element: &dyn UiElement, attribute: Attribute, value: AttributeValue) -> bool {
    match element.write_attribute(attribute, value) {
        Ok(()) => true,
        Err(e) => {
            warn!(
                event = "core.window.attribute_write_failed",
                attribute = %attribute,
                error = %e,
                error_code = e.error_code()
            );
            false
        }
    }
}

fn log_skipped(operation: &'static str, reason: &'static str) {
    debug!(
        event = "core.window.operation_skipped",
        operation = operation,
        reason = reason
    );
}
