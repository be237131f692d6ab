use accessibility_sys::{kAXFocusedApplicationAttribute, kAXFocusedWindowAttribute};
use tracing::debug;

use super::errors::FocusError;
use crate::accessibility::macos::{AxElement, is_process_trusted};
use crate::display::SystemDisplays;
use crate::window::WindowHandle;

/// Resolve system-wide element -> focused application -> focused window.
pub(super) fn focused_window(messaging_timeout_secs: f32) -> Result<WindowHandle, FocusError> {
    if !is_process_trusted() {
        return Err(FocusError::PermissionDenied);
    }

    let system = AxElement::system_wide().ok_or(FocusError::SystemWideUnavailable)?;
    system.set_messaging_timeout(messaging_timeout_secs);

    let app = system
        .copy_element_attribute(kAXFocusedApplicationAttribute)
        .map_err(|code| FocusError::NoFocusedApplication { code })?;
    app.set_messaging_timeout(messaging_timeout_secs);

    let window = app
        .copy_element_attribute(kAXFocusedWindowAttribute)
        .map_err(|code| FocusError::NoFocusedWindow { code })?;
    window.set_messaging_timeout(messaging_timeout_secs);

    debug!(
        event = "core.focus.window_resolved",
        timeout_secs = messaging_timeout_secs
    );

    Ok(WindowHandle::new(
        Box::new(app),
        Box::new(window),
        Box::new(SystemDisplays),
    ))
}
