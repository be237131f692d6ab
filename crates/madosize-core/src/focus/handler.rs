use tracing::{debug, info, warn};

use super::errors::FocusError;
use crate::config::MadoConfig;
use crate::display::DisplayFallback;
use crate::errors::MadoError;
use crate::window::WindowHandle;

/// Finds the window the user is currently working in.
pub trait FocusLocator {
    fn focused_window(&self) -> Result<WindowHandle, FocusError>;
}

/// Focus lookup through the host's accessibility layer.
#[derive(Debug, Clone, Copy)]
pub struct SystemFocusLocator {
    messaging_timeout_secs: f32,
    fallback: DisplayFallback,
}

impl SystemFocusLocator {
    pub fn new(messaging_timeout_secs: f32, fallback: DisplayFallback) -> Self {
        Self {
            messaging_timeout_secs,
            fallback,
        }
    }

    pub fn from_config(config: &MadoConfig) -> Self {
        Self::new(config.messaging_timeout_secs(), config.display_fallback())
    }

    pub fn messaging_timeout_secs(&self) -> f32 {
        self.messaging_timeout_secs
    }

    pub fn display_fallback(&self) -> DisplayFallback {
        self.fallback
    }
}

impl Default for SystemFocusLocator {
    fn default() -> Self {
        Self::from_config(&MadoConfig::default())
    }
}

impl FocusLocator for SystemFocusLocator {
    #[cfg(target_os = "macos")]
    fn focused_window(&self) -> Result<WindowHandle, FocusError> {
        super::macos::focused_window(self.messaging_timeout_secs)
            .map(|handle| handle.with_display_fallback(self.fallback))
    }

    #[cfg(not(target_os = "macos"))]
    fn focused_window(&self) -> Result<WindowHandle, FocusError> {
        Err(FocusError::Unsupported {
            os: std::env::consts::OS,
        })
    }
}

/// The focused window, or `None` when nothing is focused, permission is
/// missing, or the platform has no accessibility layer.
pub fn current_focused_window(locator: &dyn FocusLocator) -> Option<WindowHandle> {
    info!(event = "core.focus.lookup_started");

    match locator.focused_window() {
        Ok(handle) => {
            info!(event = "core.focus.lookup_completed");
            Some(handle)
        }
        Err(e @ (FocusError::NoFocusedApplication { .. } | FocusError::NoFocusedWindow { .. })) => {
            debug!(
                event = "core.focus.lookup_empty",
                error = %e,
                error_code = e.error_code()
            );
            None
        }
        Err(e) => {
            warn!(
                event = "core.focus.lookup_failed",
                error = %e,
                error_code = e.error_code()
            );
            None
        }
    }
}
