//! Default values for configuration fields.

/// Default AX messaging timeout (1 second).
///
/// Matches the timeout the accessibility layer is given for window
/// raise/minimize calls; long enough for a busy app, short enough that an
/// unresponsive one does not hang the command.
pub fn default_messaging_timeout_secs() -> f32 {
    1.0
}
