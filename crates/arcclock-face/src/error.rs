use arcclock_engine::scene::ArcCmd;

/// A canvas refused a draw command.
///
/// Per-frame and recoverable: the driver skips the frame and carries on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DrawError {
    #[error("arc geometry is not drawable (radius {radius}, width {width}, angles {start}..{end})")]
    InvalidGeometry {
        radius: f32,
        width: f32,
        start: f32,
        end: f32,
    },
}

impl DrawError {
    pub(crate) fn invalid(cmd: &ArcCmd) -> Self {
        DrawError::InvalidGeometry {
            radius: cmd.radius,
            width: cmd.width,
            start: cmd.start_angle,
            end: cmd.end_angle,
        }
    }
}

/// Time override failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The components normalize to an instant outside the representable calendar.
    #[error("override {hours}h {minutes}m {seconds}s {milliseconds}ms is outside the representable calendar")]
    Unrepresentable {
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
    },
}
