//! Global configuration constants for the Canvas Physics crate.

/// Default extent of a freshly built instance (width, height).
pub const DEFAULT_SIZE: [f32; 2] = [10.0, 10.0];

/// Number of characters in a generated instance identifier.
pub const ID_LENGTH: usize = 10;

/// Fill style used for boxes and circles.
pub const DEFAULT_FILL_STYLE: &str = "black";

/// Default canvas bounds used by a new [`crate::Scene`].
pub const DEFAULT_BOUNDS: [f32; 2] = [800.0, 600.0];

/// Frame budget (in milliseconds) a scene step is expected to fit in.
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;
