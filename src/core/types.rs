use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_BOUNDS;

/// Canvas rectangle an instance is contained in. The origin is always `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDS[0], DEFAULT_BOUNDS[1])
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Behaviour switches carried by every instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceOptions {
    /// Keep the instance inside the canvas bounds.
    pub use_bounds: bool,
    /// Bounce elastically instead of stopping dead on contact.
    pub use_physics: bool,
    /// Test against peer instances.
    pub use_collision: bool,
}

impl InstanceOptions {
    /// All behaviours switched on.
    pub fn all() -> Self {
        Self {
            use_bounds: true,
            use_physics: true,
            use_collision: true,
        }
    }
}

/// Per-tick replacement values for an instance's velocity and size.
///
/// `None` leaves the current value alone, so a genuine zero velocity can be
/// requested with `Some(Vec2::ZERO)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionOverride {
    pub velocity: Option<Vec2>,
    pub size: Option<Vec2>,
}

impl MotionOverride {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn velocity(velocity: Vec2) -> Self {
        Self {
            velocity: Some(velocity),
            size: None,
        }
    }

    pub fn size(size: Vec2) -> Self {
        Self {
            velocity: None,
            size: Some(size),
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    /// Builds an override from raw components, treating an all-zero pair as
    /// "no change requested". Matches the canvas client's positional `update`.
    pub fn from_components(speed_x: f32, speed_y: f32, size_x: f32, size_y: f32) -> Self {
        let pick = |x: f32, y: f32| (x != 0.0 || y != 0.0).then(|| Vec2::new(x, y));
        Self {
            velocity: pick(speed_x, speed_y),
            size: pick(size_x, size_y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.velocity.is_none() && self.size.is_none()
    }
}
