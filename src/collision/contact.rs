use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::utils::id::InstanceId;

/// Result of testing and resolving one (subject, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub target: InstanceId,
    pub colliding: bool,
    pub resolution: Resolution,
}

/// What collision response did to the pair's velocities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    /// Pair was not overlapping; nothing changed.
    NotColliding,
    /// Physics disabled: the subject was brought to a full stop.
    Stopped,
    /// Already moving apart along the normal; nothing changed.
    Separating,
    /// Positions coincide so no normal exists; nothing changed.
    Coincident,
    /// Impulse subtracted from the subject and added to the target.
    Impulse(Vec2),
}
