//! Core types describing simulated instances and their shared data.

pub mod instance;
pub mod shape;
pub mod types;

pub use instance::{CollisionOutcome, Instance, InstanceBuilder};
pub use shape::ShapeKind;
pub use types::{Bounds, InstanceOptions, MotionOverride};
