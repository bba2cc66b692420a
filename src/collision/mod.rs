//! Collision modules: narrow-phase overlap tests, bounds containment, and response.

pub mod bounds;
pub mod contact;
pub mod narrowphase;
pub mod response;

pub use bounds::{BoundsContainment, BoundsReport, Side};
pub use contact::{CollisionEvent, Resolution};
pub use narrowphase::NarrowPhase;
pub use response::ElasticResponse;
