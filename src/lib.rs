//! Canvas Physics – box, circle and sprite instances for 2D canvas scenes.
//!
//! Every [`Instance`] carries its own shape, extent and velocity, and knows how
//! to test itself against peers, stay inside the canvas bounds, bounce off
//! other instances with a unit-mass elastic response, and draw itself onto a
//! [`DrawSurface`]. [`Scene`] drives a set of instances one tick at a time.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod render;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{
    bounds::{BoundsContainment, BoundsReport, Side},
    contact::{CollisionEvent, Resolution},
    narrowphase::NarrowPhase,
    response::ElasticResponse,
};
pub use crate::core::{
    instance::{CollisionOutcome, Instance, InstanceBuilder},
    shape::ShapeKind,
    types::{Bounds, InstanceOptions, MotionOverride},
};
pub use dynamics::integrator::Integrator;
pub use render::{CommandBuffer, DrawCommand, DrawSurface};
pub use utils::id::InstanceId;
pub use world::{Scene, StepStats};
