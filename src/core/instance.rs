use glam::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};

use super::{
    shape::ShapeKind,
    types::{Bounds, InstanceOptions},
};
use crate::{
    collision::{bounds::BoundsReport, CollisionEvent},
    config::DEFAULT_SIZE,
    utils::id::InstanceId,
};

/// A single simulated entity: a box, circle or sprite with its kinematic state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    id: InstanceId,
    shape: ShapeKind,
    size: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    pub options: InstanceOptions,
    is_colliding: bool,
}

impl Default for Instance {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Instance {
    pub fn builder() -> InstanceBuilder {
        InstanceBuilder::new()
    }

    pub fn rect(position: Vec2, size: Vec2) -> Self {
        Self::builder().position(position).size(size).build()
    }

    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::builder()
            .shape(ShapeKind::Circle)
            .position(center)
            .size(Vec2::splat(radius))
            .build()
    }

    pub fn sprite(source: impl Into<String>, position: Vec2, size: Vec2) -> Self {
        Self::builder()
            .shape(ShapeKind::sprite(source))
            .position(position)
            .size(size)
            .build()
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Radius used by circle tests. Every shape answers with `size.x`.
    pub fn radius(&self) -> f32 {
        self.size.x
    }

    /// Replaces the extent, clamping negative components to zero.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = sanitize_size(size);
    }

    /// Outcome of the most recently evaluated collision target.
    pub fn is_colliding(&self) -> bool {
        self.is_colliding
    }

    pub(crate) fn set_colliding(&mut self, colliding: bool) {
        self.is_colliding = colliding;
    }

    /// Runs entity collision (when enabled) followed by bounds containment
    /// (when enabled and bounds are given).
    pub fn check_collision<'a, I>(&mut self, targets: I, bounds: Option<&Bounds>) -> CollisionOutcome
    where
        I: IntoIterator<Item = &'a mut Instance>,
    {
        let events = if self.options.use_collision {
            self.check_entity_collision(targets)
        } else {
            Vec::new()
        };

        let bounds = match bounds {
            Some(bounds) if self.options.use_bounds => Some(self.check_bounds_collision(bounds)),
            _ => None,
        };

        CollisionOutcome { events, bounds }
    }
}

/// Everything a [`Instance::check_collision`] call detected and resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    pub events: Vec<CollisionEvent>,
    pub bounds: Option<BoundsReport>,
}

fn sanitize_size(size: Vec2) -> Vec2 {
    if size.x < 0.0 || size.y < 0.0 {
        warn!("negative instance size {size} clamped to zero");
    }
    size.max(Vec2::ZERO)
}

pub struct InstanceBuilder {
    id: Option<InstanceId>,
    shape: ShapeKind,
    size: Vec2,
    position: Vec2,
    velocity: Vec2,
    options: InstanceOptions,
}

impl Default for InstanceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstanceBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            shape: ShapeKind::Box,
            size: Vec2::from_array(DEFAULT_SIZE),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            options: InstanceOptions::default(),
        }
    }

    /// Uses a caller supplied id instead of generating one.
    pub fn id(mut self, id: InstanceId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn options(mut self, options: InstanceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn use_bounds(mut self, enabled: bool) -> Self {
        self.options.use_bounds = enabled;
        self
    }

    pub fn use_physics(mut self, enabled: bool) -> Self {
        self.options.use_physics = enabled;
        self
    }

    pub fn use_collision(mut self, enabled: bool) -> Self {
        self.options.use_collision = enabled;
        self
    }

    pub fn build(self) -> Instance {
        Instance {
            id: self.id.unwrap_or_else(InstanceId::generate),
            shape: self.shape,
            size: sanitize_size(self.size),
            position: self.position,
            velocity: self.velocity,
            options: self.options,
            is_colliding: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_canvas_client() {
        let instance = Instance::default();
        assert_eq!(instance.shape(), &ShapeKind::Box);
        assert_eq!(instance.size(), Vec2::new(10.0, 10.0));
        assert_eq!(instance.position, Vec2::ZERO);
        assert_eq!(instance.velocity, Vec2::ZERO);
        assert_eq!(instance.options, InstanceOptions::default());
        assert!(!instance.is_colliding());
    }

    #[test]
    fn negative_sizes_are_clamped() {
        let mut instance = Instance::rect(Vec2::ZERO, Vec2::new(-4.0, 6.0));
        assert_eq!(instance.size(), Vec2::new(0.0, 6.0));

        instance.set_size(Vec2::new(3.0, -1.0));
        assert_eq!(instance.size(), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn each_instance_gets_its_own_id() {
        let a = Instance::default();
        let b = Instance::default();
        assert_ne!(a.id(), b.id());

        let copy = a.clone();
        assert_eq!(copy.id(), a.id());
    }

    #[test]
    fn check_collision_respects_disabled_options() {
        let mut instance = Instance::builder()
            .position(Vec2::new(-5.0, 0.0))
            .velocity(Vec2::new(1.0, 1.0))
            .build();
        let mut other = Instance::rect(Vec2::new(-5.0, 0.0), Vec2::splat(10.0));

        let outcome = instance.check_collision([&mut other], Some(&Bounds::new(100.0, 100.0)));

        assert!(outcome.events.is_empty());
        assert!(outcome.bounds.is_none());
        assert_eq!(instance.position, Vec2::new(-5.0, 0.0));
        assert_eq!(instance.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn check_collision_without_bounds_skips_containment() {
        let mut instance = Instance::builder()
            .position(Vec2::new(-5.0, 0.0))
            .use_bounds(true)
            .build();

        let outcome = instance.check_collision(std::iter::empty(), None);

        assert!(outcome.bounds.is_none());
        assert_eq!(instance.position.x, -5.0);
    }
}
