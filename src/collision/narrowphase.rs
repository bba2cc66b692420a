use glam::Vec2;

use super::contact::CollisionEvent;
use crate::core::{instance::Instance, shape::ShapeKind};

/// Exact pairwise overlap tests, dispatched on the subject's shape.
pub struct NarrowPhase;

impl NarrowPhase {
    /// Tests `subject` against `target` using the subject's geometry.
    ///
    /// Rectangles test against the target's rectangle and circles against the
    /// target's `size.x` as a radius, whatever shape the target really has.
    /// This cross-shape radius approximation is intentional.
    pub fn overlaps(subject: &Instance, target: &Instance) -> bool {
        match subject.shape() {
            ShapeKind::Box | ShapeKind::Sprite { .. } => Self::aabb_overlap(
                subject.position,
                subject.size(),
                target.position,
                target.size(),
            ),
            ShapeKind::Circle => Self::circle_overlap(
                subject.position,
                subject.radius(),
                target.position,
                target.radius(),
            ),
        }
    }

    /// Separating-axis test on two top-left anchored rectangles. Shared edges
    /// count as overlap.
    pub fn aabb_overlap(position_a: Vec2, size_a: Vec2, position_b: Vec2, size_b: Vec2) -> bool {
        let separated = position_a.x > position_b.x + size_b.x
            || position_a.x + size_a.x < position_b.x
            || position_a.y > position_b.y + size_b.y
            || position_a.y + size_a.y < position_b.y;
        !separated
    }

    /// Center distance against the sum of radii. Tangent circles overlap.
    pub fn circle_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
        center_a.distance(center_b) <= radius_a + radius_b
    }
}

impl Instance {
    /// Detects and resolves a single pair. Returns `None` when `target` carries
    /// this instance's own id.
    pub fn check_pair(&mut self, target: &mut Instance) -> Option<CollisionEvent> {
        if self.id() == target.id() {
            return None;
        }

        let colliding = NarrowPhase::overlaps(self, target);
        self.set_colliding(colliding);
        let resolution = self.handle_collision(target, colliding);

        Some(CollisionEvent {
            target: target.id(),
            colliding,
            resolution,
        })
    }

    /// Walks `targets` in order, testing and resolving each pair as it goes.
    ///
    /// Velocities changed by an earlier pair are visible to later pairs in the
    /// same pass.
    pub fn check_entity_collision<'a, I>(&mut self, targets: I) -> Vec<CollisionEvent>
    where
        I: IntoIterator<Item = &'a mut Instance>,
    {
        targets
            .into_iter()
            .filter_map(|target| self.check_pair(target))
            .collect()
    }
}
