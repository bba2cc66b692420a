use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{instance::Instance, shape::ShapeKind, types::Bounds};

/// Canvas edge an instance crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Edges penetrated during one containment check, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsReport {
    pub sides: Vec<Side>,
    /// True when the hits were answered by reflection rather than clamping.
    pub reflected: bool,
}

impl BoundsReport {
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    pub fn contains(&self, side: Side) -> bool {
        self.sides.contains(&side)
    }
}

/// Keeps instances inside a [`Bounds`] rectangle anchored at the origin.
pub struct BoundsContainment;

impl BoundsContainment {
    /// Allowed range for the instance's anchor point.
    ///
    /// Rectangles are anchored at their top-left corner, circles at their
    /// center, so circles keep a radius of clearance on the near edges too.
    pub fn anchor_limits(instance: &Instance, bounds: &Bounds) -> (Vec2, Vec2) {
        let far = Vec2::new(bounds.width, bounds.height);
        match instance.shape() {
            ShapeKind::Box | ShapeKind::Sprite { .. } => (Vec2::ZERO, far - instance.size()),
            ShapeKind::Circle => {
                let clearance = Vec2::splat(instance.radius());
                (clearance, far - clearance)
            }
        }
    }

    /// Runs the left, right, top and bottom checks in that order. Every check
    /// sees the result of the previous one, so corners are corrected twice.
    pub fn apply(instance: &mut Instance, bounds: &Bounds) -> BoundsReport {
        let (min, max) = Self::anchor_limits(instance, bounds);
        let mut report = BoundsReport {
            sides: Vec::new(),
            reflected: instance.options.use_physics,
        };

        if instance.position.x < min.x {
            Self::correct(instance, Side::Left, min.x);
            report.sides.push(Side::Left);
        }
        if instance.position.x > max.x {
            Self::correct(instance, Side::Right, max.x);
            report.sides.push(Side::Right);
        }
        if instance.position.y < min.y {
            Self::correct(instance, Side::Top, min.y);
            report.sides.push(Side::Top);
        }
        if instance.position.y > max.y {
            Self::correct(instance, Side::Bottom, max.y);
            report.sides.push(Side::Bottom);
        }

        report
    }

    fn correct(instance: &mut Instance, side: Side, limit: f32) {
        let horizontal = matches!(side, Side::Left | Side::Right);

        if instance.options.use_physics {
            // Position is left for the next integration step to carry back in.
            if horizontal {
                instance.velocity.x = -instance.velocity.x;
            } else {
                instance.velocity.y = -instance.velocity.y;
            }
            return;
        }

        if horizontal {
            instance.position.x = limit;
        } else {
            instance.position.y = limit;
        }
        instance.velocity = Vec2::ZERO;
        debug!(
            "{} {} clamped at {side:?} edge",
            instance.shape().name(),
            instance.id()
        );
    }
}

impl Instance {
    /// Reflects or clamps this instance against the canvas edges.
    pub fn check_bounds_collision(&mut self, bounds: &Bounds) -> BoundsReport {
        BoundsContainment::apply(self, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Bounds {
        Bounds::new(200.0, 200.0)
    }

    #[test]
    fn clamping_zeroes_both_velocity_components() {
        let mut instance = Instance::builder()
            .position(Vec2::new(-3.0, 4.0))
            .velocity(Vec2::new(-1.0, 2.0))
            .build();

        let report = instance.check_bounds_collision(&canvas());

        assert_eq!(report.sides, vec![Side::Left]);
        assert!(!report.reflected);
        assert_eq!(instance.position, Vec2::new(0.0, 4.0));
        assert_eq!(instance.velocity, Vec2::ZERO);
    }

    #[test]
    fn reflection_leaves_position_alone() {
        let mut instance = Instance::builder()
            .position(Vec2::new(-3.0, 4.0))
            .velocity(Vec2::new(-2.0, 1.0))
            .use_physics(true)
            .build();

        let report = instance.check_bounds_collision(&canvas());

        assert!(report.reflected);
        assert_eq!(instance.velocity, Vec2::new(2.0, 1.0));
        assert_eq!(instance.position, Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn far_edges_account_for_extent() {
        let mut instance = Instance::rect(Vec2::new(195.0, 50.0), Vec2::splat(10.0));
        let report = instance.check_bounds_collision(&canvas());
        assert!(report.contains(Side::Right));
        assert_eq!(instance.position.x, 190.0);
    }

    #[test]
    fn corner_penetration_corrects_both_axes() {
        let mut instance = Instance::builder()
            .position(Vec2::new(-1.0, 196.0))
            .velocity(Vec2::new(-1.0, 1.0))
            .use_physics(true)
            .build();

        let report = instance.check_bounds_collision(&canvas());

        assert_eq!(report.sides, vec![Side::Left, Side::Bottom]);
        assert_eq!(instance.velocity, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn circles_keep_radius_clearance_on_near_edges() {
        let mut circle = Instance::circle(Vec2::new(3.0, 100.0), 5.0);
        let report = circle.check_bounds_collision(&canvas());
        assert_eq!(report.sides, vec![Side::Left]);
        assert_eq!(circle.position, Vec2::new(5.0, 100.0));

        let mut circle = Instance::circle(Vec2::new(100.0, 198.0), 5.0);
        circle.check_bounds_collision(&canvas());
        assert_eq!(circle.position, Vec2::new(100.0, 195.0));
    }

    #[test]
    fn contained_instances_are_untouched() {
        let mut instance = Instance::builder()
            .position(Vec2::new(50.0, 50.0))
            .velocity(Vec2::new(3.0, -3.0))
            .build();

        let report = instance.check_bounds_collision(&canvas());

        assert!(report.is_empty());
        assert_eq!(instance.velocity, Vec2::new(3.0, -3.0));
    }
}
