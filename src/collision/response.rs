use glam::Vec2;
use log::debug;

use super::contact::Resolution;
use crate::core::instance::Instance;

/// Unit-mass elastic response along the line between two positions.
pub struct ElasticResponse;

impl ElasticResponse {
    /// Computes the impulse exchanged between two unit-mass bodies.
    ///
    /// The normal points from `position_a` to `position_b`. Only the
    /// normal component of the relative velocity is exchanged.
    pub fn impulse(
        position_a: Vec2,
        velocity_a: Vec2,
        position_b: Vec2,
        velocity_b: Vec2,
    ) -> Resolution {
        let Some(normal) = (position_b - position_a).try_normalize() else {
            return Resolution::Coincident;
        };

        let closing_speed = (velocity_a - velocity_b).dot(normal);
        if closing_speed < 0.0 {
            return Resolution::Separating;
        }

        Resolution::Impulse(normal * closing_speed)
    }

    /// Resolves a pair already known to be colliding (or not).
    pub fn resolve(subject: &mut Instance, target: &mut Instance, colliding: bool) -> Resolution {
        if !colliding {
            return Resolution::NotColliding;
        }

        if !subject.options.use_physics {
            subject.velocity = Vec2::ZERO;
            return Resolution::Stopped;
        }

        let resolution = Self::impulse(
            subject.position,
            subject.velocity,
            target.position,
            target.velocity,
        );

        match resolution {
            Resolution::Impulse(impulse) => {
                subject.velocity -= impulse;
                target.velocity += impulse;
            }
            Resolution::Coincident => {
                debug!(
                    "skipping response between {} and {}: coincident positions",
                    subject.id(),
                    target.id()
                );
            }
            Resolution::NotColliding | Resolution::Stopped | Resolution::Separating => {}
        }

        resolution
    }
}

impl Instance {
    /// Applies collision response against `target` when `colliding` is set.
    ///
    /// Without physics only this instance stops. With physics both velocities
    /// change by an equal and opposite impulse.
    pub fn handle_collision(&mut self, target: &mut Instance, colliding: bool) -> Resolution {
        ElasticResponse::resolve(self, target, colliding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn physics_body(position: Vec2, velocity: Vec2) -> Instance {
        Instance::builder()
            .position(position)
            .velocity(velocity)
            .use_physics(true)
            .build()
    }

    #[test]
    fn head_on_collision_transfers_momentum() {
        let mut a = physics_body(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let mut b = physics_body(Vec2::new(10.0, 0.0), Vec2::ZERO);

        let resolution = a.handle_collision(&mut b, true);

        assert_eq!(resolution, Resolution::Impulse(Vec2::new(1.0, 0.0)));
        assert_eq!(a.velocity, Vec2::ZERO);
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn tangential_velocity_is_untouched() {
        let mut a = physics_body(Vec2::ZERO, Vec2::new(2.0, 3.0));
        let mut b = physics_body(Vec2::new(10.0, 0.0), Vec2::ZERO);

        a.handle_collision(&mut b, true);

        assert_relative_eq!(a.velocity.x, 0.0);
        assert_relative_eq!(a.velocity.y, 3.0);
        assert_relative_eq!(b.velocity.x, 2.0);
        assert_relative_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn response_conserves_momentum() {
        let mut a = physics_body(Vec2::new(1.0, 2.0), Vec2::new(3.0, -1.0));
        let mut b = physics_body(Vec2::new(4.0, 6.0), Vec2::new(-1.0, -2.0));
        let before = a.velocity + b.velocity;

        a.handle_collision(&mut b, true);

        let after = a.velocity + b.velocity;
        assert_relative_eq!(before.x, after.x, epsilon = 1e-5);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-5);
    }

    #[test]
    fn separating_pairs_are_left_alone() {
        let mut a = physics_body(Vec2::ZERO, Vec2::new(-1.0, 0.0));
        let mut b = physics_body(Vec2::new(10.0, 0.0), Vec2::ZERO);

        assert_eq!(a.handle_collision(&mut b, true), Resolution::Separating);
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::ZERO);
    }

    #[test]
    fn coincident_positions_do_not_produce_nan() {
        let mut a = physics_body(Vec2::splat(5.0), Vec2::new(1.0, 1.0));
        let mut b = physics_body(Vec2::splat(5.0), Vec2::new(-1.0, 0.0));

        assert_eq!(a.handle_collision(&mut b, true), Resolution::Coincident);
        assert_eq!(a.velocity, Vec2::new(1.0, 1.0));
        assert_eq!(b.velocity, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn without_physics_only_the_subject_stops() {
        let mut a = Instance::builder().velocity(Vec2::new(2.0, 1.0)).build();
        let mut b = Instance::builder()
            .position(Vec2::new(5.0, 0.0))
            .velocity(Vec2::new(-1.0, 0.0))
            .build();

        assert_eq!(a.handle_collision(&mut b, true), Resolution::Stopped);
        assert_eq!(a.velocity, Vec2::ZERO);
        assert_eq!(b.velocity, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn not_colliding_is_a_no_op() {
        let mut a = Instance::builder().velocity(Vec2::new(2.0, 1.0)).build();
        let mut b = Instance::default();

        assert_eq!(a.handle_collision(&mut b, false), Resolution::NotColliding);
        assert_eq!(a.velocity, Vec2::new(2.0, 1.0));
    }
}
