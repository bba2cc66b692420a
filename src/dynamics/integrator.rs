use crate::core::{instance::Instance, types::MotionOverride};

/// Explicit Euler stepping with an implicit time step of one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    pub fn new() -> Self {
        Self
    }

    /// Replaces velocity and/or size wholesale with any overrides given.
    pub fn apply_overrides(&self, instance: &mut Instance, overrides: &MotionOverride) {
        if let Some(velocity) = overrides.velocity {
            instance.velocity = velocity;
        }
        if let Some(size) = overrides.size {
            instance.set_size(size);
        }
    }

    pub fn integrate_position(&self, instance: &mut Instance) {
        instance.position += instance.velocity;
    }

    pub fn step(&self, instance: &mut Instance, overrides: &MotionOverride) {
        self.apply_overrides(instance, overrides);
        self.integrate_position(instance);
    }
}

impl Instance {
    /// Advances one tick along the current velocity.
    pub fn update(&mut self) {
        Integrator::new().step(self, &MotionOverride::none());
    }

    /// Applies the overrides, then advances one tick.
    pub fn update_with(&mut self, overrides: MotionOverride) {
        Integrator::new().step(self, &overrides);
    }
}
