use std::collections::HashMap;

use log::debug;

use crate::{
    collision::{CollisionEvent, Resolution},
    config::DEFAULT_FRAME_BUDGET_MS,
    core::{
        instance::{CollisionOutcome, Instance},
        types::{Bounds, MotionOverride},
    },
    dynamics::integrator::Integrator,
    render::DrawSurface,
    utils::{
        id::InstanceId,
        logging::{warn_if_frame_budget_exceeded, ScopedTimer},
        slots::pair_mut,
    },
};

/// Counters gathered over one [`Scene::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub pairs_tested: usize,
    pub colliding_pairs: usize,
    pub impulses: usize,
    pub stops: usize,
    pub bounds_hits: usize,
    pub over_budget: bool,
}

impl StepStats {
    fn record_event(&mut self, event: &CollisionEvent) {
        self.pairs_tested += 1;
        if event.colliding {
            self.colliding_pairs += 1;
        }
        match event.resolution {
            Resolution::Impulse(_) => self.impulses += 1,
            Resolution::Stopped => self.stops += 1,
            Resolution::NotColliding | Resolution::Separating | Resolution::Coincident => {}
        }
    }

    fn record(&mut self, outcome: &CollisionOutcome) {
        for event in &outcome.events {
            self.record_event(event);
        }
        if let Some(report) = &outcome.bounds {
            self.bounds_hits += report.sides.len();
        }
    }
}

/// Ordered set of instances sharing one canvas, stepped once per tick.
///
/// Each step integrates every instance, then lets each instance in insertion
/// order collide with every other instance and the bounds. Later pairs see
/// velocities already changed by earlier ones.
pub struct Scene {
    instances: Vec<Instance>,
    pub bounds: Bounds,
    pub frame_budget_ms: f32,
    integrator: Integrator,
    pending_overrides: HashMap<InstanceId, MotionOverride>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

impl Scene {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            instances: Vec::new(),
            bounds,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            integrator: Integrator::new(),
            pending_overrides: HashMap::new(),
        }
    }

    pub fn add(&mut self, instance: Instance) -> InstanceId {
        let id = instance.id();
        self.instances.push(instance);
        id
    }

    pub fn remove(&mut self, id: InstanceId) -> Option<Instance> {
        let index = self.index_of(id)?;
        self.pending_overrides.remove(&id);
        Some(self.instances.remove(index))
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.iter().find(|instance| instance.id() == id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut Instance> {
        self.instances.iter_mut().find(|instance| instance.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.instances.iter().map(Instance::id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Queues velocity/size replacements for `id`, consumed by the next step.
    /// Returns `false` when the instance is not in the scene.
    pub fn queue_override(&mut self, id: InstanceId, overrides: MotionOverride) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.pending_overrides.insert(id, overrides);
        true
    }

    /// Tests and resolves a single ordered pair outside of the regular step.
    pub fn check_pair(&mut self, subject: InstanceId, target: InstanceId) -> Option<CollisionEvent> {
        let subject = self.index_of(subject)?;
        let target = self.index_of(target)?;
        let (subject, target) = pair_mut(&mut self.instances, subject, target)?;
        subject.check_pair(target)
    }

    /// Advances the scene by one tick: integration, then collision and containment.
    pub fn step(&mut self) -> StepStats {
        let timer = ScopedTimer::new("scene::step");
        let mut stats = StepStats::default();

        {
            let _timer = ScopedTimer::new("scene::integrate");
            for instance in &mut self.instances {
                let overrides = self
                    .pending_overrides
                    .remove(&instance.id())
                    .unwrap_or_default();
                self.integrator.step(instance, &overrides);
            }
            self.pending_overrides.clear();
        }

        {
            let _timer = ScopedTimer::new("scene::collide");
            let bounds = self.bounds;
            for index in 0..self.instances.len() {
                let (before, rest) = self.instances.split_at_mut(index);
                let Some((subject, after)) = rest.split_first_mut() else {
                    continue;
                };
                let peers = before.iter_mut().chain(after.iter_mut());
                let outcome = subject.check_collision(peers, Some(&bounds));
                stats.record(&outcome);
            }
        }

        stats.over_budget = warn_if_frame_budget_exceeded(timer.elapsed(), self.frame_budget_ms);
        debug!(
            "scene step: {} instances, {} pairs, {} colliding, {} bounds hits",
            self.instances.len(),
            stats.pairs_tested,
            stats.colliding_pairs,
            stats.bounds_hits
        );
        stats
    }

    /// Draws every instance in insertion order.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for instance in &self.instances {
            instance.render(surface);
        }
    }

    fn index_of(&self, id: InstanceId) -> Option<usize> {
        self.instances.iter().position(|instance| instance.id() == id)
    }
}
