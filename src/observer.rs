//! Step observer trait for monitoring simulation progress.

/// Trait for observing rosary simulation steps.
///
/// Implement this to monitor solver progress (debug overlays, profiling,
/// tests). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all free nodes have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation iteration (links, bounds, collisions).
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called after a collision pass with the number of overlapping pairs pushed apart.
    fn on_collision_pass(&mut self, _resolved_pairs: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
