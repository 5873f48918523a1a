//! One simulation step: Verlet integration followed by iterative relaxation.

use crate::bounds::Bounds;
use crate::collision;
use crate::config::SimConfig;
use crate::float::Float;
use crate::graph::RosaryGraph;
use crate::observer::StepObserver;

/// Per-call toggles. Passed explicitly every step; the solver reads no global state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepFlags {
    pub gravity: bool,
    pub collision: bool,
}

impl StepFlags {
    pub fn new(gravity: bool, collision: bool) -> Self {
        StepFlags { gravity, collision }
    }
}

impl<F: Float> From<&SimConfig<F>> for StepFlags {
    fn from(config: &SimConfig<F>) -> Self {
        StepFlags::new(config.gravity_enabled, config.collision_enabled)
    }
}

/// Advance the graph by `dt` seconds in place.
///
/// 1. Integrate every free node (damped implied velocity, gravity on +y).
/// 2. Repeat `config.iterations` times: relax every link, clamp every free
///    node to `bounds`, then push overlapping pairs apart if collision is on.
///
/// Deterministic for identical graph state, `dt`, flags and config. `dt` is
/// used as given; callers clamp it (see [`crate::clock::FrameClock`]).
pub fn step<F: Float, O: StepObserver>(
    graph: &mut RosaryGraph<F>,
    dt: F,
    flags: StepFlags,
    bounds: Bounds<F>,
    config: &SimConfig<F>,
    observer: &mut O,
) {
    let gravity = if flags.gravity { config.gravity } else { F::zero() };
    for n in graph.nodes.iter_mut() {
        n.integrate(dt, config.damping, gravity);
    }
    observer.on_integrate();

    for i in 0..config.iterations {
        for link in graph.links.iter() {
            link.relax(&mut graph.nodes, config.stiffness);
        }
        bounds.clamp_all(&mut graph.nodes);
        if flags.collision {
            let resolved = collision::repel(&mut graph.nodes, config.collision_repulsion);
            observer.on_collision_pass(resolved);
        }
        observer.on_relax_iteration(i);
    }

    observer.on_step_complete();
}

/// Run a single relaxation pass over every link.
pub fn relax_links<F: Float>(graph: &mut RosaryGraph<F>, stiffness: F) {
    for link in graph.links.iter() {
        link.relax(&mut graph.nodes, stiffness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeKind};
    use crate::observer::NoOpStepObserver;
    use crate::vec::Vec2;

    #[derive(Default)]
    struct Counter {
        integrations: usize,
        iterations: usize,
        collision_passes: usize,
        completed: usize,
    }

    impl StepObserver for Counter {
        fn on_integrate(&mut self) { self.integrations += 1; }
        fn on_relax_iteration(&mut self, _iteration: usize) { self.iterations += 1; }
        fn on_collision_pass(&mut self, _resolved_pairs: usize) { self.collision_passes += 1; }
        fn on_step_complete(&mut self) { self.completed += 1; }
    }

    fn single(x: f32, y: f32) -> RosaryGraph<f32> {
        let mut graph = RosaryGraph::new();
        graph.add_node(Node::new("medal", NodeKind::Medal, Vec2::new(x, y), 9.5));
        graph
    }

    #[test]
    fn observer_sees_every_phase() {
        let mut graph = single(100.0, 100.0);
        let config = SimConfig::new().with_iterations(5);
        let mut counter = Counter::default();
        step(
            &mut graph,
            1.0 / 60.0,
            StepFlags::new(true, true),
            Bounds::new(600.0, 640.0, 2.0),
            &config,
            &mut counter,
        );
        assert_eq!(counter.integrations, 1);
        assert_eq!(counter.iterations, 5);
        assert_eq!(counter.collision_passes, 5);
        assert_eq!(counter.completed, 1);
    }

    #[test]
    fn collision_disabled_skips_pass() {
        let mut graph = single(100.0, 100.0);
        let mut counter = Counter::default();
        step(
            &mut graph,
            1.0 / 60.0,
            StepFlags::new(true, false),
            Bounds::new(600.0, 640.0, 2.0),
            &SimConfig::new(),
            &mut counter,
        );
        assert_eq!(counter.collision_passes, 0);
    }

    #[test]
    fn gravity_disabled_keeps_resting_node_still() {
        let mut graph = single(100.0, 100.0);
        step(
            &mut graph,
            0.033,
            StepFlags::new(false, false),
            Bounds::new(600.0, 640.0, 2.0),
            &SimConfig::new(),
            &mut NoOpStepObserver,
        );
        assert_eq!(graph.node(0).pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn gravity_pulls_down() {
        let mut graph = single(100.0, 100.0);
        step(
            &mut graph,
            0.033,
            StepFlags::new(true, false),
            Bounds::new(600.0, 640.0, 2.0),
            &SimConfig::new(),
            &mut NoOpStepObserver,
        );
        assert!(graph.node(0).pos.y > 100.0);
        assert_eq!(graph.node(0).pos.x, 100.0);
    }
}
