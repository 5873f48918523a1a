//! The rosary engine: one graph per surface plus the state around it.

use alloc::string::String;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::bounds::Bounds;
use crate::clock::clamp_dt;
use crate::config::{ConfigSnapshot, ScaledConfig, SimConfig};
use crate::error::Result;
use crate::float::Float;
use crate::graph::RosaryGraph;
use crate::interaction::{self, Interaction};
use crate::link::Link;
use crate::node::Node;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::scale::{scale_changed, Surface};
use crate::solver::{self, StepFlags};
use crate::topology::{self, LoopLayout};
use crate::vec::Vec2;

/// A live rosary on one surface.
///
/// Owns its graph exclusively. Input handlers, `resize` and `step` must not
/// interleave within one frame; the host serialises them.
///
/// ```
/// use rosary::{Rosary, SimConfig, Surface};
///
/// let mut rosary: Rosary<f32> = Rosary::new(Surface::new(600.0, 640.0), SimConfig::new()).unwrap();
/// rosary.step(1.0 / 60.0);
/// assert!(rosary.highlight("medal"));
/// assert_eq!(rosary.highlighted(), Some("medal"));
/// ```
pub struct Rosary<F: Float> {
    config: SimConfig<F>,
    surface: Surface<F>,
    scaled: ScaledConfig<F>,
    graph: RosaryGraph<F>,
    interaction: Interaction<F>,
    highlighted: Option<String>,
    rng: SmallRng,
    destroyed: bool,
}

impl<F: Float> Rosary<F> {
    /// Validate `config`, derive the scale from `surface` and build the graph.
    pub fn new(surface: Surface<F>, config: SimConfig<F>) -> Result<Self> {
        config.validate()?;
        let scaled = config.scaled(surface.scale());
        let rng = SmallRng::seed_from_u64(config.jitter_seed);
        let mut rosary = Rosary {
            config,
            surface,
            scaled,
            graph: RosaryGraph::new(),
            interaction: Interaction::new(),
            highlighted: None,
            rng,
            destroyed: false,
        };
        rosary.rebuild();
        log::info!(
            "rosary initialised on {:?}x{:?} (scale {:?})",
            surface.width,
            surface.height,
            rosary.scaled.scale
        );
        Ok(rosary)
    }

    /// Discard the graph and build a fresh one at the current scale.
    ///
    /// Pins and any drag are lost; jitter is drawn anew. Revives a destroyed rosary.
    pub fn reset(&mut self) {
        self.destroyed = false;
        self.rebuild();
    }

    /// Drop the graph and all interaction state. Stepping becomes a no-op.
    pub fn destroy(&mut self) {
        self.graph = RosaryGraph::new();
        self.interaction.cancel();
        self.highlighted = None;
        self.destroyed = true;
        log::info!("rosary destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Apply a new surface size. Rebuilds only when the scale factor changes;
    /// otherwise node positions are kept and only the bounds move.
    ///
    /// Returns whether the graph was rebuilt.
    pub fn resize(&mut self, surface: Surface<F>) -> bool {
        let previous = self.scaled.scale;
        self.surface = surface;
        let scaled = self.config.scaled(surface.scale());
        if !scale_changed(previous, scaled.scale) {
            return false;
        }
        self.scaled = scaled;
        if !self.destroyed {
            self.rebuild();
        }
        true
    }

    /// Advance the simulation by `dt` seconds (clamped to `[0, max_frame_dt]`).
    pub fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    pub fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if self.destroyed {
            return;
        }
        let dt = clamp_dt(dt, self.config.max_frame_dt);
        let bounds = Bounds::from_surface(self.surface, self.config.boundary_margin);
        solver::step(
            &mut self.graph,
            dt,
            StepFlags::from(&self.config),
            bounds,
            &self.config,
            observer,
        );
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.config.gravity_enabled = enabled;
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.config.collision_enabled = enabled;
    }

    pub fn gravity_enabled(&self) -> bool {
        self.config.gravity_enabled
    }

    pub fn collision_enabled(&self) -> bool {
        self.config.collision_enabled
    }

    /// Mark the node with `id` as highlighted. An unknown id clears the highlight.
    pub fn highlight(&mut self, id: &str) -> bool {
        if self.graph.find(id).is_some() {
            self.highlighted = Some(String::from(id));
            true
        } else {
            log::debug!("highlight: no node with id {:?}", id);
            self.highlighted = None;
            false
        }
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        match (&self.highlighted, self.graph.nodes.get(index)) {
            (Some(id), Some(node)) => *id == node.id,
            _ => false,
        }
    }

    /// Closest node to `point` within `max_radius`, see [`interaction::nearest_node`].
    pub fn nearest_node(&self, point: Vec2<F>, max_radius: F) -> Option<usize> {
        interaction::nearest_node(&self.graph.nodes, point, max_radius, self.config.pick_reach_margin)
    }

    pub fn begin_drag(&mut self, index: usize, pointer: Vec2<F>) -> Result<()> {
        self.graph.try_node(index)?;
        self.interaction.begin_drag(&mut self.graph, index, pointer);
        Ok(())
    }

    pub fn update_drag(&mut self, pointer: Vec2<F>) {
        self.interaction.update_drag(&mut self.graph, pointer);
    }

    pub fn end_drag(&mut self) {
        self.interaction.end_drag(&mut self.graph);
    }

    pub fn toggle_pin(&mut self, index: usize) -> Result<bool> {
        self.graph.try_node(index)?;
        Ok(self.interaction.toggle_pin(&mut self.graph, index))
    }

    /// Primary press: start dragging the nearest node, if any is in reach.
    pub fn pointer_down(&mut self, pointer: Vec2<F>) -> bool {
        match self.nearest_node(pointer, self.config.pick_radius) {
            Some(index) => {
                self.interaction.begin_drag(&mut self.graph, index, pointer);
                true
            }
            None => false,
        }
    }

    /// Primary move.
    pub fn pointer_move(&mut self, pointer: Vec2<F>) {
        self.update_drag(pointer);
    }

    /// Primary release or cancel.
    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    /// Secondary action: toggle the pin of the nearest node. Returns its new
    /// pinned state, or `None` if nothing was in reach.
    pub fn secondary_action(&mut self, pointer: Vec2<F>) -> Option<bool> {
        let index = self.nearest_node(pointer, self.config.pin_pick_radius)?;
        Some(self.interaction.toggle_pin(&mut self.graph, index))
    }

    /// Snapshot of the active configuration.
    pub fn config(&self) -> ConfigSnapshot<F> {
        ConfigSnapshot {
            config: self.config.clone(),
            scaled: self.scaled,
            surface: self.surface,
        }
    }

    pub fn scale(&self) -> F {
        self.scaled.scale
    }

    pub fn surface(&self) -> Surface<F> {
        self.surface
    }

    pub fn graph(&self) -> &RosaryGraph<F> {
        &self.graph
    }

    pub fn nodes(&self) -> &[Node<F>] {
        &self.graph.nodes
    }

    pub fn links(&self) -> &[Link<F>] {
        &self.graph.links
    }

    pub fn dragged_node(&self) -> Option<usize> {
        self.interaction.dragged_node()
    }

    fn rebuild(&mut self) {
        self.interaction.cancel();
        let layout = LoopLayout::for_surface(self.surface);
        self.graph = topology::build_jittered(layout, &self.scaled, self.config.jitter, &mut self.rng);
        log::debug!(
            "rosary rebuilt: {} nodes, {} links at scale {:?}",
            self.graph.node_count(),
            self.graph.link_count(),
            self.scaled.scale
        );
    }
}
