//! Picking, dragging and pinning nodes from pointer input.
//!
//! All coordinates are simulation-surface coordinates; translating device or
//! touch coordinates is the host's job.

use crate::float::Float;
use crate::graph::RosaryGraph;
use crate::node::Node;
use crate::vec::Vec2;

/// Index of the node closest to `point`.
///
/// A node qualifies when it lies within `radius + reach_margin` of the point;
/// the whole search is additionally cut off at `max_radius`. Returns `None` if
/// nothing qualifies.
pub fn nearest_node<F: Float>(nodes: &[Node<F>], point: Vec2<F>, max_radius: F, reach_margin: F) -> Option<usize> {
    let mut best = None;
    let mut best_d2 = max_radius * max_radius;
    for (i, n) in nodes.iter().enumerate() {
        let d2 = n.pos.distance_sq(point);
        let lim = n.radius + reach_margin;
        let cutoff = best_d2.min(lim * lim);
        if d2 < cutoff {
            best_d2 = d2;
            best = Some(i);
        }
    }
    best
}

/// An in-progress drag: the grabbed node and the grab offset from the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragState<F: Float> {
    pub node: usize,
    pub offset: Vec2<F>,
}

/// Pointer-driven mutations of node state. Never runs during a step.
#[derive(Clone, Debug, Default)]
pub struct Interaction<F: Float> {
    drag: Option<DragState<F>>,
    pointer: Vec2<F>,
}

impl<F: Float> Interaction<F> {
    pub fn new() -> Self {
        Interaction {
            drag: None,
            pointer: Vec2::zero(),
        }
    }

    /// The active drag, if any.
    pub fn drag(&self) -> Option<DragState<F>> {
        self.drag
    }

    pub fn dragged_node(&self) -> Option<usize> {
        self.drag.map(|d| d.node)
    }

    /// Last pointer position seen.
    pub fn pointer(&self) -> Vec2<F> {
        self.pointer
    }

    /// Grab `index` at `pointer`, keeping the grab offset and zeroing the node's velocity.
    pub fn begin_drag(&mut self, graph: &mut RosaryGraph<F>, index: usize, pointer: Vec2<F>) {
        self.pointer = pointer;
        let node = graph.node_mut(index);
        let offset = node.pos - pointer;
        node.place(pointer + offset);
        self.drag = Some(DragState { node: index, offset });
    }

    /// Follow the pointer with the dragged node, if a drag is active.
    pub fn update_drag(&mut self, graph: &mut RosaryGraph<F>, pointer: Vec2<F>) {
        self.pointer = pointer;
        if let Some(drag) = self.drag {
            if let Some(node) = graph.nodes.get_mut(drag.node) {
                node.drag_to(pointer + drag.offset);
            }
        }
    }

    /// Release the dragged node at rest. No-op without an active drag.
    pub fn end_drag(&mut self, graph: &mut RosaryGraph<F>) {
        if let Some(drag) = self.drag.take() {
            if let Some(node) = graph.nodes.get_mut(drag.node) {
                node.settle();
            }
        }
    }

    /// Forget the drag without touching any node (the graph was discarded).
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// Flip the pinned flag of `index` and return the new state.
    pub fn toggle_pin(&mut self, graph: &mut RosaryGraph<F>, index: usize) -> bool {
        let pinned = graph.node_mut(index).toggle_pin();
        log::debug!("node {} {}", graph.node(index).id, if pinned { "pinned" } else { "unpinned" });
        pinned
    }
}
