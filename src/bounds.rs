//! Axis-aligned boundary clamping.

use crate::float::Float;
use crate::node::Node;
use crate::scale::Surface;

/// The rectangle `[0, width] x [0, height]` nodes must stay inside,
/// shrunk by each node's radius plus `margin`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
    pub margin: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F, margin: F) -> Self {
        Bounds { width, height, margin }
    }

    pub fn from_surface(surface: Surface<F>, margin: F) -> Self {
        Bounds::new(surface.width, surface.height, margin)
    }

    /// Clamp a single node. A clamped node loses its implied velocity
    /// (`prev_pos = pos`) so walls absorb motion instead of bouncing.
    ///
    /// Returns whether the node was moved.
    pub fn clamp_node(&self, node: &mut Node<F>) -> bool {
        let r = node.radius + self.margin;
        let mut clamped = false;
        if node.pos.x < r {
            node.pos.x = r;
            clamped = true;
        }
        if node.pos.x > self.width - r {
            node.pos.x = self.width - r;
            clamped = true;
        }
        if node.pos.y < r {
            node.pos.y = r;
            clamped = true;
        }
        if node.pos.y > self.height - r {
            node.pos.y = self.height - r;
            clamped = true;
        }
        if clamped {
            node.settle();
        }
        clamped
    }

    /// Clamp every free node; pinned nodes are left where the user put them.
    pub fn clamp_all(&self, nodes: &mut [Node<F>]) -> usize {
        let mut count = 0;
        for n in nodes.iter_mut() {
            if n.pinned {
                continue;
            }
            if self.clamp_node(n) {
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::vec::Vec2;

    #[test]
    fn clamps_and_zeroes_velocity() {
        let bounds = Bounds::new(100.0f32, 80.0, 2.0);
        let mut n = Node::new("ave-0-0", NodeKind::Ave, Vec2::new(120.0, -5.0), 6.0);
        n.prev_pos = Vec2::new(110.0, 0.0);
        assert!(bounds.clamp_node(&mut n));
        assert_eq!(n.pos, Vec2::new(92.0, 8.0));
        assert_eq!(n.prev_pos, n.pos);
    }

    #[test]
    fn inside_node_untouched() {
        let bounds = Bounds::new(100.0f32, 80.0, 2.0);
        let mut n = Node::new("ave-0-0", NodeKind::Ave, Vec2::new(50.0, 40.0), 6.0);
        n.prev_pos = Vec2::new(49.0, 40.0);
        assert!(!bounds.clamp_node(&mut n));
        assert_eq!(n.prev_pos, Vec2::new(49.0, 40.0));
    }

    #[test]
    fn pinned_nodes_skipped() {
        let bounds = Bounds::new(100.0f32, 80.0, 2.0);
        let mut nodes = [Node::new("medal", NodeKind::Medal, Vec2::new(-10.0, 40.0), 9.5)];
        nodes[0].pin();
        assert_eq!(bounds.clamp_all(&mut nodes), 0);
        assert_eq!(nodes[0].pos.x, -10.0);
    }
}
