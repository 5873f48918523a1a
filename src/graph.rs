//! The node/link arena owned by one rosary instance.

use alloc::vec::Vec as AllocVec;

use crate::error::{Result, RosaryError};
use crate::float::Float;
use crate::link::Link;
use crate::node::{Node, NodeKind};
use crate::vec::Vec2;

/// Number of beads in the closed loop.
pub const LOOP_LEN: usize = 54;
/// Number of beads hanging between the medal and the cross.
pub const PENDANT_LEN: usize = 5;
/// Total node count of a built rosary.
pub const NODE_COUNT: usize = LOOP_LEN + 1 + PENDANT_LEN + 1;
/// Total link count of a built rosary.
pub const LINK_COUNT: usize = (LOOP_LEN - 1) + 2 + PENDANT_LEN + 1;

/// Index of the medal node in a built rosary.
pub const MEDAL_INDEX: usize = LOOP_LEN;
/// Index of the cross anchor node in a built rosary.
pub const CROSS_INDEX: usize = NODE_COUNT - 1;

/// Nodes and the links between them. Links hold indices into `nodes`.
#[derive(Clone, Debug, Default)]
pub struct RosaryGraph<F: Float> {
    pub nodes: AllocVec<Node<F>>,
    pub links: AllocVec<Link<F>>,
}

impl<F: Float> RosaryGraph<F> {
    pub fn new() -> Self {
        RosaryGraph {
            nodes: AllocVec::new(),
            links: AllocVec::new(),
        }
    }

    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        RosaryGraph {
            nodes: AllocVec::with_capacity(nodes),
            links: AllocVec::with_capacity(links),
        }
    }

    pub fn add_node(&mut self, node: Node<F>) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        idx
    }

    pub fn add_link(&mut self, a: usize, b: usize, rest_length: F) {
        self.links.push(Link::new(a, b, rest_length));
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    pub fn node(&self, index: usize) -> &Node<F> { &self.nodes[index] }
    pub fn node_mut(&mut self, index: usize) -> &mut Node<F> { &mut self.nodes[index] }

    /// Checked node access.
    pub fn try_node(&self, index: usize) -> Result<&Node<F>> {
        self.nodes.get(index).ok_or(RosaryError::NodeOutOfBounds {
            index,
            count: self.nodes.len(),
        })
    }

    /// Index of the node with the given id.
    pub fn find(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }

    /// The closed loop of beads (empty if the graph is not a full rosary).
    pub fn loop_nodes(&self) -> &[Node<F>] {
        self.nodes.get(..LOOP_LEN).unwrap_or(&[])
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.nodes.iter().map(|n| n.pos).collect()
    }

    /// Endpoint positions of every link, in link order.
    pub fn link_endpoints(&self) -> AllocVec<(Vec2<F>, Vec2<F>)> {
        self.links
            .iter()
            .map(|l| (self.nodes[l.a].pos, self.nodes[l.b].pos))
            .collect()
    }
}
