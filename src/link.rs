//! Distance links between nodes and their relaxation.

use crate::float::Float;
use crate::node::Node;

/// Distances below this are treated as this value when normalising.
pub const DISTANCE_EPSILON: f32 = 1e-6;

/// A fixed-rest-length distance constraint between two nodes, addressed by index.
///
/// Links never own their nodes; several links may share an endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Link<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> Link<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Link { a, b, rest_length }
    }

    /// Current distance between the two endpoints.
    pub fn current_length(&self, nodes: &[Node<F>]) -> F {
        nodes[self.a].pos.distance(nodes[self.b].pos)
    }

    /// Move the endpoints toward the rest length.
    ///
    /// The correction (scaled by `stiffness`) is split evenly between two free
    /// endpoints; a single free endpoint takes all of it and a pinned endpoint
    /// never moves.
    pub fn relax(&self, nodes: &mut [Node<F>], stiffness: F) {
        let a_inv = nodes[self.a].inv_weight();
        let b_inv = nodes[self.b].inv_weight();
        let w_total = a_inv + b_inv;
        if w_total.is_near_zero(F::from_f32(1e-10)) {
            return; // both pinned
        }

        let delta = nodes[self.b].pos - nodes[self.a].pos;
        let dist = delta.length().max(F::from_f32(DISTANCE_EPSILON));
        let error = dist - self.rest_length;
        let correction = delta.scale(error * stiffness / dist);

        if !nodes[self.a].pinned {
            nodes[self.a].pos = nodes[self.a].pos + correction.scale(a_inv / w_total);
        }
        if !nodes[self.b].pinned {
            nodes[self.b].pos = nodes[self.b].pos - correction.scale(b_inv / w_total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::vec::Vec2;

    fn pair(ax: f64, bx: f64) -> [Node<f64>; 2] {
        [
            Node::new("a", NodeKind::Ave, Vec2::new(ax, 0.0), 6.0),
            Node::new("b", NodeKind::Ave, Vec2::new(bx, 0.0), 6.0),
        ]
    }

    #[test]
    fn both_free_split_evenly() {
        let mut nodes = pair(0.0, 10.0);
        Link::new(0, 1, 6.0).relax(&mut nodes, 1.0);
        assert!((nodes[0].pos.x - 2.0).abs() < 1e-12);
        assert!((nodes[1].pos.x - 8.0).abs() < 1e-12);
    }

    #[test]
    fn one_pinned_free_takes_full_correction() {
        let mut nodes = pair(0.0, 10.0);
        nodes[0].pin();
        Link::new(0, 1, 6.0).relax(&mut nodes, 1.0);
        assert_eq!(nodes[0].pos.x, 0.0);
        assert!((nodes[1].pos.x - 6.0).abs() < 1e-12);
    }

    #[test]
    fn both_pinned_no_motion() {
        let mut nodes = pair(0.0, 10.0);
        nodes[0].pin();
        nodes[1].pin();
        Link::new(0, 1, 6.0).relax(&mut nodes, 1.0);
        assert_eq!(nodes[0].pos.x, 0.0);
        assert_eq!(nodes[1].pos.x, 10.0);
    }

    #[test]
    fn coincident_endpoints_stay_finite() {
        let mut nodes = pair(3.0, 3.0);
        Link::new(0, 1, 6.0).relax(&mut nodes, 1.0);
        assert!(nodes[0].pos.x.is_finite() && nodes[1].pos.x.is_finite());
    }

    #[test]
    fn half_stiffness_closes_half_the_gap() {
        let mut nodes = pair(0.0, 10.0);
        let link = Link::new(0, 1, 6.0);
        link.relax(&mut nodes, 0.5);
        assert!((link.current_length(&nodes) - 8.0).abs() < 1e-12);
    }
}
