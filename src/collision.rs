//! Soft pairwise repulsion between overlapping nodes.

use crate::float::Float;
use crate::link::DISTANCE_EPSILON;
use crate::node::Node;

/// Overlaps are measured against this fraction of the summed radii.
pub const CONTACT_FACTOR: f32 = 0.98;

/// Push overlapping node pairs apart. O(n^2) over the node list.
///
/// For each unordered pair closer than `0.98 * (ra + rb)` the push is
/// `repulsion * overlap` along the pair normal, split evenly between two free
/// nodes or given entirely to the free one when the other is pinned.
/// Coincident pairs are skipped since they have no normal.
///
/// Returns the number of pairs pushed apart.
pub fn repel<F: Float>(nodes: &mut [Node<F>], repulsion: F) -> usize {
    let contact = F::from_f32(CONTACT_FACTOR);
    let mut resolved = 0;

    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let a_inv = nodes[i].inv_weight();
            let b_inv = nodes[j].inv_weight();
            let w_total = a_inv + b_inv;
            if w_total.is_near_zero(F::from_f32(1e-10)) {
                continue;
            }

            let delta = nodes[j].pos - nodes[i].pos;
            let d2 = delta.length_sq();
            if d2 == F::zero() {
                continue;
            }
            let min = (nodes[i].radius + nodes[j].radius) * contact;
            if d2 >= min * min {
                continue;
            }

            let d = d2.sqrt().max(F::from_f32(DISTANCE_EPSILON));
            let normal = delta.scale(F::one() / d);
            let push = normal.scale(repulsion * (min - d));

            nodes[i].pos = nodes[i].pos - push.scale(a_inv / w_total);
            nodes[j].pos = nodes[j].pos + push.scale(b_inv / w_total);
            resolved += 1;
        }
    }
    resolved
}
