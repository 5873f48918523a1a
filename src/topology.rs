//! Construction of the rosary node/link graph.
//!
//! Layout, in node-index order:
//!
//! - `0..54`: the loop, five decades of ten aves, the first four followed by a pater
//! - `54`: the medal, hanging below the first loop bead and joined to both loop ends
//! - `55..60`: the pendant (pater, ave, ave, ave, pater), medal end first
//! - `60`: the cross anchor

use alloc::format;

use rand::Rng;

use crate::config::ScaledConfig;
use crate::float::Float;
use crate::graph::{RosaryGraph, LINK_COUNT, LOOP_LEN, NODE_COUNT, PENDANT_LEN};
use crate::node::{Node, NodeKind};
use crate::scale::Surface;
use crate::vec::Vec2;

/// Number of decades on the loop.
pub const DECADES: usize = 5;
/// Aves per decade.
pub const DECADE_LEN: usize = 10;
/// Loop period: one decade plus its trailing pater.
pub const DECADE_PERIOD: usize = DECADE_LEN + 1;

/// Pendant categories from the medal down to the cross.
pub const PENDANT_KINDS: [NodeKind; PENDANT_LEN] = [
    NodeKind::Pater,
    NodeKind::Ave,
    NodeKind::Ave,
    NodeKind::Ave,
    NodeKind::Pater,
];

pub const MEDAL_ID: &str = "medal";
pub const CROSS_ID: &str = "cross";

// Rest lengths and offsets, in units of bead spacing.
const WIDE_GAP: f32 = 1.5;
const MEDAL_DROP: f32 = 0.8;
const CROSS_DROP: f32 = 0.9;
const CROSS_LINK: f32 = 1.8;

/// Where the loop sits on a surface: centre and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LoopLayout<F: Float> {
    pub center: Vec2<F>,
    pub radius: F,
}

impl<F: Float> LoopLayout<F> {
    /// Centre at (w/2, 0.375h), radius 0.35 of the smaller side.
    pub fn for_surface(surface: Surface<F>) -> Self {
        LoopLayout {
            center: Vec2::new(
                surface.width * F::half(),
                surface.height * F::from_f32(0.375),
            ),
            radius: surface.width.min(surface.height) * F::from_f32(0.35),
        }
    }
}

/// Id of the `j`-th ave of decade `decade`.
pub fn ave_id(decade: usize, j: usize) -> alloc::string::String {
    format!("ave-{}-{}", decade, j)
}

/// Id of the pater closing decade `decade`.
pub fn pater_id(decade: usize) -> alloc::string::String {
    format!("pater-{}", decade)
}

/// Id of a pendant node, counted from the cross end (`intro-0` is next to the cross).
pub fn pendant_id(from_cross: usize) -> alloc::string::String {
    format!("intro-{}", from_cross)
}

/// Build the rosary with exact placement (no jitter).
pub fn build<F: Float>(layout: LoopLayout<F>, scaled: &ScaledConfig<F>) -> RosaryGraph<F> {
    let mut graph = RosaryGraph::with_capacity(NODE_COUNT, LINK_COUNT);
    let spacing = scaled.bead_spacing;
    let wide = spacing * F::from_f32(WIDE_GAP);

    let t0 = F::pi() * F::half();
    let full_turn = F::pi() * F::from_f32(2.0);
    let loop_len = F::from_f32(LOOP_LEN as f32);

    let mut i = 0usize;
    for decade in 0..DECADES {
        for j in 0..DECADE_LEN {
            let pos = loop_position(layout, t0, full_turn, loop_len, i);
            graph.add_node(Node::new(ave_id(decade, j), NodeKind::Ave, pos, scaled.radius_ave));
            i += 1;
        }
        if decade + 1 < DECADES {
            let pos = loop_position(layout, t0, full_turn, loop_len, i);
            graph.add_node(Node::new(pater_id(decade), NodeKind::Pater, pos, scaled.radius_pater));
            i += 1;
        }
    }
    debug_assert_eq!(i, LOOP_LEN);

    for i in 0..LOOP_LEN - 1 {
        let gap = i % DECADE_PERIOD;
        let rest = if gap == DECADE_LEN - 1 || gap == DECADE_LEN { wide } else { spacing };
        graph.add_link(i, i + 1, rest);
    }

    let first = 0;
    let last = LOOP_LEN - 1;
    let medal_pos = graph.node(first).pos + Vec2::new(F::zero(), spacing * F::from_f32(MEDAL_DROP));
    let medal = graph.add_node(Node::new(MEDAL_ID, NodeKind::Medal, medal_pos, scaled.radius_medal));
    graph.add_link(first, medal, wide);
    graph.add_link(last, medal, wide);

    let mut prev = medal;
    for (k, kind) in PENDANT_KINDS.iter().copied().enumerate() {
        let pos = graph.node(prev).pos + Vec2::new(F::zero(), spacing);
        let id = pendant_id(PENDANT_LEN - k - 1);
        let n = graph.add_node(Node::new(id, kind, pos, scaled.radius_for(kind)));
        graph.add_link(prev, n, if k == 0 { wide } else { spacing });
        prev = n;
    }

    let cross_pos = graph.node(prev).pos + Vec2::new(F::zero(), spacing * F::from_f32(CROSS_DROP));
    let cross = graph.add_node(Node::new(
        CROSS_ID,
        NodeKind::CrossAnchor,
        cross_pos,
        scaled.cross_hit_radius,
    ));
    graph.add_link(prev, cross, spacing * F::from_f32(CROSS_LINK));

    graph
}

/// Build the rosary, then offset every node by up to `amplitude` per axis.
pub fn build_jittered<F: Float, R: Rng + ?Sized>(
    layout: LoopLayout<F>,
    scaled: &ScaledConfig<F>,
    amplitude: F,
    rng: &mut R,
) -> RosaryGraph<F> {
    let mut graph = build(layout, scaled);
    apply_jitter(&mut graph, amplitude, rng);
    graph
}

/// Offset every node by a uniform value in `[-amplitude, amplitude)` per axis,
/// leaving it at rest.
pub fn apply_jitter<F: Float, R: Rng + ?Sized>(graph: &mut RosaryGraph<F>, amplitude: F, rng: &mut R) {
    if amplitude <= F::zero() {
        return;
    }
    for n in graph.nodes.iter_mut() {
        let jx = (rng.gen::<f64>() - 0.5) * 2.0;
        let jy = (rng.gen::<f64>() - 0.5) * 2.0;
        let pos = n.pos + Vec2::new(F::from_f64(jx), F::from_f64(jy)).scale(amplitude);
        n.place(pos);
    }
}

fn loop_position<F: Float>(layout: LoopLayout<F>, t0: F, full_turn: F, loop_len: F, i: usize) -> Vec2<F> {
    let t = t0 + F::from_f32(i as f32) / loop_len * full_turn;
    layout.center + Vec2::new(t.cos(), t.sin()).scale(layout.radius)
}
