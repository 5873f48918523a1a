use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rosary::graph::{CROSS_INDEX, LINK_COUNT, LOOP_LEN, MEDAL_INDEX, NODE_COUNT};
use rosary::topology::{self, LoopLayout};
use rosary::{NodeKind, RosaryGraph, SimConfig, Surface};

fn build_at(width: f64, height: f64) -> RosaryGraph<f64> {
    let surface = Surface::new(width, height);
    let scaled = SimConfig::new().scaled(surface.scale());
    topology::build(LoopLayout::for_surface(surface), &scaled)
}

#[test]
fn structure_counts() {
    let graph = build_at(600.0, 640.0);
    assert_eq!(graph.node_count(), 61);
    assert_eq!(graph.link_count(), 61);
    assert_eq!(graph.loop_nodes().len(), 54);
    assert_eq!(graph.count_kind(NodeKind::Medal), 1);
    assert_eq!(graph.count_kind(NodeKind::CrossAnchor), 1);
    // 50 loop aves + 3 pendant aves, 4 loop paters + 2 pendant paters
    assert_eq!(graph.count_kind(NodeKind::Ave), 53);
    assert_eq!(graph.count_kind(NodeKind::Pater), 6);
}

#[test]
fn ids_are_unique() {
    let graph = build_at(600.0, 640.0);
    let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), NODE_COUNT);
    assert_eq!(graph.node(MEDAL_INDEX).id, "medal");
    assert_eq!(graph.node(CROSS_INDEX).id, "cross");
}

#[test]
fn ids_stable_across_jittered_builds() {
    let surface = Surface::<f64>::reference();
    let scaled = SimConfig::new().scaled(1.0);
    let layout = LoopLayout::for_surface(surface);
    let mut rng = SmallRng::seed_from_u64(1);
    let a = topology::build_jittered(layout, &scaled, 1.0, &mut rng);
    let b = topology::build_jittered(layout, &scaled, 1.0, &mut rng);
    let ids_a: Vec<&str> = a.nodes.iter().map(|n| n.id.as_str()).collect();
    let ids_b: Vec<&str> = b.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);
    assert_ne!(a.positions(), b.positions(), "jitter should differ between draws");
}

#[test]
fn jitter_is_bounded_and_at_rest() {
    let surface = Surface::<f64>::reference();
    let scaled = SimConfig::new().scaled(1.0);
    let layout = LoopLayout::for_surface(surface);
    let exact = topology::build(layout, &scaled);
    let mut rng = SmallRng::seed_from_u64(99);
    let jittered = topology::build_jittered(layout, &scaled, 1.0, &mut rng);
    for (e, j) in exact.nodes.iter().zip(jittered.nodes.iter()) {
        assert!((e.pos.x - j.pos.x).abs() <= 1.0);
        assert!((e.pos.y - j.pos.y).abs() <= 1.0);
        assert_eq!(j.pos, j.prev_pos);
        assert!(!j.pinned);
    }
}

#[test]
fn medal_closes_the_loop() {
    let graph = build_at(600.0, 640.0);
    let medal_links: Vec<_> = graph
        .links
        .iter()
        .filter(|l| l.a == MEDAL_INDEX || l.b == MEDAL_INDEX)
        .collect();
    assert_eq!(medal_links.len(), 3);
    assert!(medal_links.iter().any(|l| l.a == 0 && l.rest_length == 27.0));
    assert!(medal_links.iter().any(|l| l.a == LOOP_LEN - 1 && l.rest_length == 27.0));

    let medal = graph.node(MEDAL_INDEX).pos;
    let first = graph.node(0).pos;
    assert!((medal.x - first.x).abs() < 1e-9);
    assert!((medal.y - first.y - 18.0 * 0.8).abs() < 1e-4);
}

#[test]
fn pendant_and_cross_links() {
    let graph = build_at(600.0, 640.0);
    let tail = &graph.links[LINK_COUNT - 6..];
    let rests: Vec<f64> = tail.iter().map(|l| l.rest_length).collect();
    assert_eq!(rests[0], 27.0);
    assert_eq!(&rests[1..5], &[18.0, 18.0, 18.0, 18.0]);
    assert!((rests[5] - 18.0 * 1.8).abs() < 1e-4);

    let kinds: Vec<NodeKind> = graph.nodes[55..60].iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        [NodeKind::Pater, NodeKind::Ave, NodeKind::Ave, NodeKind::Ave, NodeKind::Pater]
    );
}

#[test]
fn cross_radius_uses_hit_size() {
    let graph = build_at(300.0, 320.0);
    assert!((graph.node(CROSS_INDEX).radius - 2.25).abs() < 1e-6);
    assert!((graph.node(0).radius - 3.0).abs() < 1e-6);
    assert!((graph.node(MEDAL_INDEX).radius - 4.75).abs() < 1e-6);
}

proptest! {
    #[test]
    fn counts_hold_at_any_scale(width in 1.0f64..4000.0, height in 1.0f64..4000.0) {
        let graph = build_at(width, height);
        prop_assert_eq!(graph.node_count(), NODE_COUNT);
        prop_assert_eq!(graph.link_count(), LINK_COUNT);
        for link in &graph.links {
            prop_assert!(link.rest_length > 0.0);
            prop_assert!(link.a < NODE_COUNT && link.b < NODE_COUNT);
        }
    }
}
