use proptest::prelude::*;
use rosary::{Link, Node, NodeKind, Vec2};

fn pair(a: (f64, f64), b: (f64, f64)) -> Vec<Node<f64>> {
    vec![
        Node::new("ave-0-0", NodeKind::Ave, Vec2::new(a.0, a.1), 6.0),
        Node::new("ave-0-1", NodeKind::Ave, Vec2::new(b.0, b.1), 6.0),
    ]
}

proptest! {
    #[test]
    fn full_stiffness_restores_rest_length(
        ax in -500.0f64..500.0, ay in -500.0f64..500.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0,
        rest in 0.5f64..100.0,
    ) {
        let mut nodes = pair((ax, ay), (bx, by));
        prop_assume!(nodes[0].pos.distance(nodes[1].pos) > 1e-3);
        let link = Link::new(0, 1, rest);
        link.relax(&mut nodes, 1.0);
        prop_assert!((link.current_length(&nodes) - rest).abs() < 1e-6);
    }

    #[test]
    fn free_endpoints_move_equal_amounts(
        ax in -500.0f64..500.0, ay in -500.0f64..500.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0,
        rest in 0.5f64..100.0,
    ) {
        let mut nodes = pair((ax, ay), (bx, by));
        prop_assume!(nodes[0].pos.distance(nodes[1].pos) > 1e-3);
        let (a0, b0) = (nodes[0].pos, nodes[1].pos);
        Link::new(0, 1, rest).relax(&mut nodes, 1.0);
        let da = nodes[0].pos.distance(a0);
        let db = nodes[1].pos.distance(b0);
        prop_assert!((da - db).abs() < 1e-6);
    }

    #[test]
    fn pinned_endpoint_never_moves(
        ax in -500.0f64..500.0, ay in -500.0f64..500.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0,
        rest in 0.5f64..100.0,
        stiffness in 0.0f64..=1.0,
    ) {
        let mut nodes = pair((ax, ay), (bx, by));
        prop_assume!(nodes[0].pos.distance(nodes[1].pos) > 1e-3);
        nodes[1].pin();
        let link = Link::new(0, 1, rest);
        let before = link.current_length(&nodes);
        link.relax(&mut nodes, stiffness);
        prop_assert_eq!(nodes[1].pos, Vec2::new(bx, by));
        let expected = before + (rest - before) * stiffness;
        prop_assert!((link.current_length(&nodes) - expected).abs() < 1e-6);
    }
}
