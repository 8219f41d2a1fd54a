use super::*;
use crate::graph::layout::circular_layout;

fn chain_3() -> SquareMatrix {
    SquareMatrix::from_rows(vec![
        vec![1.0, 0.5, 0.0],
        vec![0.5, 1.0, 0.3],
        vec![0.0, 0.3, 1.0],
    ])
    .unwrap()
}

#[test]
fn chain_matrix_yields_chain_graph() {
    let g = build_graph(&chain_3(), DEFAULT_EDGE_THRESHOLD).unwrap();
    assert_eq!(g.node_count(), 3);
    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(1, 2));
    assert!(!g.has_edge(0, 2));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn entry_below_threshold_is_dropped() {
    let m = SquareMatrix::from_rows(vec![
        vec![1.0, 0.5, 1e-8],
        vec![0.5, 1.0, 0.3],
        vec![1e-8, 0.3, 1.0],
    ])
    .unwrap();
    let g = build_graph(&m, 1e-6).unwrap();
    assert!(!g.has_edge(0, 2));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn identity_yields_no_edges() {
    let g = build_graph(&SquareMatrix::identity(4), DEFAULT_EDGE_THRESHOLD).unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn dense_matrix_yields_complete_graph() {
    let m = SquareMatrix::from_rows(vec![
        vec![1.0, 0.5, 0.3],
        vec![0.5, 1.0, 0.4],
        vec![0.3, 0.4, 1.0],
    ])
    .unwrap();
    let g = build_graph(&m, DEFAULT_EDGE_THRESHOLD).unwrap();
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn single_node_has_no_edges_and_layout_is_finite() {
    let m = SquareMatrix::from_rows(vec![vec![1.0]]).unwrap();
    let g = build_graph(&m, DEFAULT_EDGE_THRESHOLD).unwrap();
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.edge_count(), 0);
    let layout = circular_layout(&g, 2.0);
    assert_eq!(layout.len(), 1);
    let p = layout.position(0).unwrap();
    assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn empty_matrix_yields_empty_graph() {
    let g = build_graph(&SquareMatrix::zeros(0), DEFAULT_EDGE_THRESHOLD).unwrap();
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn edge_presence_matches_magnitude_exhaustively() {
    // Mixed signs and magnitudes straddling the threshold.
    let m = SquareMatrix::from_rows(vec![
        vec![1.0, -0.2, 0.0, 0.05],
        vec![-0.2, 1.0, 0.09, 0.0],
        vec![0.0, 0.09, 1.0, -0.4],
        vec![0.05, 0.0, -0.4, 1.0],
    ])
    .unwrap();
    let threshold = 0.1;
    let g = build_graph(&m, threshold).unwrap();
    for i in 0..4 {
        for j in 0..4 {
            if i == j {
                assert!(!g.has_edge(i, j));
            } else {
                assert_eq!(g.has_edge(i, j), m.get(i, j).abs() > threshold);
            }
        }
    }
}

#[test]
fn threshold_is_strict() {
    let mut m = SquareMatrix::identity(2);
    m.set(0, 1, 0.3);
    m.set(1, 0, 0.3);
    let g = build_graph(&m, 0.3).unwrap();
    assert!(!g.has_edge(0, 1));
}

#[test]
fn thresholds_below_min_magnitude_are_equivalent() {
    let m = chain_3();
    // Smallest nonzero off-diagonal magnitude is 0.3.
    let reference = build_graph(&m, 1e-6).unwrap();
    for threshold in [0.0, 1e-12, 1e-3, 0.29] {
        assert_eq!(build_graph(&m, threshold).unwrap(), reference);
    }
}

#[test]
fn diagonal_never_influences_edges() {
    let mut a = chain_3();
    let mut b = chain_3();
    for i in 0..3 {
        a.set(i, i, 0.0);
        b.set(i, i, 1e9);
    }
    let ga = build_graph(&a, DEFAULT_EDGE_THRESHOLD).unwrap();
    let gb = build_graph(&b, DEFAULT_EDGE_THRESHOLD).unwrap();
    assert_eq!(ga, gb);
}

#[test]
fn weights_come_from_the_upper_triangle() {
    let g = build_graph(&chain_3(), DEFAULT_EDGE_THRESHOLD).unwrap();
    let weights: Vec<f64> = g.edges().iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![0.5, 0.3]);
}

#[test]
fn rejects_bad_thresholds() {
    let m = chain_3();
    assert!(build_graph(&m, -0.1).is_err());
    assert!(build_graph(&m, f64::NAN).is_err());
    assert!(build_graph(&m, f64::INFINITY).is_err());
}

#[test]
fn neighbors_are_sorted() {
    let m = SquareMatrix::from_rows(vec![
        vec![1.0, 0.5, 0.3],
        vec![0.5, 1.0, 0.0],
        vec![0.3, 0.0, 1.0],
    ])
    .unwrap();
    let g = build_graph(&m, DEFAULT_EDGE_THRESHOLD).unwrap();
    assert_eq!(g.neighbors(0), vec![1, 2]);
    assert_eq!(g.neighbors(1), vec![0]);
    assert_eq!(g.neighbors(2), vec![0]);
}

#[test]
fn combine_rules_agree_on_symmetric_input() {
    let m = chain_3();
    let plain = build_graph(&m, DEFAULT_EDGE_THRESHOLD).unwrap();
    let and = build_graph_combined(&m, DEFAULT_EDGE_THRESHOLD, CombineRule::And).unwrap();
    let or = build_graph_combined(&m, DEFAULT_EDGE_THRESHOLD, CombineRule::Or).unwrap();
    assert_eq!(and, plain);
    assert_eq!(or, plain);
}

#[test]
fn combine_rules_diverge_on_asymmetric_input() {
    // Only one direction of the (0,1) estimate is non-zero.
    let mut m = SquareMatrix::identity(2);
    m.set(0, 1, 0.4);
    m.set(1, 0, 0.0);
    let and = build_graph_combined(&m, DEFAULT_EDGE_THRESHOLD, CombineRule::And).unwrap();
    let or = build_graph_combined(&m, DEFAULT_EDGE_THRESHOLD, CombineRule::Or).unwrap();
    assert!(!and.has_edge(0, 1));
    assert!(or.has_edge(0, 1));
}

#[test]
fn combined_weight_takes_the_larger_magnitude() {
    let mut m = SquareMatrix::identity(2);
    m.set(0, 1, 0.2);
    m.set(1, 0, -0.6);
    let g = build_graph_combined(&m, DEFAULT_EDGE_THRESHOLD, CombineRule::Or).unwrap();
    assert_eq!(g.edges()[0].weight, -0.6);
}
