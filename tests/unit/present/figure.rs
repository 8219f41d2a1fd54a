use super::*;
use crate::graph::build::{DEFAULT_EDGE_THRESHOLD, build_graph};

fn chain_3() -> SquareMatrix {
    SquareMatrix::from_rows(vec![
        vec![1.0, 0.5, 0.0],
        vec![0.5, 1.0, 0.3],
        vec![0.0, 0.3, 1.0],
    ])
    .unwrap()
}

#[test]
fn graph_figure_emits_edges_nodes_and_labels() {
    let m = chain_3();
    let g = build_graph(&m, DEFAULT_EDGE_THRESHOLD).unwrap();
    let layout = crate::graph::layout::circular_layout(&g, 2.0);
    let parts = graph_figure("g", &g, &layout, Point::ORIGIN, &GraphFigureStyle::default())
        .unwrap();

    let edges = parts.iter().filter(|(k, _)| k.contains(".edge.")).count();
    let nodes = parts.iter().filter(|(k, _)| k.contains(".node.")).count();
    let labels = parts.iter().filter(|(k, _)| k.contains(".label.")).count();
    assert_eq!(edges, 2);
    assert_eq!(nodes, 3);
    assert_eq!(labels, 3);

    // Edges come first so nodes draw on top of them.
    assert!(parts[0].0.contains(".edge."));
}

#[test]
fn graph_figure_rejects_empty_graphs() {
    let g = build_graph(&SquareMatrix::zeros(0), DEFAULT_EDGE_THRESHOLD).unwrap();
    let layout = crate::graph::layout::circular_layout(&g, 2.0);
    let err = graph_figure("g", &g, &layout, Point::ORIGIN, &GraphFigureStyle::default())
        .unwrap_err();
    assert!(matches!(err, GgmError::EmptyInput(_)));
}

#[test]
fn graph_figure_rejects_mismatched_layout() {
    let g = build_graph(&chain_3(), DEFAULT_EDGE_THRESHOLD).unwrap();
    let small = build_graph(&SquareMatrix::identity(2), DEFAULT_EDGE_THRESHOLD).unwrap();
    let layout = crate::graph::layout::circular_layout(&small, 2.0);
    assert!(graph_figure("g", &g, &layout, Point::ORIGIN, &GraphFigureStyle::default()).is_err());
}

#[test]
fn graph_labels_are_one_based() {
    let g = build_graph(&chain_3(), DEFAULT_EDGE_THRESHOLD).unwrap();
    let layout = crate::graph::layout::circular_layout(&g, 2.0);
    let parts = graph_figure("g", &g, &layout, Point::ORIGIN, &GraphFigureStyle::default())
        .unwrap();
    let (_, label0) = parts
        .iter()
        .find(|(k, _)| k == "g.label.0")
        .expect("label for node 0");
    match label0 {
        Element::MathTex(m) => assert_eq!(m.tex, "X_{1}"),
        other => panic!("unexpected element {other:?}"),
    }
}

#[test]
fn matrix_figure_emits_label_and_all_cells() {
    let parts = matrix_figure(
        "m",
        &chain_3(),
        Point::ORIGIN,
        &MatrixFigureStyle::default(),
    )
    .unwrap();
    assert_eq!(parts.len(), 1 + 9);
    assert_eq!(parts[0].0, "m.label");
}

#[test]
fn matrix_figure_color_codes_cells() {
    let style = MatrixFigureStyle::default();
    let parts = matrix_figure("m", &chain_3(), Point::ORIGIN, &style).unwrap();

    let cell = |key: &str| {
        parts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, e)| match e {
                Element::MathTex(m) => (m.tex.clone(), m.color),
                other => panic!("unexpected element {other:?}"),
            })
            .expect("cell present")
    };

    assert_eq!(cell("m.cell.0.0"), ("1.0".to_string(), style.palette.diagonal));
    assert_eq!(cell("m.cell.0.1"), ("0.5".to_string(), style.palette.off_diagonal));
    assert_eq!(cell("m.cell.0.2"), ("0".to_string(), style.palette.zero));
}

#[test]
fn matrix_figure_rejects_empty_matrices() {
    let err = matrix_figure(
        "m",
        &SquareMatrix::zeros(0),
        Point::ORIGIN,
        &MatrixFigureStyle::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GgmError::EmptyInput(_)));
}

#[test]
fn schematic_figure_pairs_squares_with_glyphs() {
    let pattern = SchematicPattern::random(4, 0.7, 9);
    let parts = schematic_matrix_figure("s", &pattern, Point::ORIGIN, 0.4, 24.0);
    let squares = parts.iter().filter(|(k, _)| k.contains(".sq.")).count();
    let glyphs = parts.iter().filter(|(k, _)| k.contains(".glyph.")).count();
    assert_eq!(squares, 16);
    assert_eq!(glyphs, 16);
}

#[test]
fn data_matrix_figure_has_caption_and_grid() {
    let parts = data_matrix_figure("x", 20, 6, Point::ORIGIN, 0.25);
    assert_eq!(parts.len(), 1 + 20 * 6);
    match &parts[0].1 {
        Element::Text(t) => assert_eq!(t.content, "X (20×6)"),
        other => panic!("unexpected element {other:?}"),
    }
}
