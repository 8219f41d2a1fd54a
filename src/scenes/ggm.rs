//! The precision-matrix-to-graph demonstration and the graphical-lasso
//! formula card.

use kurbo::Point;

use crate::{
    foundation::core::palette,
    foundation::error::GgmResult,
    graph::build::{DEFAULT_EDGE_THRESHOLD, build_graph},
    graph::layout::circular_layout,
    graph::matrix::SquareMatrix,
    present::figure::{GraphFigureStyle, MatrixFigureStyle, graph_figure, matrix_figure},
    scene::builder::{SceneBuilder, fade_in, fade_out, write},
    scene::model::{Element, MathTexElement, SceneScript, TextElement},
};

/// The 4×4 precision matrix shown in the video. Non-zero off-diagonal
/// entries are exactly the conditional dependencies drawn as edges.
pub fn demo_precision_matrix() -> GgmResult<SquareMatrix> {
    SquareMatrix::from_rows(vec![
        vec![1.0, 0.5, 0.0, 0.3],
        vec![0.5, 1.0, 0.4, 0.0],
        vec![0.0, 0.4, 1.0, 0.6],
        vec![0.3, 0.0, 0.6, 1.0],
    ])
}

/// Precision matrix beside its conditional-dependence graph.
pub fn gaussian_graph_scene() -> GgmResult<SceneScript> {
    let matrix = demo_precision_matrix()?;
    let graph = build_graph(&matrix, DEFAULT_EDGE_THRESHOLD)?;
    let layout = circular_layout(&graph, 2.0);

    let graph_parts = graph_figure(
        "graph",
        &graph,
        &layout,
        Point::new(-3.0, 0.0),
        &GraphFigureStyle::default(),
    )?;
    let graph_keys: Vec<String> = graph_parts.iter().map(|(k, _)| k.clone()).collect();

    let matrix_parts = matrix_figure(
        "matrix",
        &matrix,
        Point::new(3.0, 0.0),
        &MatrixFigureStyle::default(),
    )?;
    let matrix_keys: Vec<String> = matrix_parts.iter().map(|(k, _)| k.clone()).collect();

    SceneBuilder::new("gaussian-graph")
        .element(
            "title",
            Element::Text(TextElement {
                content: "Gaussian Graphical Model".to_string(),
                at: Point::new(0.0, 3.5),
                color: palette::WHITE,
                font_size: 48.0,
            }),
        )?
        .elements(graph_parts)?
        .group("graph", graph_keys)?
        .elements(matrix_parts)?
        .group("matrix", matrix_keys)?
        .element(
            "explanation",
            Element::Text(TextElement {
                content: "Non-zero entries indicate edges\n(conditional dependencies)".to_string(),
                at: Point::new(0.0, -3.5),
                color: palette::WHITE,
                font_size: 24.0,
            }),
        )?
        .play_one(write("title"), 1.0)
        .wait(0.5)
        .play(vec![fade_in("graph"), fade_in("matrix")], 1.0)
        .wait(1.0)
        .play_one(write("explanation"), 1.0)
        .wait(2.0)
        .play(
            vec![
                fade_out("title"),
                fade_out("graph"),
                fade_out("matrix"),
                fade_out("explanation"),
            ],
            1.0,
        )
        .build()
}

/// The graphical-lasso objective, displayed only, never computed.
pub fn graphical_lasso_scene() -> GgmResult<SceneScript> {
    SceneBuilder::new("graphical-lasso")
        .element(
            "title",
            Element::Text(TextElement {
                content: "Graphical Lasso: Sparsity via Regularization".to_string(),
                at: Point::new(0.0, 3.5),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?
        .element(
            "explanation",
            Element::Text(TextElement {
                content: "The Graphical Lasso estimates a sparse precision matrix\n\
                          by adding an L1 penalty to the likelihood."
                    .to_string(),
                at: Point::new(0.0, 2.4),
                color: palette::WHITE,
                font_size: 24.0,
            }),
        )?
        .element(
            "objective",
            Element::MathTex(MathTexElement {
                tex: r"\hat{\Theta} = \arg\max_{\Theta \succ 0} \left[ \log \det \Theta - \text{tr}(S\Theta) - \lambda \|\Theta\|_1 \right]".to_string(),
                at: Point::new(0.0, 1.0),
                color: palette::WHITE,
                font_size: 32.0,
            }),
        )?
        .play_one(write("title"), 1.0)
        .wait(0.5)
        .play_one(write("explanation"), 1.0)
        .wait(1.0)
        .play_one(write("objective"), 2.0)
        .wait(2.0)
        .play(
            vec![
                fade_out("title"),
                fade_out("explanation"),
                fade_out("objective"),
            ],
            1.0,
        )
        .build()
}
