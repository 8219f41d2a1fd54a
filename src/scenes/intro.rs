//! Opening scene: expression table, the unknown gene network, and the
//! question that drives the video.

use kurbo::{Point, Vec2};

use crate::{
    foundation::core::palette,
    foundation::error::GgmResult,
    graph::build::{DEFAULT_EDGE_THRESHOLD, build_graph},
    graph::layout::circular_layout,
    graph::matrix::SquareMatrix,
    present::figure::{GraphFigureStyle, data_matrix_figure, graph_figure},
    scene::builder::{SceneBuilder, create, fade_in, fade_out, grow_arrow, scale, shift, write},
    scene::model::{ArrowElement, Element, MathTexElement, SceneScript, TextElement},
};

/// The hand-authored gene network shown before any estimation happens.
const CONNECTIONS: [(usize, usize); 17] = [
    (0, 1),
    (0, 3),
    (0, 7),
    (0, 6),
    (1, 2),
    (1, 5),
    (2, 4),
    (2, 8),
    (2, 9),
    (3, 6),
    (3, 4),
    (4, 5),
    (4, 7),
    (5, 9),
    (6, 8),
    (7, 9),
    (8, 9),
];

/// Adjacency as a symmetric indicator matrix, so the displayed network goes
/// through the same builder as every estimated one.
fn intro_network() -> SquareMatrix {
    let mut m = SquareMatrix::zeros(10);
    for &(i, j) in &CONNECTIONS {
        m.set(i, j, 1.0);
        m.set(j, i, 1.0);
    }
    m
}

/// Data table, arrow, unknown network, and the `?` that frames the problem.
pub fn intro_scene() -> GgmResult<SceneScript> {
    let network = intro_network();
    let graph = build_graph(&network, DEFAULT_EDGE_THRESHOLD)?;
    let layout = circular_layout(&graph, 2.0);

    let node_style = GraphFigureStyle {
        node_radius: 0.08,
        node_color: palette::WHITE,
        node_fill_opacity: 1.0,
        edge_color: palette::GREY,
        edge_stroke_width: 1.0,
        labels: false,
        ..GraphFigureStyle::default()
    };
    let graph_parts = graph_figure("net", &graph, &layout, Point::new(4.0, 0.0), &node_style)?;
    let edge_keys: Vec<String> = graph_parts
        .iter()
        .map(|(k, _)| k.clone())
        .filter(|k| k.contains(".edge."))
        .collect();
    let node_keys: Vec<String> = graph_parts
        .iter()
        .map(|(k, _)| k.clone())
        .filter(|k| k.contains(".node."))
        .collect();

    let table_parts = data_matrix_figure("table", 5, 5, Point::new(0.0, 0.0), 0.35);
    let table_keys: Vec<String> = table_parts.iter().map(|(k, _)| k.clone()).collect();

    SceneBuilder::new("intro")
        .elements(table_parts)?
        .element(
            "table.genes",
            Element::Text(TextElement {
                content: "p genes".to_string(),
                at: Point::new(0.0, 2.1),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?
        .element(
            "table.samples",
            Element::Text(TextElement {
                content: "n samples".to_string(),
                at: Point::new(-2.4, 0.0),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?
        .group(
            "table",
            table_keys
                .into_iter()
                .chain(["table.genes".to_string(), "table.samples".to_string()]),
        )?
        .element(
            "arrow",
            Element::Arrow(ArrowElement {
                from: Point::new(-2.5, 0.0),
                to: Point::new(1.0, 0.0),
                color: palette::YELLOW,
                stroke_width: 4.0,
            }),
        )?
        .elements(graph_parts)?
        .group("net.edges", edge_keys.clone())?
        .group("net.nodes", node_keys.clone())?
        .group("net", edge_keys.into_iter().chain(node_keys))?
        .element(
            "law",
            Element::MathTex(MathTexElement {
                tex: r"X \sim \mathcal{N}(\mu, \Sigma)".to_string(),
                at: Point::new(4.0, 0.5),
                color: palette::YELLOW,
                font_size: 36.0,
            }),
        )?
        .element(
            "precision",
            Element::MathTex(MathTexElement {
                tex: r"\Omega = \Sigma^{-1}".to_string(),
                at: Point::new(4.0, -0.5),
                color: palette::RED,
                font_size: 36.0,
            }),
        )?
        .element(
            "law.small",
            Element::MathTex(MathTexElement {
                tex: r"X \sim \mathcal{N}(\mu, \Sigma)".to_string(),
                at: Point::new(-2.0, -3.5),
                color: palette::YELLOW,
                font_size: 25.0,
            }),
        )?
        .element(
            "precision.small",
            Element::MathTex(MathTexElement {
                tex: r"\Omega = \Sigma^{-1}".to_string(),
                at: Point::new(0.5, -3.5),
                color: palette::RED,
                font_size: 25.0,
            }),
        )?
        .element(
            "question",
            Element::Text(TextElement {
                content: "?".to_string(),
                at: Point::new(-0.75, 1.0),
                color: palette::RED,
                font_size: 72.0,
            }),
        )?
        .wait(2.0)
        .play_one(fade_in("table"), 2.0)
        .wait(1.0)
        .play(vec![scale("table", 0.7), shift("table", Vec2::new(-4.0, 0.0))], 2.0)
        .play_one(grow_arrow("arrow"), 1.0)
        .play_one(fade_in("net.nodes"), 2.0)
        .play_one(create("net.edges"), 4.0)
        .wait(1.0)
        .play(vec![fade_out("table"), fade_out("arrow")], 1.0)
        .play_one(shift("net", Vec2::new(-8.0, 0.0)), 2.0)
        .play(vec![write("law"), write("precision")], 2.0)
        .play(
            vec![
                fade_out("law"),
                fade_out("precision"),
                fade_in("law.small"),
                fade_in("precision.small"),
            ],
            1.0,
        )
        .play_one(shift("net", Vec2::new(8.0, 0.0)), 2.0)
        .play(vec![fade_in("table"), fade_in("arrow")], 2.0)
        .play_one(fade_in("question"), 1.0)
        .wait(2.0)
        .build()
}
