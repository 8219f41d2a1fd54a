//! Estimation methods: exhaustive search over graphs, then maximum
//! likelihood, and why both break down.

use kurbo::{Point, Vec2};

use crate::{
    foundation::core::palette,
    foundation::error::GgmResult,
    scene::builder::{
        SceneBuilder, create, fade_in, fade_out, grow_arrow, recolor, shift, write,
    },
    scene::model::{
        ArrowElement, DotElement, Element, LineElement, MathTexElement, RectElement, SceneScript,
        TextElement,
    },
};

const TRIANGLE: [Point; 3] = [
    Point::new(-5.0, 1.5),
    Point::new(-4.0, -0.5),
    Point::new(-6.0, -0.5),
];

/// The 3 possible undirected edges of the triangle, as vertex index pairs.
const POSSIBLE_EDGES: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 2)];

/// Exhaustive search, then MLE, each with its "problem" call-out.
pub fn estimation_scene() -> GgmResult<SceneScript> {
    let mut b = SceneBuilder::new("estimation")
        .element(
            "title",
            Element::Text(TextElement {
                content: "Estimation methods".to_string(),
                at: Point::new(0.0, 3.5),
                color: palette::YELLOW,
                font_size: 42.0,
            }),
        )?
        .element(
            "title.exhaustive",
            Element::Text(TextElement {
                content: "Exhaustive search".to_string(),
                at: Point::new(0.0, 3.5),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?;

    for (idx, at) in TRIANGLE.iter().enumerate() {
        b = b.element(
            format!("tri.node.{idx}"),
            Element::Dot(DotElement {
                at: *at,
                color: palette::WHITE,
                radius: 0.08,
            }),
        )?;
    }
    for &(u, v) in &POSSIBLE_EDGES {
        b = b.element(
            format!("tri.edge.{u}-{v}"),
            Element::Line(LineElement {
                from: TRIANGLE[u],
                to: TRIANGLE[v],
                color: palette::GREY,
                stroke_width: 2.0,
            }),
        )?;
    }

    b = b
        .group(
            "tri.nodes",
            (0..TRIANGLE.len()).map(|idx| format!("tri.node.{idx}")),
        )?
        .element(
            "arrow",
            Element::Arrow(ArrowElement {
                from: Point::new(-3.5, 0.5),
                to: Point::new(-0.5, 0.5),
                color: palette::YELLOW,
                stroke_width: 4.0,
            }),
        )?
        .element(
            "arrow.caption",
            Element::MathTex(MathTexElement {
                tex: r"\Sigma^{-1} \text{ as a function of the graph}".to_string(),
                at: Point::new(-2.0, 1.0),
                color: palette::YELLOW,
                font_size: 25.0,
            }),
        )?
        .element(
            "table.title",
            Element::Text(TextElement {
                content: "Model scoring and selection".to_string(),
                at: Point::new(2.5, 1.8),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?
        .element(
            "table.header",
            Element::MathTex(MathTexElement {
                tex: r"G_1 \quad G_2 \quad \cdots \quad G_k".to_string(),
                at: Point::new(2.5, 1.0),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?
        .element(
            "table.values",
            Element::MathTex(MathTexElement {
                tex: r"v_1 \quad v_2 \quad \cdots \quad v_k".to_string(),
                at: Point::new(2.5, 0.4),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?
        .element(
            "arrow.down",
            Element::Arrow(ArrowElement {
                from: Point::new(2.5, 0.0),
                to: Point::new(2.5, -2.0),
                color: palette::GREEN,
                stroke_width: 4.0,
            }),
        )?
        .element(
            "selected",
            Element::Text(TextElement {
                content: "selected model G_i".to_string(),
                at: Point::new(2.5, -2.5),
                color: palette::GREEN,
                font_size: 32.0,
            }),
        )?
        .element(
            "problem.box",
            Element::Rect(RectElement {
                at: Point::new(-2.0, -2.5),
                color: palette::RED,
                width: 5.0,
                height: 2.2,
            }),
        )?
        .element(
            "problem.title",
            Element::Text(TextElement {
                content: "Problem".to_string(),
                at: Point::new(-3.8, -1.9),
                color: palette::RED,
                font_size: 32.0,
            }),
        )?
        .element(
            "problem.text",
            Element::Text(TextElement {
                content: "Exhaustive search complexity:".to_string(),
                at: Point::new(-2.4, -2.5),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?
        .element(
            "problem.complexity",
            Element::MathTex(MathTexElement {
                tex: r"2^{\tfrac{p(p-1)}{2}}".to_string(),
                at: Point::new(-2.4, -3.1),
                color: palette::YELLOW,
                font_size: 32.0,
            }),
        )?;

    b = b
        .play_one(fade_in("title"), 1.5)
        .play(vec![fade_out("title"), fade_in("title.exhaustive")], 1.5)
        .play_one(fade_in("tri.nodes"), 1.5)
        .play(vec![grow_arrow("arrow"), write("arrow.caption")], 1.5)
        .play(vec![fade_in("table.header"), fade_in("table.values"), fade_in("table.title")], 1.5);

    // Flash every nonempty edge subset in increasing size; the full triangle
    // is last and stays on screen.
    let full_mask = (1u32 << POSSIBLE_EDGES.len()) - 1;
    let mut masks: Vec<u32> = (1..=full_mask).collect();
    masks.sort_by_key(|m| m.count_ones());
    for mask in masks {
        let members: Vec<String> = POSSIBLE_EDGES
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, (u, v))| format!("tri.edge.{u}-{v}"))
            .collect();
        b = b.play(members.iter().map(|k| create(k.clone())).collect(), 0.2);
        if mask == full_mask {
            b = b.play(
                members
                    .iter()
                    .map(|k| recolor(k.clone(), palette::YELLOW))
                    .collect(),
                0.5,
            );
        } else {
            b = b.play(members.iter().map(|k| fade_out(k.clone())).collect(), 0.1);
        }
    }

    b = b
        .play_one(grow_arrow("arrow.down"), 1.0)
        .play_one(write("selected"), 2.0)
        .play(
            vec![
                fade_in("problem.box"),
                fade_in("problem.title"),
                fade_in("problem.text"),
                fade_in("problem.complexity"),
            ],
            2.0,
        )
        .wait(1.0);

    // Clear the board for the MLE half.
    let mut clear: Vec<_> = [
        "tri.nodes",
        "arrow",
        "arrow.caption",
        "table.title",
        "table.header",
        "table.values",
        "arrow.down",
        "selected",
        "problem.box",
        "problem.title",
        "problem.text",
        "problem.complexity",
        "title.exhaustive",
    ]
    .into_iter()
    .map(fade_out)
    .collect();
    for (u, v) in POSSIBLE_EDGES {
        clear.push(fade_out(format!("tri.edge.{u}-{v}")));
    }
    b = b.play(clear, 2.0);

    b = b
        .element(
            "mle.title",
            Element::Text(TextElement {
                content: "Maximum likelihood (MLE)".to_string(),
                at: Point::new(0.0, 3.5),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?
        .element(
            "mle.likelihood",
            Element::MathTex(MathTexElement {
                tex: r"L(\mu, \Sigma) = \prod_{i=1}^n \frac{1}{(2\pi)^{d/2} |\Sigma|^{1/2}} \exp\left(-\tfrac{1}{2}(x_i - \mu)^T \Sigma^{-1}(x_i - \mu)\right)".to_string(),
                at: Point::new(0.0, 2.2),
                color: palette::WHITE,
                font_size: 25.0,
            }),
        )?
        .element(
            "mle.mu",
            Element::MathTex(MathTexElement {
                tex: r"\hat{\mu} = \frac{1}{n} \sum_{i=1}^n x_i".to_string(),
                at: Point::new(0.0, 0.6),
                color: palette::GREEN,
                font_size: 32.0,
            }),
        )?
        .element(
            "mle.sigma",
            Element::MathTex(MathTexElement {
                tex: r"\hat{\Sigma} = \frac{1}{n} \sum_{i=1}^n (x_i - \hat{\mu})(x_i - \hat{\mu})^T = \frac{1}{n} X^T X".to_string(),
                at: Point::new(0.0, -0.4),
                color: palette::BLUE,
                font_size: 32.0,
            }),
        )?
        .group("mle.estimators", ["mle.mu".to_string(), "mle.sigma".to_string()])?
        .element(
            "mle.problem.box",
            Element::Rect(RectElement {
                at: Point::new(4.0, -1.5),
                color: palette::RED,
                width: 5.6,
                height: 2.6,
            }),
        )?
        .element(
            "mle.problem.title",
            Element::Text(TextElement {
                content: "Problem".to_string(),
                at: Point::new(2.0, -0.7),
                color: palette::RED,
                font_size: 32.0,
            }),
        )?
        .element(
            "mle.problem.size",
            Element::MathTex(MathTexElement {
                tex: r"\text{size of } \hat{\Sigma} = p \times p".to_string(),
                at: Point::new(4.0, -1.2),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?
        .element(
            "mle.problem.rank",
            Element::MathTex(MathTexElement {
                tex: r"\text{rank of } \hat{\Sigma} = n".to_string(),
                at: Point::new(4.0, -1.7),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?
        .element(
            "mle.problem.invert",
            Element::MathTex(MathTexElement {
                tex: r"n \ll p \;\rightarrow\; \hat{\Sigma} \text{ not invertible}".to_string(),
                at: Point::new(4.0, -2.2),
                color: palette::YELLOW,
                font_size: 28.0,
            }),
        )?
        .play_one(fade_in("mle.title"), 2.0)
        .play_one(write("mle.likelihood"), 3.0)
        .play_one(write("mle.mu"), 1.5)
        .play_one(write("mle.sigma"), 1.5)
        .wait(1.0)
        .play_one(shift("mle.estimators", Vec2::new(-3.5, -0.5)), 2.0)
        .wait(1.0)
        .play(
            vec![
                fade_in("mle.problem.box"),
                fade_in("mle.problem.title"),
                fade_in("mle.problem.size"),
                fade_in("mle.problem.rank"),
                fade_in("mle.problem.invert"),
            ],
            2.0,
        )
        .wait(3.0);

    b.build()
}
