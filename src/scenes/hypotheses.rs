//! The assumptions behind neighborhood selection, shown as a sequence of
//! write/unwrite cards.

use kurbo::{Point, Vec2};

use crate::{
    foundation::core::palette,
    foundation::error::GgmResult,
    scene::builder::{SceneBuilder, shift, unwrite, write},
    scene::model::{Element, MathTexElement, SceneScript, TextElement},
};

/// One card: a formula line, with an optional plain-text line under it.
struct Card {
    key: &'static str,
    tex: &'static str,
    note: Option<&'static str>,
}

const ASSUMPTION_CARDS: [Card; 3] = [
    Card {
        key: "stability",
        tex: r"\text{Neighborhood stability: } MSE + \eta \Vert\theta\Vert_1 = MSE",
        note: Some("Partial correlations bounded away from zero"),
    },
    Card {
        key: "covariance",
        tex: r"\text{Existence of } \Sigma \text{: Var}(X_a \mid X_{\Gamma(n)\setminus a}) \geq v^2",
        note: Some("(population covariance invertible, not the empirical one)"),
    },
    Card {
        key: "lasso",
        tex: r"\text{Lasso: Var}(X_a) = 1 \text{ and } \Vert\theta^{a, ne_b \setminus a}\Vert_1 \leq \vartheta",
        note: Some("Equivalently: bounded neighborhood overlap (sparsity)"),
    },
];

fn card_elements(b: SceneBuilder, card: &Card) -> GgmResult<SceneBuilder> {
    let mut b = b.element(
        format!("{}.formula", card.key),
        Element::MathTex(MathTexElement {
            tex: card.tex.to_string(),
            at: Point::new(0.0, 0.3),
            color: palette::WHITE,
            font_size: 36.0,
        }),
    )?;
    let mut members = vec![format!("{}.formula", card.key)];
    if let Some(note) = card.note {
        b = b.element(
            format!("{}.note", card.key),
            Element::Text(TextElement {
                content: note.to_string(),
                at: Point::new(0.0, -0.5),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?;
        members.push(format!("{}.note", card.key));
    }
    b.group(card.key, members)
}

/// Assumption cards, then the sparsity and high-dimensional growth rates.
pub fn hypotheses_scene() -> GgmResult<SceneScript> {
    let mut b = SceneBuilder::new("hypotheses")
        .element(
            "title",
            Element::Text(TextElement {
                content: "Hypotheses".to_string(),
                at: Point::new(0.0, 0.0),
                color: palette::BLUE,
                font_size: 96.0,
            }),
        )?
        .element(
            "title.sparsity",
            Element::Text(TextElement {
                content: "Sparsity".to_string(),
                at: Point::new(0.0, 3.3),
                color: palette::BLUE,
                font_size: 96.0,
            }),
        )?
        .element(
            "title.highdim",
            Element::Text(TextElement {
                content: "High dimensions".to_string(),
                at: Point::new(0.0, 3.3),
                color: palette::BLUE,
                font_size: 96.0,
            }),
        )?
        .element(
            "sparsity.rate",
            Element::MathTex(MathTexElement {
                tex: r"\max \left|ne_a\right| = O(n^{\kappa}),\; 0 \leq \kappa < 1".to_string(),
                at: Point::new(0.0, 0.0),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?
        .element(
            "highdim.rate",
            Element::MathTex(MathTexElement {
                tex: r"p = O(n^\gamma),\; \gamma > 0".to_string(),
                at: Point::new(0.0, 0.0),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?;

    for card in &ASSUMPTION_CARDS {
        b = card_elements(b, card)?;
    }

    b = b
        .play_one(write("title"), 1.0)
        .wait(3.0)
        .play_one(shift("title", Vec2::new(0.0, 3.3)), 1.0);

    for card in &ASSUMPTION_CARDS {
        b = b
            .play_one(write(card.key), 1.5)
            .play_one(unwrite(card.key), 1.0);
    }

    b.play_one(unwrite("title"), 1.0)
        .play_one(write("title.sparsity"), 1.0)
        .play_one(write("sparsity.rate"), 1.5)
        .play_one(unwrite("sparsity.rate"), 1.0)
        .play_one(unwrite("title.sparsity"), 1.0)
        .play_one(write("title.highdim"), 1.0)
        .play_one(write("highdim.rate"), 1.5)
        .play_one(unwrite("highdim.rate"), 1.0)
        .build()
}
