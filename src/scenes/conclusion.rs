//! Wrap-up: what was gained, what the error control says, what still hurts,
//! and the hand-off to the graphical lasso. Ends with scrolling credits.

use kurbo::{Point, Vec2};

use crate::{
    foundation::core::palette,
    foundation::error::GgmResult,
    scene::builder::{SceneBuilder, fade_in, fade_out, grow_arrow, move_to, scale, shift, write},
    scene::ease::Ease,
    scene::model::{ArrowElement, Element, MathTexElement, SceneScript, TextElement},
};

const LIMITATIONS: [&str; 3] = [
    "A single λ hides the hubs of a heterogeneous network.",
    "The choice of λ is critical:\n   too small takes noise, too large misses neighbors.",
    "Each node is fit separately:\n   symmetry is not guaranteed (AND/OR patch-up).",
];

const CREDITS: [&str; 8] = [
    "Produced by:",
    "Athur Lamazière",
    "Owen Couturier",
    "Maelle Luzurier",
    "Titouan Choaler",
    "Source article:",
    "'High dimensional graphs and\n variable selection with the Lasso'",
    "Nicolai Meinshausen and Peter Bühlmann",
];

/// Conclusion card sequence plus the credit scroll.
pub fn conclusion_scene() -> GgmResult<SceneScript> {
    let mut b = SceneBuilder::new("conclusion")
        .element(
            "title",
            Element::Text(TextElement {
                content: "Conclusion".to_string(),
                at: Point::new(0.0, 0.0),
                color: palette::BLUE,
                font_size: 96.0,
            }),
        )?
        .element(
            "complexity",
            Element::Text(TextElement {
                content: "From exponential exhaustive complexity\nto a quadratic one.".to_string(),
                at: Point::new(0.0, 0.0),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?
        .element(
            "control.title",
            Element::MathTex(MathTexElement {
                tex: r"\text{Type I and type II error control}".to_string(),
                at: Point::new(0.0, 0.4),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?
        .element(
            "control.sub",
            Element::MathTex(MathTexElement {
                tex: r"\mathbb{P}(\hat{ne}_a^{\lambda} \subseteq ne_a) = 1 - O(\exp(-cn^\epsilon))".to_string(),
                at: Point::new(0.0, -0.4),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?
        .element(
            "control.sup",
            Element::MathTex(MathTexElement {
                tex: r"\mathbb{P}(ne_a \subseteq \hat{ne}_a^{\lambda}) = 1 - O(\exp(-cn^\epsilon))".to_string(),
                at: Point::new(0.0, -1.2),
                color: palette::WHITE,
                font_size: 36.0,
            }),
        )?
        .element(
            "control.eps",
            Element::MathTex(MathTexElement {
                tex: r"\epsilon \geq 1".to_string(),
                at: Point::new(0.0, -1.9),
                color: palette::WHITE,
                font_size: 25.0,
            }),
        )?
        .group(
            "control",
            [
                "control.title".to_string(),
                "control.sub".to_string(),
                "control.sup".to_string(),
                "control.eps".to_string(),
            ],
        )?
        .element(
            "handoff.arrow",
            Element::Arrow(ArrowElement {
                from: Point::new(-1.5, 0.0),
                to: Point::new(2.5, 0.0),
                color: palette::YELLOW,
                stroke_width: 6.0,
            }),
        )?
        .element(
            "handoff.glasso",
            Element::Text(TextElement {
                content: "Graphical Lasso".to_string(),
                at: Point::new(4.3, 0.0),
                color: palette::YELLOW,
                font_size: 32.0,
            }),
        )?;

    for (idx, text) in LIMITATIONS.iter().enumerate() {
        b = b.element(
            format!("limit.{idx}"),
            Element::Text(TextElement {
                content: (*text).to_string(),
                at: Point::new(0.0, 1.2 - 1.2 * idx as f64),
                color: palette::WHITE,
                font_size: 28.0,
            }),
        )?;
    }
    b = b.group(
        "limits",
        (0..LIMITATIONS.len()).map(|idx| format!("limit.{idx}")),
    )?;

    for (idx, line) in CREDITS.iter().enumerate() {
        let bold = line.ends_with(':');
        b = b.element(
            format!("credit.{idx}"),
            Element::Text(TextElement {
                content: (*line).to_string(),
                at: Point::new(0.0, -7.0 - 1.0 * idx as f64),
                color: palette::WHITE,
                font_size: if bold { 32.0 } else { 28.0 },
            }),
        )?;
    }
    b = b.group("credits", (0..CREDITS.len()).map(|idx| format!("credit.{idx}")))?;

    b = b
        .play_one(write("title"), 1.0)
        .wait(3.0)
        .play_one(shift("title", Vec2::new(0.0, 3.3)), 1.0)
        .play_one(write("complexity"), 1.5)
        .wait(3.0)
        .play_one(shift("complexity", Vec2::new(0.0, 2.2)), 1.0)
        .play_one(write("control"), 3.0)
        .play(vec![fade_out("complexity"), fade_out("control")], 2.0);

    for idx in 0..LIMITATIONS.len() {
        b = b.play_one(write(format!("limit.{idx}")), 2.0).wait(1.0);
    }

    b = b
        .play(
            vec![scale("limits", 0.7), shift("limits", Vec2::new(-4.5, 0.0))],
            2.0,
        )
        .play_one(grow_arrow("handoff.arrow"), 2.0)
        .play_one(write("handoff.glasso"), 2.0)
        .wait(2.0)
        .play(
            vec![
                fade_out("limits"),
                fade_out("title"),
                fade_out("handoff.arrow"),
                fade_out("handoff.glasso"),
            ],
            2.0,
        );

    // Credits scroll bottom to top at constant speed.
    let mut scroll_anim = move_to("credits", Point::new(0.0, 8.0));
    scroll_anim.ease = Ease::Linear;
    b.play_one(fade_in("credits"), 0.5)
        .play_one(scroll_anim, 12.0)
        .build()
}
