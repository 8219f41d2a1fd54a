//! Introducing the Lasso penalty and why its geometry produces exact zeros.

use kurbo::{Point, Vec2};

use crate::{
    foundation::core::palette,
    foundation::error::GgmResult,
    scene::builder::{SceneBuilder, create, fade_in, fade_out, scale, shift, write},
    scene::model::{
        DotElement, Element, EllipseElement, MathTexElement, PolygonElement, RectElement,
        SceneScript, TextElement,
    },
};

const BULLETS: [&str; 3] = [
    "Introduces bias, reduces variance",
    "Regularizes the coefficients",
    "Some of which become exactly zero",
];

/// Lasso title card, penalty, and the diamond/level-set tangency picture.
pub fn lasso_scene() -> GgmResult<SceneScript> {
    let mut b = SceneBuilder::new("lasso")
        .element(
            "lasso",
            Element::Text(TextElement {
                content: "Lasso".to_string(),
                at: Point::new(0.0, 0.0),
                color: palette::BLUE,
                font_size: 96.0,
            }),
        )?
        .element(
            "halo",
            Element::Ellipse(EllipseElement {
                at: Point::new(0.0, 0.0),
                color: palette::YELLOW,
                width: 5.3,
                height: 2.3,
                fill_opacity: 0.4,
                rotation_rad: 0.0,
            }),
        )?
        .element(
            "penalty",
            Element::MathTex(MathTexElement {
                tex: r"\text{Lasso penalty: } \lambda \sum_{b=1}^{p} \lvert \theta_b^a \rvert".to_string(),
                at: Point::new(0.0, 1.8),
                color: palette::WHITE,
                font_size: 48.0,
            }),
        )?;

    for (idx, bullet) in BULLETS.iter().enumerate() {
        b = b.element(
            format!("bullet.{idx}"),
            Element::Text(TextElement {
                content: format!("\u{2022} {bullet}"),
                at: Point::new(-1.0, 0.6 - 0.7 * idx as f64),
                color: palette::WHITE,
                font_size: 38.0,
            }),
        )?;
    }

    b = b
        .group(
            "bullets",
            (0..BULLETS.len()).map(|idx| format!("bullet.{idx}")),
        )?
        .element(
            "objective",
            Element::MathTex(MathTexElement {
                tex: r"\hat{\theta}^{\,a,\lambda} = \arg\min_{\theta :\, \theta_a = 0} \left( n^{-1} \| X_a - X\theta \|_2^{2} + \lambda \|\theta\|_{1} \right)".to_string(),
                at: Point::new(0.0, 0.0),
                color: palette::WHITE,
                font_size: 48.0,
            }),
        )?
        .element(
            "plane",
            Element::Rect(RectElement {
                at: Point::new(0.0, -1.6),
                color: palette::GREY,
                width: 6.0,
                height: 4.2,
            }),
        )?
        .element(
            "diamond",
            Element::Polygon(PolygonElement {
                points: vec![
                    Point::new(0.0, -0.2),
                    Point::new(1.4, -1.6),
                    Point::new(0.0, -3.0),
                    Point::new(-1.4, -1.6),
                ],
                color: palette::BLUE,
                fill_opacity: 0.2,
            }),
        )?
        .element(
            "levelset",
            Element::Ellipse(EllipseElement {
                at: Point::new(2.6, -1.6),
                color: palette::PURPLE,
                width: 2.4,
                height: 1.6,
                fill_opacity: 0.1,
                rotation_rad: std::f64::consts::PI / 6.0,
            }),
        )?
        .element(
            "touch",
            Element::Dot(DotElement {
                at: Point::new(1.4, -1.6),
                color: palette::YELLOW,
                radius: 0.08,
            }),
        )?
        .element(
            "label.ball",
            Element::MathTex(MathTexElement {
                tex: r"\lambda\Vert\theta\Vert_1".to_string(),
                at: Point::new(0.0, 0.2),
                color: palette::BLUE,
                font_size: 28.0,
            }),
        )?
        .element(
            "label.mse",
            Element::Text(TextElement {
                content: "MSE level set".to_string(),
                at: Point::new(2.6, -0.4),
                color: palette::PURPLE,
                font_size: 28.0,
            }),
        )?
        .element(
            "label.touch",
            Element::MathTex(MathTexElement {
                tex: r"\text{intersection at the minimum: } \theta = (2, 0)".to_string(),
                at: Point::new(-0.4, -1.2),
                color: palette::YELLOW,
                font_size: 28.0,
            }),
        )?
        .group(
            "labels",
            [
                "label.ball".to_string(),
                "label.mse".to_string(),
                "label.touch".to_string(),
            ],
        )?;

    b.play_one(write("lasso"), 1.0)
        .play_one(fade_in("halo"), 3.0)
        .play_one(fade_out("halo"), 1.0)
        .play_one(shift("lasso", Vec2::new(0.0, 3.3)), 1.0)
        .play_one(fade_in("penalty"), 1.0)
        .wait(2.0)
        .play_one(fade_in("bullets"), 1.0)
        .wait(2.0)
        .play_one(fade_out("bullets"), 1.0)
        .play_one(fade_out("penalty"), 1.0)
        .play_one(fade_in("objective"), 1.0)
        .play(
            vec![shift("objective", Vec2::new(0.0, 2.4)), scale("objective", 0.7)],
            1.0,
        )
        .play_one(create("plane"), 1.0)
        .play_one(create("diamond"), 1.0)
        .play_one(create("levelset"), 1.0)
        .play_one(fade_in("touch"), 1.0)
        .play_one(fade_in("labels"), 1.0)
        .wait(2.0)
        .build()
}
