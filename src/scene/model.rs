use std::collections::BTreeMap;

use kurbo::{Point, Vec2};

use crate::{
    foundation::core::Rgba8,
    foundation::error::{GgmError, GgmResult},
    scene::ease::Ease,
};

/// A complete scripted scene.
///
/// A scene is a pure data model: an element table (the drawables) plus an
/// ordered list of timed steps animating them. It can be built
/// programmatically (see [`crate::SceneBuilder`]), serialized via Serde, and
/// handed to any [`crate::SceneRenderer`] for playback.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneScript {
    /// Stable scene name used by the registry and the CLI.
    pub name: String,
    /// Background fill behind all elements.
    pub background: Rgba8,
    /// Element table keyed by stable user-facing keys.
    pub elements: BTreeMap<String, Element>,
    /// Ordered playback steps.
    pub steps: Vec<Step>,
}

/// One drawable of a scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Element {
    /// Plain text block.
    Text(TextElement),
    /// Math formula, carried as TeX source for the renderer to typeset.
    MathTex(MathTexElement),
    /// Small filled dot.
    Dot(DotElement),
    /// Circle outline with optional fill.
    Circle(CircleElement),
    /// Axis-aligned square.
    Square(SquareElement),
    /// Axis-aligned rectangle outline.
    Rect(RectElement),
    /// Axis-aligned ellipse.
    Ellipse(EllipseElement),
    /// Closed polygon.
    Polygon(PolygonElement),
    /// Straight line segment.
    Line(LineElement),
    /// Arrow from tail to head.
    Arrow(ArrowElement),
    /// Named group of other elements, animated as one unit.
    Group(GroupElement),
}

/// Axis-aligned ellipse.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EllipseElement {
    /// Center position.
    pub at: Point,
    /// Stroke (and fill) color.
    pub color: Rgba8,
    /// Full width in scene units.
    pub width: f64,
    /// Full height in scene units.
    pub height: f64,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Rotation about the center, radians counter-clockwise.
    pub rotation_rad: f64,
}

/// Closed polygon.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PolygonElement {
    /// Vertices in draw order; the outline closes back to the first.
    pub points: Vec<Point>,
    /// Stroke (and fill) color.
    pub color: Rgba8,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
}

/// Plain text block.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextElement {
    /// Text content.
    pub content: String,
    /// Anchor position (center).
    pub at: Point,
    /// Fill color.
    pub color: Rgba8,
    /// Font size in scene units.
    pub font_size: f64,
}

/// Math formula element.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MathTexElement {
    /// TeX source, without surrounding `$`.
    pub tex: String,
    /// Anchor position (center).
    pub at: Point,
    /// Fill color.
    pub color: Rgba8,
    /// Font size in scene units.
    pub font_size: f64,
}

/// Small filled dot.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DotElement {
    /// Center position.
    pub at: Point,
    /// Fill color.
    pub color: Rgba8,
    /// Radius in scene units.
    pub radius: f64,
}

/// Circle outline with optional fill.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CircleElement {
    /// Center position.
    pub at: Point,
    /// Stroke (and fill) color.
    pub color: Rgba8,
    /// Radius in scene units.
    pub radius: f64,
    /// Fill opacity in `[0, 1]`; 0 leaves only the outline.
    pub fill_opacity: f64,
}

/// Axis-aligned square.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SquareElement {
    /// Center position.
    pub at: Point,
    /// Stroke color.
    pub color: Rgba8,
    /// Side length in scene units.
    pub side: f64,
    /// Fill color, when filled.
    pub fill: Option<Rgba8>,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
}

/// Axis-aligned rectangle outline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RectElement {
    /// Center position.
    pub at: Point,
    /// Stroke color.
    pub color: Rgba8,
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

/// Straight line segment.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LineElement {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in scene units.
    pub stroke_width: f64,
}

/// Arrow from tail to head.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ArrowElement {
    /// Tail point.
    pub from: Point,
    /// Head point.
    pub to: Point,
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in scene units.
    pub stroke_width: f64,
}

/// Named group of other elements.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GroupElement {
    /// Keys of the member elements, in draw order.
    pub children: Vec<String>,
}

/// One playback step.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Step {
    /// Run a set of animations together over `run_time_sec` seconds.
    Play {
        /// Animations applied in parallel during this step.
        anims: Vec<Animation>,
        /// Step duration in seconds; must be finite and positive.
        run_time_sec: f64,
    },
    /// Hold the current frame for `secs` seconds.
    Wait {
        /// Hold duration in seconds; must be finite and positive.
        secs: f64,
    },
}

/// A single animation applied to one element during a play step.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    /// Key of the animated element in [`SceneScript::elements`].
    pub target: String,
    /// What the animation does.
    pub kind: AnimKind,
    /// Easing curve over the step's run time.
    pub ease: Ease,
}

/// Animation kinds, mirroring the playbook of the video's scenes.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum AnimKind {
    /// Fade the target in from transparent. Shows the target.
    FadeIn,
    /// Fade the target out to transparent. Hides the target.
    FadeOut,
    /// Draw text or a formula stroke by stroke. Shows the target.
    Write,
    /// Erase a written target stroke by stroke. Hides the target.
    Unwrite,
    /// Trace a shape's outline. Shows the target.
    Create,
    /// Grow an arrow from its tail. Shows the target.
    GrowArrow,
    /// Translate the target by an offset.
    Shift {
        /// Translation applied over the step.
        by: Vec2,
    },
    /// Move the target's anchor to an absolute position.
    MoveTo {
        /// Destination anchor.
        to: Point,
    },
    /// Scale the target about its anchor.
    Scale {
        /// Scale factor; must be finite and positive.
        factor: f64,
    },
    /// Change the target's color.
    Recolor {
        /// Destination color.
        to: Rgba8,
    },
}

impl AnimKind {
    /// Whether the animation makes its target visible.
    pub fn shows_target(&self) -> bool {
        matches!(
            self,
            Self::FadeIn | Self::Write | Self::Create | Self::GrowArrow
        )
    }

    /// Whether the animation hides its target.
    pub fn hides_target(&self) -> bool {
        matches!(self, Self::FadeOut | Self::Unwrite)
    }
}

impl SceneScript {
    /// Validate the script before playback or export.
    ///
    /// Checks: non-empty name, all durations finite and positive, every
    /// animation target present in the element table, every group child
    /// present and not the group itself, scale factors finite and positive.
    pub fn validate(&self) -> GgmResult<()> {
        if self.name.trim().is_empty() {
            return Err(GgmError::validation("scene name must be non-empty"));
        }

        for (key, element) in &self.elements {
            match element {
                Element::Group(group) => {
                    for child in &group.children {
                        if child == key {
                            return Err(GgmError::validation(format!(
                                "group '{key}' contains itself"
                            )));
                        }
                        if !self.elements.contains_key(child) {
                            return Err(GgmError::validation(format!(
                                "group '{key}' references missing element '{child}'"
                            )));
                        }
                    }
                }
                Element::Polygon(poly) => {
                    if poly.points.len() < 3 {
                        return Err(GgmError::validation(format!(
                            "polygon '{key}' needs at least 3 vertices"
                        )));
                    }
                }
                _ => {}
            }
        }

        for (idx, step) in self.steps.iter().enumerate() {
            match step {
                Step::Wait { secs } => {
                    if !secs.is_finite() || *secs <= 0.0 {
                        return Err(GgmError::validation(format!(
                            "step {idx}: wait duration must be finite and positive"
                        )));
                    }
                }
                Step::Play {
                    anims,
                    run_time_sec,
                } => {
                    if !run_time_sec.is_finite() || *run_time_sec <= 0.0 {
                        return Err(GgmError::validation(format!(
                            "step {idx}: run time must be finite and positive"
                        )));
                    }
                    if anims.is_empty() {
                        return Err(GgmError::validation(format!(
                            "step {idx}: play step has no animations"
                        )));
                    }
                    for anim in anims {
                        if !self.elements.contains_key(&anim.target) {
                            return Err(GgmError::validation(format!(
                                "step {idx}: animation targets missing element '{}'",
                                anim.target
                            )));
                        }
                        if let AnimKind::Scale { factor } = anim.kind {
                            if !factor.is_finite() || factor <= 0.0 {
                                return Err(GgmError::validation(format!(
                                    "step {idx}: scale factor must be finite and positive"
                                )));
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
