use std::collections::BTreeMap;

use kurbo::{Point, Vec2};

use crate::{
    foundation::core::{Rgba8, palette},
    foundation::error::{GgmError, GgmResult},
    scene::ease::Ease,
    scene::model::{Animation, AnimKind, Element, GroupElement, SceneScript, Step},
};

/// Programmatic builder for a [`SceneScript`].
///
/// Mirrors how the scenes are authored: register elements up front, then
/// script `play` / `wait` steps in order. `build` validates the result.
#[derive(Debug)]
pub struct SceneBuilder {
    name: String,
    background: Rgba8,
    elements: BTreeMap<String, Element>,
    steps: Vec<Step>,
}

impl SceneBuilder {
    /// Start a scene with the given registry name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: palette::BLACK,
            elements: BTreeMap::new(),
            steps: Vec::new(),
        }
    }

    /// Set the background fill.
    pub fn background(mut self, color: Rgba8) -> Self {
        self.background = color;
        self
    }

    /// Register one element under a stable key. Duplicate keys are rejected.
    pub fn element(mut self, key: impl Into<String>, element: Element) -> GgmResult<Self> {
        let key = key.into();
        if self.elements.contains_key(&key) {
            return Err(GgmError::validation(format!(
                "duplicate element key '{key}'"
            )));
        }
        self.elements.insert(key, element);
        Ok(self)
    }

    /// Register a batch of keyed elements (as produced by the figure helpers).
    pub fn elements(
        mut self,
        batch: impl IntoIterator<Item = (String, Element)>,
    ) -> GgmResult<Self> {
        for (key, element) in batch {
            self = self.element(key, element)?;
        }
        Ok(self)
    }

    /// Register a group over existing keys and return the builder.
    pub fn group(
        self,
        key: impl Into<String>,
        children: impl IntoIterator<Item = String>,
    ) -> GgmResult<Self> {
        self.element(
            key,
            Element::Group(GroupElement {
                children: children.into_iter().collect(),
            }),
        )
    }

    /// Append a play step running `anims` together for `run_time_sec`.
    pub fn play(mut self, anims: Vec<Animation>, run_time_sec: f64) -> Self {
        self.steps.push(Step::Play {
            anims,
            run_time_sec,
        });
        self
    }

    /// Append a play step with a single animation.
    pub fn play_one(self, anim: Animation, run_time_sec: f64) -> Self {
        self.play(vec![anim], run_time_sec)
    }

    /// Append a wait step.
    pub fn wait(mut self, secs: f64) -> Self {
        self.steps.push(Step::Wait { secs });
        self
    }

    /// Finish and validate the script.
    pub fn build(self) -> GgmResult<SceneScript> {
        let script = SceneScript {
            name: self.name,
            background: self.background,
            elements: self.elements,
            steps: self.steps,
        };
        script.validate()?;
        Ok(script)
    }
}

/// Fade a target in.
pub fn fade_in(target: impl Into<String>) -> Animation {
    anim(target, AnimKind::FadeIn)
}

/// Fade a target out.
pub fn fade_out(target: impl Into<String>) -> Animation {
    anim(target, AnimKind::FadeOut)
}

/// Write a text or formula target.
pub fn write(target: impl Into<String>) -> Animation {
    anim(target, AnimKind::Write)
}

/// Erase a written target.
pub fn unwrite(target: impl Into<String>) -> Animation {
    anim(target, AnimKind::Unwrite)
}

/// Trace a shape target.
pub fn create(target: impl Into<String>) -> Animation {
    anim(target, AnimKind::Create)
}

/// Grow an arrow target from its tail.
pub fn grow_arrow(target: impl Into<String>) -> Animation {
    anim(target, AnimKind::GrowArrow)
}

/// Shift a target by an offset.
pub fn shift(target: impl Into<String>, by: Vec2) -> Animation {
    anim(target, AnimKind::Shift { by })
}

/// Move a target to an absolute position.
pub fn move_to(target: impl Into<String>, to: Point) -> Animation {
    anim(target, AnimKind::MoveTo { to })
}

/// Scale a target about its anchor.
pub fn scale(target: impl Into<String>, factor: f64) -> Animation {
    anim(target, AnimKind::Scale { factor })
}

/// Recolor a target.
pub fn recolor(target: impl Into<String>, to: Rgba8) -> Animation {
    anim(target, AnimKind::Recolor { to })
}

fn anim(target: impl Into<String>, kind: AnimKind) -> Animation {
    Animation {
        target: target.into(),
        kind,
        ease: Ease::InOutQuad,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
