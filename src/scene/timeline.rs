use std::collections::BTreeSet;

use crate::{
    foundation::error::GgmResult,
    scene::model::{Element, SceneScript, Step},
};

/// Time span of one step on the scene clock.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepSpan {
    /// Step index in [`SceneScript::steps`].
    pub index: usize,
    /// Start time in seconds.
    pub start_sec: f64,
    /// End time in seconds.
    pub end_sec: f64,
    /// `"play"` or `"wait"`.
    pub kind: &'static str,
    /// Element keys visible once this step has completed.
    pub visible_after: BTreeSet<String>,
}

/// Total scripted duration in seconds.
pub fn total_duration_sec(script: &SceneScript) -> f64 {
    script
        .steps
        .iter()
        .map(|step| match step {
            Step::Play { run_time_sec, .. } => *run_time_sec,
            Step::Wait { secs } => *secs,
        })
        .sum()
}

/// Walk the steps and report each one's time span and the visible set after
/// it completes.
///
/// Visibility flips at step completion: a shown target (and, for groups, the
/// whole membership closure) is counted from the end of the step that shows
/// it until the end of a step that hides it. Validates the script first.
#[tracing::instrument(skip(script), fields(scene = %script.name))]
pub fn step_spans(script: &SceneScript) -> GgmResult<Vec<StepSpan>> {
    script.validate()?;

    let mut spans = Vec::with_capacity(script.steps.len());
    let mut visible: BTreeSet<String> = BTreeSet::new();
    let mut clock = 0.0_f64;

    for (index, step) in script.steps.iter().enumerate() {
        let duration = match step {
            Step::Play { run_time_sec, .. } => *run_time_sec,
            Step::Wait { secs } => *secs,
        };
        let start_sec = clock;
        clock += duration;

        if let Step::Play { anims, .. } = step {
            for anim in anims {
                if anim.kind.shows_target() {
                    for key in expand_target(script, &anim.target) {
                        visible.insert(key);
                    }
                } else if anim.kind.hides_target() {
                    for key in expand_target(script, &anim.target) {
                        visible.remove(&key);
                    }
                }
            }
        }

        spans.push(StepSpan {
            index,
            start_sec,
            end_sec: clock,
            kind: match step {
                Step::Play { .. } => "play",
                Step::Wait { .. } => "wait",
            },
            visible_after: visible.clone(),
        });
    }

    Ok(spans)
}

/// Element keys visible at time `t_sec` on the scene clock.
///
/// Before the first step completes nothing is visible; from then on the set
/// is the `visible_after` of the last completed step.
pub fn visible_at(script: &SceneScript, t_sec: f64) -> GgmResult<BTreeSet<String>> {
    let spans = step_spans(script)?;
    let mut current = BTreeSet::new();
    for span in spans {
        if span.end_sec <= t_sec {
            current = span.visible_after;
        } else {
            break;
        }
    }
    Ok(current)
}

/// A target key plus, when it names a group, all transitive members.
fn expand_target(script: &SceneScript, target: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack = vec![target.to_string()];
    while let Some(key) = stack.pop() {
        if out.contains(&key) {
            continue;
        }
        if let Some(Element::Group(group)) = script.elements.get(&key) {
            stack.extend(group.children.iter().cloned());
        }
        out.push(key);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/timeline.rs"]
mod tests;
