use super::*;
use kurbo::Point;

use crate::{
    foundation::core::palette,
    scene::builder::{SceneBuilder, fade_in, fade_out, write},
    scene::model::{Element, TextElement},
};

fn text() -> Element {
    Element::Text(TextElement {
        content: "x".to_string(),
        at: Point::ORIGIN,
        color: palette::WHITE,
        font_size: 24.0,
    })
}

fn two_phase_script() -> SceneScript {
    SceneBuilder::new("tl")
        .element("a", text())
        .unwrap()
        .element("b", text())
        .unwrap()
        .group("ab", ["a".to_string(), "b".to_string()])
        .unwrap()
        .play_one(fade_in("ab"), 2.0)
        .wait(1.0)
        .play_one(fade_out("a"), 1.0)
        .play_one(write("a"), 1.0)
        .build()
        .unwrap()
}

#[test]
fn total_duration_sums_all_steps() {
    assert_eq!(total_duration_sec(&two_phase_script()), 5.0);
}

#[test]
fn spans_are_contiguous_and_labelled() {
    let spans = step_spans(&two_phase_script()).unwrap();
    assert_eq!(spans.len(), 4);
    assert_eq!(spans[0].start_sec, 0.0);
    assert_eq!(spans[0].end_sec, 2.0);
    assert_eq!(spans[0].kind, "play");
    assert_eq!(spans[1].kind, "wait");
    assert_eq!(spans[3].end_sec, 5.0);
    for pair in spans.windows(2) {
        assert_eq!(pair[0].end_sec, pair[1].start_sec);
    }
}

#[test]
fn group_show_expands_to_members() {
    let spans = step_spans(&two_phase_script()).unwrap();
    let first = &spans[0].visible_after;
    assert!(first.contains("a"));
    assert!(first.contains("b"));
    assert!(first.contains("ab"));
}

#[test]
fn hide_removes_only_the_target() {
    let spans = step_spans(&two_phase_script()).unwrap();
    let after_hide = &spans[2].visible_after;
    assert!(!after_hide.contains("a"));
    assert!(after_hide.contains("b"));
}

#[test]
fn visibility_flips_at_step_completion() {
    let script = two_phase_script();
    assert!(visible_at(&script, 0.0).unwrap().is_empty());
    assert!(visible_at(&script, 1.9).unwrap().is_empty());
    let mid = visible_at(&script, 2.5).unwrap();
    assert!(mid.contains("a") && mid.contains("b"));
    let after_hide = visible_at(&script, 4.0).unwrap();
    assert!(!after_hide.contains("a"));
    // The final write step brings `a` back.
    let end = visible_at(&script, 5.0).unwrap();
    assert!(end.contains("a"));
}

#[test]
fn spans_validate_the_script_first() {
    let mut script = two_phase_script();
    script.name.clear();
    assert!(step_spans(&script).is_err());
}
