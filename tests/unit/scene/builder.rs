use super::*;
use crate::scene::model::{Element, Step, TextElement};

fn text(content: &str) -> Element {
    Element::Text(TextElement {
        content: content.to_string(),
        at: Point::ORIGIN,
        color: palette::WHITE,
        font_size: 24.0,
    })
}

#[test]
fn builds_a_valid_script_in_step_order() {
    let script = SceneBuilder::new("demo")
        .element("a", text("a"))
        .unwrap()
        .element("b", text("b"))
        .unwrap()
        .play_one(fade_in("a"), 1.0)
        .wait(0.5)
        .play(vec![fade_out("a"), fade_in("b")], 2.0)
        .build()
        .unwrap();

    assert_eq!(script.name, "demo");
    assert_eq!(script.steps.len(), 3);
    assert!(matches!(script.steps[0], Step::Play { .. }));
    assert!(matches!(script.steps[1], Step::Wait { .. }));
}

#[test]
fn rejects_duplicate_element_keys() {
    let err = SceneBuilder::new("demo")
        .element("a", text("a"))
        .unwrap()
        .element("a", text("again"))
        .unwrap_err();
    assert!(err.to_string().contains("duplicate element key"));
}

#[test]
fn build_runs_validation() {
    let err = SceneBuilder::new("demo")
        .element("a", text("a"))
        .unwrap()
        .play_one(fade_in("ghost"), 1.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, crate::foundation::error::GgmError::Validation(_)));
}

#[test]
fn group_members_animate_as_one() {
    let script = SceneBuilder::new("demo")
        .element("a", text("a"))
        .unwrap()
        .element("b", text("b"))
        .unwrap()
        .group("both", ["a".to_string(), "b".to_string()])
        .unwrap()
        .play_one(fade_in("both"), 1.0)
        .build()
        .unwrap();
    assert_eq!(script.elements.len(), 3);
}

#[test]
fn helpers_set_the_expected_kinds() {
    use crate::scene::model::AnimKind;

    assert!(matches!(fade_in("x").kind, AnimKind::FadeIn));
    assert!(matches!(fade_out("x").kind, AnimKind::FadeOut));
    assert!(matches!(write("x").kind, AnimKind::Write));
    assert!(matches!(unwrite("x").kind, AnimKind::Unwrite));
    assert!(matches!(create("x").kind, AnimKind::Create));
    assert!(matches!(grow_arrow("x").kind, AnimKind::GrowArrow));
    assert!(matches!(scale("x", 2.0).kind, AnimKind::Scale { .. }));
    assert!(matches!(
        shift("x", Vec2::new(1.0, 0.0)).kind,
        AnimKind::Shift { .. }
    ));
    assert!(matches!(
        move_to("x", Point::new(1.0, 1.0)).kind,
        AnimKind::MoveTo { .. }
    ));
    assert!(matches!(
        recolor("x", palette::RED).kind,
        AnimKind::Recolor { .. }
    ));
}
