use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn curves_are_monotone_on_a_grid() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v >= prev - 1e-12, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn in_out_is_symmetric_about_the_midpoint() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic] {
        for i in 0..=50 {
            let t = i as f64 / 100.0;
            let lhs = ease.apply(t);
            let rhs = 1.0 - ease.apply(1.0 - t);
            assert!((lhs - rhs).abs() < 1e-12, "{ease:?} asymmetric at {t}");
        }
    }
}
