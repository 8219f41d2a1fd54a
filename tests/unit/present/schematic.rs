use super::*;

#[test]
fn same_seed_reproduces_the_pattern() {
    let a = SchematicPattern::random(6, 0.7, 42);
    let b = SchematicPattern::random(6, 0.7, 42);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_usually_differ() {
    let a = SchematicPattern::random(8, 0.5, 1);
    let b = SchematicPattern::random(8, 0.5, 2);
    assert_ne!(a, b);
}

#[test]
fn diagonal_cells_are_always_present() {
    let p = SchematicPattern::random(5, 0.9, 7);
    for i in 0..5 {
        assert_eq!(p.cell(i, i), SchematicCell::Diagonal);
    }
}

#[test]
fn extreme_probabilities_are_all_or_nothing() {
    let all_zero = SchematicPattern::random(4, 1.0, 3);
    let none_zero = SchematicPattern::random(4, 0.0, 3);
    for i in 0..4 {
        for j in 0..4 {
            if i != j {
                assert_eq!(all_zero.cell(i, j), SchematicCell::Zero);
                assert_eq!(none_zero.cell(i, j), SchematicCell::NonZero);
            }
        }
    }
}

#[test]
fn and_pairs_are_a_subset_of_or_pairs() {
    let p = SchematicPattern::random(10, 0.6, 11);
    let and = p.edge_pairs(CombineRule::And);
    let or = p.edge_pairs(CombineRule::Or);
    for pair in &and {
        assert!(or.contains(pair));
    }
    assert!(and.len() <= or.len());
}

#[test]
fn glyphs_and_colors_are_stable() {
    assert_eq!(SchematicCell::Diagonal.glyph(), "•");
    assert_eq!(SchematicCell::Zero.glyph(), "0");
    assert_eq!(SchematicCell::NonZero.glyph(), "×");
    assert_eq!(SchematicCell::Zero.color(), palette::GREEN);
    assert_eq!(SchematicCell::NonZero.color(), palette::ORANGE);
}

#[test]
fn synthetic_pairs_are_seeded_and_ordered() {
    let a = synthetic_edge_pairs(8, 0.4, 5);
    let b = synthetic_edge_pairs(8, 0.4, 5);
    assert_eq!(a, b);
    for &(i, j) in &a {
        assert!(i < j && j < 8);
    }
    assert_eq!(synthetic_edge_pairs(8, 0.0, 5), vec![]);
    assert_eq!(synthetic_edge_pairs(4, 1.0, 5).len(), 6);
}
