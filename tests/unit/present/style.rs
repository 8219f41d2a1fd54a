use super::*;
use crate::foundation::core::palette;

#[test]
fn zero_wins_even_on_the_diagonal() {
    assert_eq!(classify_cell(0.0, 2, 2, ZERO_EPS), CellClass::Zero);
    assert_eq!(classify_cell(1e-9, 0, 0, ZERO_EPS), CellClass::Zero);
}

#[test]
fn diagonal_and_off_diagonal_split() {
    assert_eq!(classify_cell(1.0, 1, 1, ZERO_EPS), CellClass::Diagonal);
    assert_eq!(classify_cell(-0.4, 0, 1, ZERO_EPS), CellClass::OffDiagonal);
}

#[test]
fn format_rounds_to_one_decimal() {
    assert_eq!(format_cell(0.5, ZERO_EPS), "0.5");
    assert_eq!(format_cell(0.25, ZERO_EPS), "0.2");
    assert_eq!(format_cell(-0.35, ZERO_EPS), "-0.3");
    assert_eq!(format_cell(1.0, ZERO_EPS), "1.0");
}

#[test]
fn format_writes_exact_zero_for_small_values() {
    assert_eq!(format_cell(0.0, ZERO_EPS), "0");
    assert_eq!(format_cell(1e-8, ZERO_EPS), "0");
    assert_eq!(format_cell(-1e-8, ZERO_EPS), "0");
}

#[test]
fn default_palette_matches_the_video() {
    let p = MatrixPalette::default();
    assert_eq!(p.color_for(CellClass::Zero), palette::RED);
    assert_eq!(p.color_for(CellClass::Diagonal), palette::GREEN);
    assert_eq!(p.color_for(CellClass::OffDiagonal), palette::WHITE);
}
