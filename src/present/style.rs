use crate::foundation::core::{Rgba8, palette};

/// Magnitude below which a displayed entry is written as an exact zero.
pub const ZERO_EPS: f64 = 1e-6;

/// Display class of one matrix entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CellClass {
    /// Entry indistinguishable from zero. Wins over `Diagonal`.
    Zero,
    /// Non-zero entry on the main diagonal.
    Diagonal,
    /// Non-zero entry off the diagonal.
    OffDiagonal,
}

/// Classify the entry at `(i, j)`. Zero takes precedence even on the
/// diagonal, matching how the matrix is read out loud in the video.
pub fn classify_cell(value: f64, i: usize, j: usize, zero_eps: f64) -> CellClass {
    if value.abs() < zero_eps {
        CellClass::Zero
    } else if i == j {
        CellClass::Diagonal
    } else {
        CellClass::OffDiagonal
    }
}

/// Format an entry for display: `"0"` for zero-class values, otherwise the
/// value rounded to one decimal.
pub fn format_cell(value: f64, zero_eps: f64) -> String {
    if value.abs() < zero_eps {
        "0".to_string()
    } else {
        format!("{value:.1}")
    }
}

/// Colors for the three entry classes of a rendered matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatrixPalette {
    /// Zero entries.
    pub zero: Rgba8,
    /// Diagonal entries.
    pub diagonal: Rgba8,
    /// Off-diagonal non-zero entries.
    pub off_diagonal: Rgba8,
}

impl Default for MatrixPalette {
    fn default() -> Self {
        Self {
            zero: palette::RED,
            diagonal: palette::GREEN,
            off_diagonal: palette::WHITE,
        }
    }
}

impl MatrixPalette {
    /// Color for a classified entry.
    pub fn color_for(&self, class: CellClass) -> Rgba8 {
        match class {
            CellClass::Zero => self.zero,
            CellClass::Diagonal => self.diagonal,
            CellClass::OffDiagonal => self.off_diagonal,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/style.rs"]
mod tests;
