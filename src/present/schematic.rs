use crate::{
    foundation::core::{Rgba8, palette},
    foundation::math::Rng64,
    graph::build::CombineRule,
};

/// One cell of a schematic precision matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SchematicCell {
    /// Diagonal entry, always drawn as present (`•`).
    Diagonal,
    /// Off-diagonal entry shown as a structural zero (`0`).
    Zero,
    /// Off-diagonal entry shown as non-zero (`×`).
    NonZero,
}

impl SchematicCell {
    /// Glyph drawn inside the cell.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Diagonal => "•",
            Self::Zero => "0",
            Self::NonZero => "×",
        }
    }

    /// Display color of the glyph.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Diagonal => palette::WHITE,
            Self::Zero => palette::GREEN,
            Self::NonZero => palette::ORANGE,
        }
    }
}

/// A p×p schematic zero pattern, row-major.
///
/// Off-diagonal cells are drawn independently for `(i, j)` and `(j, i)`, so a
/// pattern is in general asymmetric; that asymmetry is what the AND/OR
/// narration in the video is about.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SchematicPattern {
    p: usize,
    cells: Vec<SchematicCell>,
}

impl SchematicPattern {
    /// Sample a pattern: diagonal cells are always `Diagonal`, each
    /// off-diagonal cell is `Zero` with probability `zero_prob`. Identical
    /// seeds produce identical patterns.
    pub fn random(p: usize, zero_prob: f64, seed: u64) -> Self {
        let zero_prob = zero_prob.clamp(0.0, 1.0);
        let mut rng = Rng64::new(seed);
        let mut cells = Vec::with_capacity(p * p);
        for i in 0..p {
            for j in 0..p {
                let cell = if i == j {
                    SchematicCell::Diagonal
                } else if rng.next_f64_01() < zero_prob {
                    SchematicCell::Zero
                } else {
                    SchematicCell::NonZero
                };
                cells.push(cell);
            }
        }
        Self { p, cells }
    }

    /// Side length p.
    pub fn dim(&self) -> usize {
        self.p
    }

    /// Cell at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics when `i` or `j` is out of bounds.
    pub fn cell(&self, i: usize, j: usize) -> SchematicCell {
        assert!(i < self.p && j < self.p, "index ({i},{j}) out of bounds");
        self.cells[i * self.p + j]
    }

    /// Undirected pairs `(i, j)` with `i < j` whose cells read as an edge
    /// under `rule`: `And` needs both directions non-zero, `Or` either.
    pub fn edge_pairs(&self, rule: CombineRule) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.p {
            for j in (i + 1)..self.p {
                let upper = self.cell(i, j) == SchematicCell::NonZero;
                let lower = self.cell(j, i) == SchematicCell::NonZero;
                let keep = match rule {
                    CombineRule::And => upper && lower,
                    CombineRule::Or => upper || lower,
                };
                if keep {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

/// Sample undirected pairs `(i, j)` with `i < j`, each kept with probability
/// `density`. Presentation scaffolding for "draw some plausible edges".
pub fn synthetic_edge_pairs(p: usize, density: f64, seed: u64) -> Vec<(usize, usize)> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = Rng64::new(seed);
    let mut pairs = Vec::new();
    for i in 0..p {
        for j in (i + 1)..p {
            if rng.next_f64_01() < density {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
#[path = "../../tests/unit/present/schematic.rs"]
mod tests;
