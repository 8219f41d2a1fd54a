use crate::foundation::error::{GgmError, GgmResult};

/// Dense square matrix of `f64`, row-major.
///
/// This is the precision-matrix input of the graph builder. Construction
/// validates squareness once; all later accesses can index freely.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Build from ordered rows. Fails with [`GgmError::InvalidShape`] when the
    /// rows do not form an n×n grid.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> GgmResult<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(GgmError::invalid_shape(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// n×n matrix filled with zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Side length n.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics when `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i},{j}) out of bounds");
        self.data[i * self.n + j]
    }

    /// Overwrite the entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics when `i` or `j` is out of bounds.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.n && j < self.n, "index ({i},{j}) out of bounds");
        self.data[i * self.n + j] = value;
    }

    /// Whether `m[i][j]` and `m[j][i]` agree within `tol` for all pairs.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/matrix.rs"]
mod tests;
