use crate::{
    foundation::error::{GgmError, GgmResult},
    graph::matrix::SquareMatrix,
};

/// Default magnitude below which an off-diagonal entry counts as zero.
pub const DEFAULT_EDGE_THRESHOLD: f64 = 1e-6;

/// Undirected weighted edge with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    /// Lower node id.
    pub a: usize,
    /// Higher node id.
    pub b: usize,
    /// Originating matrix entry.
    pub weight: f64,
}

/// Undirected graph over nodes `0..node_count`.
///
/// The edge set is derived from a matrix by [`build_graph`] /
/// [`build_graph_combined`] and is never edited in place; rebuilding from the
/// matrix is the only way to change it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Node ids `0..n`.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.node_count
    }

    /// Derived edges, upper-triangle order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the unordered pair `{i, j}` is an edge.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        self.edges.iter().any(|e| e.a == a && e.b == b)
    }

    /// Node ids adjacent to `node`, ascending.
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|e| {
                if e.a == node {
                    Some(e.b)
                } else if e.b == node {
                    Some(e.a)
                } else {
                    None
                }
            })
            .collect();
        out.sort_unstable();
        out
    }
}

/// Rule for combining the two directed entries of an asymmetric estimate
/// into one undirected edge decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CombineRule {
    /// Keep `{i, j}` only when both `|m[i][j]|` and `|m[j][i]|` pass.
    And,
    /// Keep `{i, j}` when either entry passes.
    Or,
}

fn check_threshold(threshold: f64) -> GgmResult<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(GgmError::validation(
            "edge threshold must be finite and non-negative",
        ));
    }
    Ok(())
}

/// Build the conditional-dependence graph of a symmetric precision matrix.
///
/// Edge `{i, j}` (with `i < j`) is present iff `|m[i][j]| > threshold`,
/// strictly; its weight is the entry itself. Only the upper triangle is
/// inspected, the caller vouches for symmetry. The diagonal never
/// contributes edges and a 0×0 matrix yields the empty graph.
#[tracing::instrument(skip(matrix), fields(n = matrix.dim()))]
pub fn build_graph(matrix: &SquareMatrix, threshold: f64) -> GgmResult<Graph> {
    check_threshold(threshold)?;
    let n = matrix.dim();
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let w = matrix.get(i, j);
            if w.abs() > threshold {
                edges.push(Edge { a: i, b: j, weight: w });
            }
        }
    }
    Ok(Graph {
        node_count: n,
        edges,
    })
}

/// Build a graph from an asymmetric neighborhood estimate.
///
/// Neighborhood selection fits one regression per node, so `m[i][j]` and
/// `m[j][i]` may disagree; `rule` decides how the pair is merged. The edge
/// weight is whichever of the two entries has the larger magnitude. On a
/// symmetric matrix both rules coincide with [`build_graph`].
#[tracing::instrument(skip(matrix), fields(n = matrix.dim()))]
pub fn build_graph_combined(
    matrix: &SquareMatrix,
    threshold: f64,
    rule: CombineRule,
) -> GgmResult<Graph> {
    check_threshold(threshold)?;
    let n = matrix.dim();
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let upper = matrix.get(i, j);
            let lower = matrix.get(j, i);
            let keep = match rule {
                CombineRule::And => upper.abs() > threshold && lower.abs() > threshold,
                CombineRule::Or => upper.abs() > threshold || lower.abs() > threshold,
            };
            if keep {
                let weight = if lower.abs() > upper.abs() { lower } else { upper };
                edges.push(Edge { a: i, b: j, weight });
            }
        }
    }
    Ok(Graph {
        node_count: n,
        edges,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/graph/build.rs"]
mod tests;
