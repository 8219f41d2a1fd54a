use kurbo::Point;

use crate::graph::build::Graph;

/// Node positions on a circle, indexed by node id.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircularLayout {
    positions: Vec<Point>,
}

impl CircularLayout {
    /// Position of `node`, or `None` past the node count.
    pub fn position(&self, node: usize) -> Option<Point> {
        self.positions.get(node).copied()
    }

    /// All positions in node-id order.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Place the graph's nodes evenly on a circle of the given radius.
///
/// Node k sits at angle `2π·k/n`, counter-clockwise from angle 0. The result
/// depends only on the node count, never on the edge set, so layouts stay
/// stable while thresholds move edges in and out.
pub fn circular_layout(graph: &Graph, radius: f64) -> CircularLayout {
    let n = graph.node_count();
    if n == 0 {
        return CircularLayout {
            positions: Vec::new(),
        };
    }
    let step = std::f64::consts::TAU / (n as f64);
    let positions = (0..n)
        .map(|k| {
            let angle = step * (k as f64);
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    CircularLayout { positions }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/layout.rs"]
mod tests;
