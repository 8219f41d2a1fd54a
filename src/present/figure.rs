use kurbo::Point;

use crate::{
    foundation::core::{Rgba8, palette},
    foundation::error::{GgmError, GgmResult},
    graph::build::Graph,
    graph::layout::CircularLayout,
    graph::matrix::SquareMatrix,
    present::schematic::SchematicPattern,
    present::style::{self, MatrixPalette},
    scene::model::{
        CircleElement, Element, LineElement, MathTexElement, SquareElement, TextElement,
    },
};

/// Styling for a rendered graph figure.
#[derive(Clone, Copy, Debug)]
pub struct GraphFigureStyle {
    /// Node circle radius.
    pub node_radius: f64,
    /// Node outline/fill color.
    pub node_color: Rgba8,
    /// Node fill opacity.
    pub node_fill_opacity: f64,
    /// Edge stroke color.
    pub edge_color: Rgba8,
    /// Edge stroke width.
    pub edge_stroke_width: f64,
    /// Whether to add an `X_{k+1}` label on each node.
    pub labels: bool,
    /// Label font size.
    pub label_font_size: f64,
}

impl Default for GraphFigureStyle {
    fn default() -> Self {
        Self {
            node_radius: 0.3,
            node_color: palette::BLUE,
            node_fill_opacity: 0.5,
            edge_color: palette::WHITE,
            edge_stroke_width: 2.0,
            labels: true,
            label_font_size: 24.0,
        }
    }
}

/// Produce the drawables of a graph: edge lines first (so they sit under the
/// nodes), then node circles, then labels. Keys are `"{prefix}.edge.{a}-{b}"`,
/// `"{prefix}.node.{k}"`, `"{prefix}.label.{k}"`. Positions come from the
/// layout, offset by `center`.
///
/// Fails with [`GgmError::EmptyInput`] on a node-less graph: there is nothing
/// to draw and downstream group animations would be empty.
pub fn graph_figure(
    prefix: &str,
    graph: &Graph,
    layout: &CircularLayout,
    center: Point,
    style: &GraphFigureStyle,
) -> GgmResult<Vec<(String, Element)>> {
    if graph.node_count() == 0 {
        return Err(GgmError::empty_input("graph figure needs at least one node"));
    }
    if layout.len() != graph.node_count() {
        return Err(GgmError::validation(format!(
            "layout has {} positions for {} nodes",
            layout.len(),
            graph.node_count()
        )));
    }

    let place = |node: usize| {
        // Position checked against node_count above.
        let p = layout.position(node).unwrap_or(Point::ORIGIN);
        Point::new(center.x + p.x, center.y + p.y)
    };

    let mut out = Vec::new();
    for edge in graph.edges() {
        out.push((
            format!("{prefix}.edge.{}-{}", edge.a, edge.b),
            Element::Line(LineElement {
                from: place(edge.a),
                to: place(edge.b),
                color: style.edge_color,
                stroke_width: style.edge_stroke_width,
            }),
        ));
    }
    for node in graph.nodes() {
        out.push((
            format!("{prefix}.node.{node}"),
            Element::Circle(CircleElement {
                at: place(node),
                color: style.node_color,
                radius: style.node_radius,
                fill_opacity: style.node_fill_opacity,
            }),
        ));
    }
    if style.labels {
        for node in graph.nodes() {
            out.push((
                format!("{prefix}.label.{node}"),
                Element::MathTex(MathTexElement {
                    tex: format!("X_{{{}}}", node + 1),
                    at: place(node),
                    color: palette::WHITE,
                    font_size: style.label_font_size,
                }),
            ));
        }
    }
    Ok(out)
}

/// Styling for a rendered numeric matrix figure.
#[derive(Clone, Copy, Debug)]
pub struct MatrixFigureStyle {
    /// Cell pitch in scene units.
    pub cell_size: f64,
    /// Entry font size.
    pub font_size: f64,
    /// Colors per entry class.
    pub palette: MatrixPalette,
    /// Magnitude below which an entry displays as `"0"`.
    pub zero_eps: f64,
}

impl Default for MatrixFigureStyle {
    fn default() -> Self {
        Self {
            cell_size: 0.6,
            font_size: 20.0,
            palette: MatrixPalette::default(),
            zero_eps: style::ZERO_EPS,
        }
    }
}

/// Produce the drawables of a precision matrix: a `Θ =` label plus one
/// formatted, color-coded entry per cell, laid out on a grid centered at
/// `center`. Keys are `"{prefix}.label"` and `"{prefix}.cell.{i}.{j}"`.
///
/// Fails with [`GgmError::EmptyInput`] for a 0×0 matrix.
pub fn matrix_figure(
    prefix: &str,
    matrix: &SquareMatrix,
    center: Point,
    style: &MatrixFigureStyle,
) -> GgmResult<Vec<(String, Element)>> {
    let n = matrix.dim();
    if n == 0 {
        return Err(GgmError::empty_input("matrix figure needs at least one entry"));
    }

    let mut out = Vec::new();
    out.push((
        format!("{prefix}.label"),
        Element::MathTex(MathTexElement {
            tex: r"\Theta = ".to_string(),
            at: Point::new(center.x, center.y + 1.5),
            color: palette::WHITE,
            font_size: 36.0,
        }),
    ));

    let half = (n as f64 - 1.0) / 2.0;
    for i in 0..n {
        for j in 0..n {
            let value = matrix.get(i, j);
            let class = style::classify_cell(value, i, j, style.zero_eps);
            out.push((
                format!("{prefix}.cell.{i}.{j}"),
                Element::MathTex(MathTexElement {
                    tex: style::format_cell(value, style.zero_eps),
                    at: Point::new(
                        center.x + (j as f64 - half) * style.cell_size,
                        center.y + (half - i as f64) * style.cell_size,
                    ),
                    color: style.palette.color_for(class),
                    font_size: style.font_size,
                }),
            ));
        }
    }
    Ok(out)
}

/// Produce the drawables of a schematic precision matrix: one grey square per
/// cell with its `•` / `0` / `×` glyph on top. Keys are
/// `"{prefix}.sq.{i}.{j}"` and `"{prefix}.glyph.{i}.{j}"`.
pub fn schematic_matrix_figure(
    prefix: &str,
    pattern: &SchematicPattern,
    center: Point,
    cell_size: f64,
    font_size: f64,
) -> Vec<(String, Element)> {
    let p = pattern.dim();
    let half = p as f64 / 2.0;
    let mut out = Vec::new();
    for i in 0..p {
        for j in 0..p {
            let at = Point::new(
                center.x + cell_size * (j as f64 - half),
                center.y - cell_size * (i as f64 - half),
            );
            out.push((
                format!("{prefix}.sq.{i}.{j}"),
                Element::Square(SquareElement {
                    at,
                    color: palette::GREY,
                    side: cell_size * 0.85,
                    fill: Some(palette::GREY_DARK),
                    fill_opacity: 0.2,
                }),
            ));
            let cell = pattern.cell(i, j);
            out.push((
                format!("{prefix}.glyph.{i}.{j}"),
                Element::Text(TextElement {
                    content: cell.glyph().to_string(),
                    at,
                    color: cell.color(),
                    font_size,
                }),
            ));
        }
    }
    out
}

/// Produce the drawables of a schematic n×p data table: a grid of grey
/// squares with an `X (n×p)` caption above. Keys are
/// `"{prefix}.cell.{i}.{j}"` and `"{prefix}.caption"`.
pub fn data_matrix_figure(
    prefix: &str,
    rows: usize,
    cols: usize,
    center: Point,
    cell_size: f64,
) -> Vec<(String, Element)> {
    let half_r = rows as f64 / 2.0;
    let half_c = cols as f64 / 2.0;
    let mut out = Vec::new();
    out.push((
        format!("{prefix}.caption"),
        Element::Text(TextElement {
            content: format!("X ({rows}\u{d7}{cols})"),
            at: Point::new(center.x, center.y + cell_size * (half_r + 1.0)),
            color: palette::WHITE,
            font_size: 24.0,
        }),
    ));
    for i in 0..rows {
        for j in 0..cols {
            out.push((
                format!("{prefix}.cell.{i}.{j}"),
                Element::Square(SquareElement {
                    at: Point::new(
                        center.x + cell_size * (j as f64 - half_c),
                        center.y - cell_size * (i as f64 - half_r),
                    ),
                    color: palette::GREY,
                    side: cell_size * 0.85,
                    fill: Some(palette::GREY_DARK),
                    fill_opacity: 0.2,
                }),
            ));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/present/figure.rs"]
mod tests;
