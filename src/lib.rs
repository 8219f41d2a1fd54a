//! ggm-viz scripts the animation scenes of a video explaining Gaussian
//! graphical models: how the zero pattern of a precision matrix is a graph,
//! why exhaustive model search and plain maximum likelihood fail in high
//! dimension, and how the Lasso-based neighborhood selection of Meinshausen
//! and Bühlmann (and the graphical lasso after it) fix that.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `SquareMatrix -> Graph` ([`build_graph`]) and
//!    `Graph -> CircularLayout` ([`circular_layout`])
//! 2. **Present**: graphs, formatted matrices, and schematic grids become
//!    keyed drawable [`Element`]s (`present::figure`)
//! 3. **Script**: elements plus timed play/wait steps form a [`SceneScript`]
//!    (built via [`SceneBuilder`], validated, serializable)
//! 4. **Render** (external): any engine consumes the script through the
//!    [`SceneRenderer`] seam; this crate only validates and exports
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: scene construction is pure; the only
//!   randomness is an explicitly seeded generator.
//! - **No rasterization**: pixels, typesetting, and encoding belong to the
//!   consuming animation engine, never to this crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod graph;
mod present;
mod scene;

/// The scene catalog of the video.
pub mod scenes;

pub use foundation::core::{Point, Rgba8, Vec2, palette};
pub use foundation::error::{GgmError, GgmResult};
pub use foundation::math::Rng64;

pub use graph::build::{
    CombineRule, DEFAULT_EDGE_THRESHOLD, Edge, Graph, build_graph, build_graph_combined,
};
pub use graph::layout::{CircularLayout, circular_layout};
pub use graph::matrix::SquareMatrix;

pub use present::figure::{
    GraphFigureStyle, MatrixFigureStyle, data_matrix_figure, graph_figure, matrix_figure,
    schematic_matrix_figure,
};
pub use present::schematic::{SchematicCell, SchematicPattern, synthetic_edge_pairs};
pub use present::style::{CellClass, MatrixPalette, ZERO_EPS, classify_cell, format_cell};

pub use scene::builder::{
    SceneBuilder, create, fade_in, fade_out, grow_arrow, move_to, recolor, scale, shift, unwrite,
    write,
};
pub use scene::ease::Ease;
pub use scene::model::{
    AnimKind, Animation, ArrowElement, CircleElement, DotElement, Element, EllipseElement,
    GroupElement, LineElement, MathTexElement, PolygonElement, RectElement, SceneScript,
    SquareElement, Step, TextElement,
};
pub use scene::render::{JsonDump, NullRenderer, SceneRenderer};
pub use scene::timeline::{StepSpan, step_spans, total_duration_sec, visible_at};
