//! The scene catalog of the video, one constructor per scene.
//!
//! Scenes are pure: each constructor builds and validates a fresh
//! [`SceneScript`](crate::SceneScript) with no shared state, so the registry
//! can be walked in any order.

/// Wrap-up and credits.
pub mod conclusion;
/// Exhaustive search and maximum likelihood.
pub mod estimation;
/// Precision matrix vs. graph, and the graphical-lasso objective.
pub mod ggm;
/// Assumption cards.
pub mod hypotheses;
/// Opening scene.
pub mod intro;
/// Lasso penalty and its geometry.
pub mod lasso;

use crate::{
    foundation::error::{GgmError, GgmResult},
    scene::model::SceneScript,
};

/// A scene constructor paired with its registry name.
pub type SceneEntry = (&'static str, fn() -> GgmResult<SceneScript>);

/// All scenes in video order.
pub fn all_scenes() -> Vec<SceneEntry> {
    vec![
        ("intro", intro::intro_scene as fn() -> GgmResult<SceneScript>),
        ("estimation", estimation::estimation_scene),
        ("lasso", lasso::lasso_scene),
        ("hypotheses", hypotheses::hypotheses_scene),
        ("conclusion", conclusion::conclusion_scene),
        ("gaussian-graph", ggm::gaussian_graph_scene),
        ("graphical-lasso", ggm::graphical_lasso_scene),
    ]
}

/// Build one scene by registry name.
pub fn build_scene(name: &str) -> GgmResult<SceneScript> {
    for (entry_name, build) in all_scenes() {
        if entry_name == name {
            return build();
        }
    }
    let known: Vec<&str> = all_scenes().iter().map(|(n, _)| *n).collect();
    Err(GgmError::validation(format!(
        "unknown scene '{name}', expected one of: {}",
        known.join(", ")
    )))
}
