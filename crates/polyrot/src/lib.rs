//! N-dimensional rotation and wireframe projection of regular polytopes.
//!
//! The engine is a chain of pure functions:
//! parameters → rotation matrix (`rotation`) → polytope edges (`polytope`)
//! → 2D segments (`project`). `view` wraps the chain with the small amount of
//! state a host keeps between redraws (current dimension, shape, sliders and a
//! polytope cache).
//!
//! Conventions
//! - Dimensions are `usize`; the engine accepts any `d >= 2`.
//! - Parameters are fractions of a full turn (`angle = p · 2π`).
//! - Matrices and vertices are `nalgebra` dynamic types (`DMatrix<f64>`,
//!   `DVector<f64>`).

pub mod api;
pub mod cfg;
pub mod error;
pub mod phase;
pub mod polytope;
pub mod project;
pub mod rotation;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::EngineError;
pub use nalgebra::{DMatrix, DVector, Vector2 as Vec2};

/// Common exports for quick imports in hosts.
pub mod prelude {
    pub use crate::cfg::ViewCfg;
    pub use crate::error::EngineError;
    pub use crate::phase::PhaseOffsets;
    pub use crate::polytope::{generate_polytope, Edge, Polytope, ShapeKind};
    pub use crate::project::{project, project_edge, ScreenMap, ScreenSegment, Segment2};
    pub use crate::rotation::{degrees_of_freedom, rotation_matrix, rotation_matrix_with_phase};
    pub use crate::view::{Frame, Viewer};
    pub use nalgebra::{DMatrix, DVector, Vector2 as Vec2};
}
