//! Curated surface for hosts.
//!
//! The three engine operations plus the types they exchange. Hosts that keep
//! redraw state can use `Viewer` instead of wiring these by hand.

pub use crate::cfg::ViewCfg;
pub use crate::error::EngineError;
pub use crate::phase::PhaseOffsets;
pub use crate::polytope::{Edge, Polytope, ShapeKind};
pub use crate::project::{ScreenMap, ScreenSegment, Segment2};
pub use crate::rotation::degrees_of_freedom;
pub use crate::view::{Frame, Viewer};

use nalgebra::DMatrix;

/// d×d rotation for one fraction of a turn per plane.
pub fn build_rotation(dimension: usize, params: &[f64]) -> Result<DMatrix<f64>, EngineError> {
    crate::rotation::rotation_matrix(dimension, params)
}

/// Wireframe of `kind` in dimension `d`.
pub fn generate_polytope(dimension: usize, kind: ShapeKind) -> Result<Polytope, EngineError> {
    crate::polytope::generate_polytope(dimension, kind)
}

/// Pre-affine 2D segments, one per edge.
pub fn project(m: &DMatrix<f64>, edges: &[Edge]) -> Vec<Segment2> {
    crate::project::project(m, edges)
}
