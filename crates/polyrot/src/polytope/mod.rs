//! Regular polytope wireframes in arbitrary dimension.
//!
//! Purpose
//! - Produce the exact 1-skeleton (edge set) of three families for any
//!   `d >= 2`: hypercube, cross-polytope and regular simplex.
//!
//! Conventions
//! - Edges carry their endpoints by value; there is no shared vertex table.
//!   A `Polytope` is immutable once generated and is rebuilt whenever the
//!   dimension or shape changes.
//! - Generation is deterministic: two calls with the same inputs return
//!   identical edges in identical order.

mod special;
mod types;
mod util;

pub use special::{cross_edges, cross_vertices, cube_edges, simplex_edges, simplex_vertices};
pub use types::{Edge, ParseShapeKindError, Polytope, ShapeKind};

use crate::error::EngineError;

/// Generate the wireframe for `kind` in dimension `d`.
///
/// Errors with `InvalidDimension` if `d < 2`.
pub fn generate_polytope(dimension: usize, kind: ShapeKind) -> Result<Polytope, EngineError> {
    let edges = match kind {
        ShapeKind::Cube => cube_edges(dimension)?,
        ShapeKind::Cross => cross_edges(dimension)?,
        ShapeKind::Simplex => simplex_edges(dimension)?,
    };
    Ok(Polytope {
        dimension,
        kind,
        edges,
    })
}

#[cfg(test)]
mod tests;
