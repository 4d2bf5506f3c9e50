//! Edge, polytope and shape-kind types.

use std::fmt;
use std::str::FromStr;

use nalgebra::DVector;

use super::util::dedup_points_in_place;
use crate::cfg::DEDUP_EPS;

/// Unordered pair of distinct vertices of the same polytope.
///
/// Equality ignores orientation: `{a, b} == {b, a}`.
#[derive(Clone, Debug)]
pub struct Edge {
    pub a: DVector<f64>,
    pub b: DVector<f64>,
}

impl Edge {
    #[inline]
    pub fn new(a: DVector<f64>, b: DVector<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (&self.a - &self.b).norm()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// The three supported families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Cube,
    Cross,
    Simplex,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cube, ShapeKind::Cross, ShapeKind::Simplex];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cross => "cross",
            ShapeKind::Simplex => "simplex",
        }
    }

    /// Closed-form edge count for dimension `d`.
    pub fn expected_edges(self, dimension: usize) -> usize {
        let d = dimension;
        match self {
            ShapeKind::Cube => d << d.saturating_sub(1),
            ShapeKind::Cross => 2 * d * d.saturating_sub(1),
            ShapeKind::Simplex => (d + 1) * d / 2,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown shape name passed to `ShapeKind::from_str`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseShapeKindError(pub String);

impl fmt::Display for ParseShapeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown shape `{}` (expected cube, cross or simplex)",
            self.0
        )
    }
}

impl std::error::Error for ParseShapeKindError {}

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" | "hypercube" => Ok(ShapeKind::Cube),
            "cross" | "orthoplex" | "cross-polytope" => Ok(ShapeKind::Cross),
            "simplex" => Ok(ShapeKind::Simplex),
            _ => Err(ParseShapeKindError(s.to_string())),
        }
    }
}

/// Wireframe of one polytope in a fixed dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Polytope {
    pub dimension: usize,
    pub kind: ShapeKind,
    pub edges: Vec<Edge>,
}

impl Polytope {
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Distinct edge endpoints, sorted lexicographically.
    pub fn vertices(&self) -> Vec<DVector<f64>> {
        let mut points: Vec<DVector<f64>> = self
            .edges
            .iter()
            .flat_map(|e| [e.a.clone(), e.b.clone()])
            .collect();
        dedup_points_in_place(&mut points, DEDUP_EPS);
        points
    }
}
