//! Orthographic projection of rotated edges onto the first two axes.
//!
//! The pure output is a pair of real 2D points per edge. Turning those into
//! pixels is a separate affine step (`ScreenMap`) owned by the host.

use nalgebra::{DMatrix, DVector, Vector2};

use crate::cfg::ViewCfg;
use crate::polytope::Edge;

/// Projected edge in model units (before centring and scaling).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

/// Rotate `v` and keep coordinates 0 and 1.
#[inline]
fn project_point(m: &DMatrix<f64>, v: &DVector<f64>) -> Vector2<f64> {
    let r = m * v;
    Vector2::new(r[0], r[1])
}

/// Pre: `m` is `d×d` and both endpoints of `edge` have length `d >= 2`.
pub fn project_edge(m: &DMatrix<f64>, edge: &Edge) -> Segment2 {
    debug_assert_eq!(m.ncols(), edge.a.len());
    Segment2 {
        a: project_point(m, &edge.a),
        b: project_point(m, &edge.b),
    }
}

/// Project every edge, preserving order.
pub fn project(m: &DMatrix<f64>, edges: &[Edge]) -> Vec<Segment2> {
    edges.iter().map(|e| project_edge(m, e)).collect()
}

/// Pixel-space segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Affine map from model units to integer pixels.
///
/// `screen = centre + trunc(p · unit_length)`. Truncation is toward zero, not
/// rounding, so points just left of the centre land on the centre column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMap {
    pub centre_x: i32,
    pub centre_y: i32,
    pub unit_length: f64,
}

impl ScreenMap {
    pub fn from_cfg(cfg: &ViewCfg) -> Self {
        let (centre_x, centre_y) = cfg.centre();
        Self {
            centre_x,
            centre_y,
            unit_length: cfg.unit_length,
        }
    }

    #[inline]
    pub fn to_screen(&self, p: Vector2<f64>) -> (i32, i32) {
        // `as` truncates toward zero and saturates; the sum saturates too.
        (
            self.centre_x.saturating_add((p.x * self.unit_length) as i32),
            self.centre_y.saturating_add((p.y * self.unit_length) as i32),
        )
    }

    pub fn segment(&self, s: &Segment2) -> ScreenSegment {
        let (x1, y1) = self.to_screen(s.a);
        let (x2, y2) = self.to_screen(s.b);
        ScreenSegment { x1, y1, x2, y2 }
    }
}

impl Default for ScreenMap {
    fn default() -> Self {
        Self::from_cfg(&ViewCfg::default())
    }
}
