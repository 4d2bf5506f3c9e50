//! Host-side view state: dimension, shape, sliders and a polytope cache.
//!
//! Every `frame()` runs the whole pipeline (matrix → polytope → projection →
//! pixels). Only the polytope is cached, keyed by `(dimension, shape)`, since
//! it does not depend on the sliders.

use nalgebra::DMatrix;

use crate::cfg::ViewCfg;
use crate::error::EngineError;
use crate::phase::PhaseOffsets;
use crate::polytope::{generate_polytope, Polytope, ShapeKind};
use crate::project::{project, ScreenMap, ScreenSegment, Segment2};
use crate::rotation::{degrees_of_freedom, rotation_matrix_with_phase};

/// Output of one redraw.
#[derive(Clone, Debug)]
pub struct Frame {
    pub dimension: usize,
    pub shape: ShapeKind,
    pub matrix: DMatrix<f64>,
    pub segments: Vec<Segment2>,
    pub screen: Vec<ScreenSegment>,
}

#[derive(Clone, Debug)]
pub struct Viewer {
    cfg: ViewCfg,
    phase: PhaseOffsets,
    dimension: usize,
    shape: ShapeKind,
    /// One slider per degree of freedom of `cfg.max_dimension`.
    sliders: Vec<f64>,
    cache: Option<Polytope>,
}

impl Viewer {
    /// Errors with `InvalidConfig` if `cfg` is inconsistent or `phase` is
    /// shorter than the slider bank.
    pub fn new(cfg: ViewCfg, phase: PhaseOffsets) -> Result<Self, EngineError> {
        cfg.validate()?;
        let max_dof = cfg.max_dof();
        if phase.len() < max_dof {
            return Err(EngineError::config(format!(
                "phase offsets cover {} parameters, need {max_dof}",
                phase.len()
            )));
        }
        Ok(Self {
            dimension: cfg.start_dimension,
            shape: ShapeKind::default(),
            sliders: vec![0.0; max_dof],
            cache: None,
            cfg,
            phase,
        })
    }

    #[inline]
    pub fn cfg(&self) -> &ViewCfg {
        &self.cfg
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Number of sliders in use for the current dimension.
    #[inline]
    pub fn active_parameters(&self) -> usize {
        degrees_of_freedom(self.dimension)
    }

    /// Slider values for the current dimension.
    pub fn parameters(&self) -> &[f64] {
        &self.sliders[..self.active_parameters()]
    }

    /// Switch dimension; requests outside the configured range are ignored.
    ///
    /// Slider values are kept, so returning to a dimension restores its view.
    pub fn set_dimension(&mut self, dimension: usize) -> bool {
        if !(self.cfg.min_dimension..=self.cfg.max_dimension).contains(&dimension) {
            return false;
        }
        if dimension != self.dimension {
            self.dimension = dimension;
            self.cache = None;
        }
        true
    }

    /// `+`/`-` buttons.
    pub fn step_dimension(&mut self, delta: isize) -> bool {
        match self.dimension.checked_add_signed(delta) {
            Some(d) => self.set_dimension(d),
            None => false,
        }
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        if shape != self.shape {
            self.shape = shape;
            self.cache = None;
        }
    }

    /// Set slider `index` (clamped to `[0, 1]`). Inactive sliders are refused.
    pub fn set_parameter(&mut self, index: usize, value: f64) -> bool {
        if index >= self.active_parameters() || !value.is_finite() {
            return false;
        }
        self.sliders[index] = value.clamp(0.0, 1.0);
        true
    }

    /// Set all active parameters at once, unclamped (angles wrap).
    ///
    /// Nothing is written unless every value is finite and the count matches.
    pub fn set_parameters(&mut self, values: &[f64]) -> Result<(), EngineError> {
        let expected = self.active_parameters();
        if values.len() != expected {
            return Err(EngineError::InvalidParameterCount {
                expected,
                got: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(EngineError::NonFiniteParameter { index });
        }
        self.sliders[..expected].copy_from_slice(values);
        Ok(())
    }

    /// Cached polytope for the current `(dimension, shape)`.
    pub fn polytope(&mut self) -> Result<&Polytope, EngineError> {
        let polytope = match self.cache.take() {
            Some(p) if p.dimension == self.dimension && p.kind == self.shape => p,
            _ => generate_polytope(self.dimension, self.shape)?,
        };
        Ok(&*self.cache.insert(polytope))
    }

    /// Rotate, project and map the current polytope to pixels.
    pub fn frame(&mut self) -> Result<Frame, EngineError> {
        let dimension = self.dimension;
        let shape = self.shape;
        let matrix = rotation_matrix_with_phase(dimension, self.parameters(), &self.phase)?;
        let map = ScreenMap::from_cfg(&self.cfg);
        let segments = project(&matrix, &self.polytope()?.edges);
        let screen = segments.iter().map(|s| map.segment(s)).collect();
        Ok(Frame {
            dimension,
            shape,
            matrix,
            segments,
            screen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::ORTHO_EPS;
    use crate::rotation::is_orthogonal;
    use nalgebra::vector;

    fn viewer() -> Viewer {
        let cfg = ViewCfg::default();
        let max_dof = cfg.max_dof();
        Viewer::new(cfg, PhaseOffsets::zeros(max_dof)).unwrap()
    }

    #[test]
    fn default_cube_frame_is_axis_aligned() {
        let mut v = viewer();
        assert_eq!(v.dimension(), 3);
        assert_eq!(v.shape(), ShapeKind::Cube);
        let f = v.frame().unwrap();
        assert_eq!(f.segments.len(), 12);
        assert_eq!(f.matrix, DMatrix::<f64>::identity(3, 3));
        for s in &f.segments {
            for p in [s.a, s.b] {
                assert_eq!(p.x.abs(), 0.5);
                assert_eq!(p.y.abs(), 0.5);
            }
        }
        assert_eq!(f.segments[0].a, vector![-0.5, -0.5]);
        assert_eq!(
            f.screen[0],
            ScreenSegment {
                x1: 365,
                y1: 265,
                x2: 435,
                y2: 265
            }
        );
    }

    #[test]
    fn dimension_range_is_enforced() {
        let mut v = viewer();
        assert!(!v.set_dimension(1));
        assert!(!v.set_dimension(8));
        assert_eq!(v.dimension(), 3);
        assert!(v.step_dimension(-1));
        assert!(!v.step_dimension(-1));
        assert_eq!(v.dimension(), 2);
        assert_eq!(v.active_parameters(), 1);
        assert!(v.set_dimension(7));
        assert!(!v.step_dimension(1));
        assert_eq!(v.active_parameters(), 21);
    }

    #[test]
    fn inactive_sliders_are_refused() {
        let mut v = viewer();
        assert!(v.set_parameter(2, 0.3));
        assert!(!v.set_parameter(3, 0.3));
        assert!(v.set_parameter(0, 4.0));
        assert_eq!(v.parameters(), &[1.0, 0.0, 0.3]);
        assert!(!v.set_parameter(1, f64::NAN));
        assert!(v.set_parameters(&[0.1, 0.2]).is_err());
    }

    #[test]
    fn bulk_parameters_pass_through_unclamped() {
        let mut v = viewer();
        let params = [0.1, 0.2, -0.3];
        v.set_parameters(&params).unwrap();
        assert_eq!(v.parameters(), &params);
        let f = v.frame().unwrap();
        assert_eq!(f.matrix, crate::rotation::rotation_matrix(3, &params).unwrap());
    }

    #[test]
    fn bulk_parameters_reject_non_finite() {
        let mut v = viewer();
        v.set_parameters(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(
            v.set_parameters(&[0.5, f64::NAN, 0.5]),
            Err(EngineError::NonFiniteParameter { index: 1 })
        );
        assert!(v.set_parameters(&[f64::INFINITY, 0.0, 0.0]).is_err());
        assert_eq!(v.parameters(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn cache_tracks_shape_and_dimension() {
        let mut v = viewer();
        assert_eq!(v.polytope().unwrap().edge_count(), 12);
        v.set_shape(ShapeKind::Simplex);
        assert_eq!(v.polytope().unwrap().edge_count(), 6);
        v.set_dimension(4);
        assert_eq!(v.polytope().unwrap().edge_count(), 10);
        v.set_shape(ShapeKind::Cross);
        let cached = v.polytope().unwrap().clone();
        assert_eq!(cached.edge_count(), 24);
        assert_eq!(cached, generate_polytope(4, ShapeKind::Cross).unwrap());
    }

    #[test]
    fn sliders_only_change_rotation() {
        let mut v = viewer();
        v.set_dimension(5);
        v.set_parameters(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.05])
            .unwrap();
        let f1 = v.frame().unwrap();
        assert!(is_orthogonal(&f1.matrix, ORTHO_EPS));
        assert!(v.set_parameter(0, 0.6));
        let f2 = v.frame().unwrap();
        assert_eq!(f1.segments.len(), f2.segments.len());
        assert_ne!(f1.matrix, f2.matrix);
    }

    #[test]
    fn phase_offsets_move_default_view() {
        let cfg = ViewCfg::default();
        let max_dof = cfg.max_dof();
        let mut v = Viewer::new(cfg, PhaseOffsets::seeded(max_dof, 3)).unwrap();
        let f = v.frame().unwrap();
        assert_ne!(f.matrix, DMatrix::<f64>::identity(3, 3));
        assert!(is_orthogonal(&f.matrix, ORTHO_EPS));
    }

    #[test]
    fn short_phase_is_rejected() {
        let err = Viewer::new(ViewCfg::default(), PhaseOffsets::zeros(3)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }
}
