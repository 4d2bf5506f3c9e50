//! Tolerances and view configuration.
//!
//! Policy
//! - Tolerances are fixed constants; callers compare against them instead of
//!   inventing local epsilons.
//! - `ViewCfg` carries the host's rendering constants. The geometry functions
//!   never read it; only `view` and the CLI do.

use crate::error::EngineError;
use crate::rotation::degrees_of_freedom;

/// Smallest dimension the geometry functions accept.
pub const MIN_DIMENSION: usize = 2;

/// Tolerance for `MᵗM ≈ I` (max-abs metric).
pub const ORTHO_EPS: f64 = 1e-9;
/// Tolerance for unit edge lengths of generated simplices.
pub const DIST_EPS: f64 = 1e-6;
/// Largest accepted `ViewCfg::unit_length` (pixels per model unit).
pub const MAX_UNIT_LENGTH: f64 = 1e6;
/// Points closer than this are treated as the same vertex.
pub(crate) const DEDUP_EPS: f64 = 1e-12;

/// Canvas and dimension-range settings of a host view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewCfg {
    pub width: u32,
    pub height: u32,
    /// Screen pixels per unit of model length.
    pub unit_length: f64,
    pub min_dimension: usize,
    pub max_dimension: usize,
    pub start_dimension: usize,
}

impl Default for ViewCfg {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            unit_length: 70.0,
            min_dimension: 2,
            max_dimension: 7,
            start_dimension: 3,
        }
    }
}

impl ViewCfg {
    /// Screen centre `(width / 2, height / 2)` with integer division.
    #[inline]
    pub fn centre(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Number of sliders a host needs: dof of the largest dimension.
    #[inline]
    pub fn max_dof(&self) -> usize {
        degrees_of_freedom(self.max_dimension)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_dimension < MIN_DIMENSION {
            return Err(EngineError::config(format!(
                "min_dimension must be >= {MIN_DIMENSION}"
            )));
        }
        if self.min_dimension > self.max_dimension {
            return Err(EngineError::config("min_dimension <= max_dimension required"));
        }
        if !(self.min_dimension..=self.max_dimension).contains(&self.start_dimension) {
            return Err(EngineError::config(
                "start_dimension must lie in [min_dimension, max_dimension]",
            ));
        }
        if !(self.unit_length > 0.0 && self.unit_length <= MAX_UNIT_LENGTH) {
            return Err(EngineError::config(format!(
                "unit_length must lie in (0, {MAX_UNIT_LENGTH}]"
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::config("canvas must be non-empty"));
        }
        Ok(())
    }
}
