//! Rotation matrices in arbitrary dimension from a vector of plane angles.
//!
//! Purpose
//! - Map a parameter vector of length `dof(d) = d(d-1)/2` onto SO(d) by
//!   composing elementary (Givens) rotations in a fixed plane order.
//!
//! Convention
//! - Planes are adjacent axis pairs `(axis-1, axis)`, enumerated by
//!   `for step in 1..d { for axis in (1..=step).rev() { .. } }`.
//! - Each parameter `p` is a fraction of a full turn: `θ = 2π·p`.
//! - Composition premultiplies: `R ← E · R`, starting from the identity. The
//!   order is part of the contract; it is not commutative for `d >= 3`.
//! - The map is onto SO(d) but not injective at boundary angles.

use std::f64::consts::TAU;

use nalgebra::DMatrix;

use crate::error::{check_dimension, EngineError};
use crate::phase::PhaseOffsets;

/// Number of independent rotation planes in dimension `d`.
#[inline]
pub fn degrees_of_freedom(dimension: usize) -> usize {
    dimension * dimension.saturating_sub(1) / 2
}

/// Rotation planes in the order parameters are consumed.
///
/// Yields exactly `degrees_of_freedom(d)` pairs `(i, i+1)`.
pub fn rotation_planes(dimension: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..dimension).flat_map(|step| (1..=step).rev().map(|axis| (axis - 1, axis)))
}

/// Elementary rotation by `theta` in the `(i, j)` plane.
///
/// Identity except `E[i][i] = cos`, `E[j][i] = sin`, `E[i][j] = -sin`,
/// `E[j][j] = cos`.
///
/// Pre: `i != j` and both are `< dimension`.
pub fn givens(dimension: usize, i: usize, j: usize, theta: f64) -> DMatrix<f64> {
    let (s, c) = theta.sin_cos();
    let mut e = DMatrix::identity(dimension, dimension);
    e[(i, i)] = c;
    e[(j, i)] = s;
    e[(i, j)] = -s;
    e[(j, j)] = c;
    e
}

/// Build the `d×d` rotation for `params` (one fraction of a turn per plane).
///
/// Errors
/// - `InvalidDimension` if `d < 2`.
/// - `InvalidParameterCount` if `params.len() != degrees_of_freedom(d)`.
pub fn rotation_matrix(dimension: usize, params: &[f64]) -> Result<DMatrix<f64>, EngineError> {
    check_dimension(dimension)?;
    let expected = degrees_of_freedom(dimension);
    if params.len() != expected {
        return Err(EngineError::InvalidParameterCount {
            expected,
            got: params.len(),
        });
    }
    let mut angles = params.iter().map(|p| p * TAU);
    let mut result = DMatrix::identity(dimension, dimension);
    for (i, j) in rotation_planes(dimension) {
        // Lengths were checked above, so the cursor never runs dry.
        let theta = angles.next().unwrap_or(0.0);
        result = givens(dimension, i, j, theta) * result;
    }
    Ok(result)
}

/// Same as `rotation_matrix`, after adding the per-run phase offsets.
pub fn rotation_matrix_with_phase(
    dimension: usize,
    params: &[f64],
    phase: &PhaseOffsets,
) -> Result<DMatrix<f64>, EngineError> {
    check_dimension(dimension)?;
    let shifted = phase.apply(params)?;
    rotation_matrix(dimension, &shifted)
}

/// Check `MᵗM ≈ I` (max-abs metric).
pub fn is_orthogonal(m: &DMatrix<f64>, eps: f64) -> bool {
    if !m.is_square() {
        return false;
    }
    let n = m.nrows();
    (m.transpose() * m - DMatrix::<f64>::identity(n, n)).amax() < eps
}
