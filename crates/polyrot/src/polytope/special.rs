//! Generators for the three regular families.
//!
//! References
//! - Hypercube `[-1/2, 1/2]^d`: `d·2^(d-1)` edges.
//! - Cross-polytope `conv{±e_i}`: `2d(d-1)` edges (all pairs but antipodes).
//! - Regular simplex with unit edges: `d+1` vertices, complete graph,
//!   circumradius `sqrt(d / (2(d+1)))`.

use nalgebra::DVector;

use super::types::Edge;
use super::util::{index_pairs, sign_pattern};
use crate::error::{check_dimension, EngineError};

const HALF: f64 = 0.5;

/// Edges of the unit hypercube centred at the origin.
///
/// For every axis `direction` and every assignment of the other `d-1`
/// coordinates to `±1/2`, connect the two vertices that differ only along
/// `direction`. No vertex list is built.
pub fn cube_edges(dimension: usize) -> Result<Vec<Edge>, EngineError> {
    check_dimension(dimension)?;
    let rest = dimension - 1;
    let mut edges = Vec::with_capacity(dimension << rest);
    for direction in 0..dimension {
        for mask in 0..(1usize << rest) {
            let pre = sign_pattern(mask, rest, -HALF, HALF);
            let endpoint = |x: f64| {
                DVector::from_iterator(
                    dimension,
                    pre[..direction]
                        .iter()
                        .copied()
                        .chain(std::iter::once(x))
                        .chain(pre[direction..].iter().copied()),
                )
            };
            edges.push(Edge::new(endpoint(-HALF), endpoint(HALF)));
        }
    }
    Ok(edges)
}

/// The `2d` vertices `±e_i`, ordered `+e_0, -e_0, +e_1, -e_1, ...`.
pub fn cross_vertices(dimension: usize) -> Result<Vec<DVector<f64>>, EngineError> {
    check_dimension(dimension)?;
    let mut vertices = Vec::with_capacity(2 * dimension);
    for axis in 0..dimension {
        for sign in [1.0, -1.0] {
            let mut v = DVector::zeros(dimension);
            v[axis] = sign;
            vertices.push(v);
        }
    }
    Ok(vertices)
}

/// All vertex pairs of the cross-polytope except the `d` antipodal ones.
pub fn cross_edges(dimension: usize) -> Result<Vec<Edge>, EngineError> {
    let vertices = cross_vertices(dimension)?;
    Ok(index_pairs(vertices.len())
        .filter(|&(i, j)| vertices[i] != -&vertices[j])
        .map(|(i, j)| Edge::new(vertices[i].clone(), vertices[j].clone()))
        .collect())
}

/// Vertices of a regular simplex with unit edge length, centred at the origin.
///
/// A single working vector starts at `e_0`; step `i` reflects and shrinks
/// coordinate `i` (`v[i] ← -v[i] / (d - i)`) and lifts coordinate `i+1` so
/// the vector stays on the unit sphere. Each state is a vertex, giving `d+1`
/// points on the unit sphere with common edge length `sqrt(2(d+1)/d)`. The
/// snapshots are then scaled by the inverse of that length.
pub fn simplex_vertices(dimension: usize) -> Result<Vec<DVector<f64>>, EngineError> {
    check_dimension(dimension)?;
    let d = dimension;
    let mut v = DVector::zeros(d);
    v[0] = 1.0;
    let mut vertices = Vec::with_capacity(d + 1);
    vertices.push(v.clone());
    let mut sum_sq = 0.0;
    for i in 0..d {
        v[i] = -v[i] / (d - i) as f64;
        sum_sq += v[i] * v[i];
        if i + 1 < d {
            v[i + 1] = (1.0 - sum_sq).sqrt();
        }
        vertices.push(v.clone());
    }
    let scale = (d as f64 / (2.0 * (d + 1) as f64)).sqrt();
    for vertex in &mut vertices {
        *vertex *= scale;
    }
    Ok(vertices)
}

/// Complete graph on the simplex vertices: `C(d+1, 2)` edges.
pub fn simplex_edges(dimension: usize) -> Result<Vec<Edge>, EngineError> {
    let vertices = simplex_vertices(dimension)?;
    Ok(index_pairs(vertices.len())
        .map(|(i, j)| Edge::new(vertices[i].clone(), vertices[j].clone()))
        .collect())
}
