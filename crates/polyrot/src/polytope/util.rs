//! Small utilities: index pairs, sign patterns and geometric dedup.

use std::cmp::Ordering;

use nalgebra::DVector;

/// All unordered index pairs `(i, j)` with `i < j < n`, lexicographic.
pub(crate) fn index_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// The `mask`-th point of `{lo, hi}^len` in Cartesian-product order.
///
/// The last coordinate varies fastest; bit `len-1-k` of `mask` selects
/// coordinate `k`.
pub(crate) fn sign_pattern(mask: usize, len: usize, lo: f64, hi: f64) -> Vec<f64> {
    (0..len)
        .map(|k| if (mask >> (len - 1 - k)) & 1 == 0 { lo } else { hi })
        .collect()
}

fn lex_cmp(a: &DVector<f64>, b: &DVector<f64>) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.partial_cmp(y).unwrap_or(Ordering::Equal))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Sort lexicographically and drop points within `tol` of their predecessor.
pub(crate) fn dedup_points_in_place(points: &mut Vec<DVector<f64>>, tol: f64) {
    if points.len() < 2 {
        return;
    }
    points.sort_by(lex_cmp);
    points.dedup_by(|a, b| (&*a - &*b).norm() < tol);
}
