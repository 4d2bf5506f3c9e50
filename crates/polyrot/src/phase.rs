//! Per-run phase offsets added to slider parameters.
//!
//! A host at its default slider state (all zeros) would show the identity
//! rotation, which hides most edges behind each other. Adding a fixed random
//! offset per parameter avoids that. The offsets are drawn once and never
//! change for the lifetime of the value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EngineError;

/// Immutable offsets, one per supported degree of freedom, each in `[0, 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseOffsets {
    values: Vec<f64>,
}

impl PhaseOffsets {
    /// No shift; `apply` returns its input unchanged.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Reproducible offsets for a given seed.
    pub fn seeded(len: usize, seed: u64) -> Self {
        Self::draw(len, &mut StdRng::seed_from_u64(seed))
    }

    /// Fresh offsets from OS entropy.
    pub fn from_entropy(len: usize) -> Self {
        Self::draw(len, &mut StdRng::from_entropy())
    }

    fn draw<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            values: (0..len).map(|_| rng.gen_range(0.0..1.0)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Element-wise `params[i] + offset[i]`.
    ///
    /// Errors with `InvalidParameterCount` if `params` is longer than the
    /// offsets (there is nothing to add to the tail).
    pub fn apply(&self, params: &[f64]) -> Result<Vec<f64>, EngineError> {
        if params.len() > self.values.len() {
            return Err(EngineError::InvalidParameterCount {
                expected: self.values.len(),
                got: params.len(),
            });
        }
        Ok(params
            .iter()
            .zip(&self.values)
            .map(|(p, o)| p + o)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible_and_in_range() {
        let a = PhaseOffsets::seeded(21, 2025);
        let b = PhaseOffsets::seeded(21, 2025);
        assert_eq!(a, b);
        assert_eq!(a.len(), 21);
        assert!(a.values().iter().all(|v| (0.0..1.0).contains(v)));
        assert_ne!(a, PhaseOffsets::seeded(21, 2026));
    }

    #[test]
    fn zeros_leave_params_untouched() {
        let p = [0.25, 0.5, 0.75];
        assert_eq!(PhaseOffsets::zeros(21).apply(&p).unwrap(), p.to_vec());
    }

    #[test]
    fn apply_uses_prefix_of_offsets() {
        let phase = PhaseOffsets::seeded(21, 1);
        let out = phase.apply(&[0.0]).unwrap();
        assert_eq!(out, vec![phase.values()[0]]);
        assert!(phase.apply(&[0.0; 22]).is_err());
    }

    #[test]
    fn entropy_offsets_have_requested_len() {
        assert_eq!(PhaseOffsets::from_entropy(6).len(), 6);
        assert!(PhaseOffsets::zeros(0).is_empty());
    }
}
