//! Error type shared by the engine and its host-side configuration.

use std::fmt;

/// Contract violations reported by engine calls.
///
/// `InvalidDimension` and `InvalidParameterCount` are the only kinds raised by
/// the geometry functions. `InvalidConfig` and `NonFiniteParameter` are
/// reserved for host state (`ViewCfg::validate`, `Viewer::set_parameters`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    InvalidDimension { dimension: usize, min: usize },
    InvalidParameterCount { expected: usize, got: usize },
    InvalidConfig { reason: String },
    NonFiniteParameter { index: usize },
}

impl EngineError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { dimension, min } => {
                write!(f, "invalid dimension {dimension}: must be >= {min}")
            }
            Self::InvalidParameterCount { expected, got } => {
                write!(f, "invalid parameter count: expected {expected}, got {got}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid view config: {reason}"),
            Self::NonFiniteParameter { index } => {
                write!(f, "parameter {index} is not a finite number")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Reject dimensions below the engine minimum.
#[inline]
pub(crate) fn check_dimension(dimension: usize) -> Result<(), EngineError> {
    if dimension < crate::cfg::MIN_DIMENSION {
        return Err(EngineError::InvalidDimension {
            dimension,
            min: crate::cfg::MIN_DIMENSION,
        });
    }
    Ok(())
}
