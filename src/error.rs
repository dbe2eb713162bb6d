use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::SV;

/// Matrix that failed to invert, see [Error::SingularMatrix]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MatrixKind {
    /// (GᵗG)⁻¹, used to derive the dilution of precision
    DilutionOfPrecision,
    /// (GᵗWG)⁻¹, used by the WLSQ estimator and the protection levels
    Covariance,
}

impl std::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::DilutionOfPrecision => write!(f, "(GᵗG)"),
            Self::Covariance => write!(f, "(GᵗWG)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Error {
    /// Not a single satellite is flagged for the Precision Approach solution.
    #[error("empty geometry: no eligible satellite")]
    EmptyGeometry,

    /// Fewer eligible satellites than required to resolve position and clock.
    #[error("insufficient geometry: {eligible} eligible satellite(s), {required} required")]
    InsufficientGeometry { eligible: usize, required: usize },

    /// Geometry is too weak to provide integrity guarantees.
    #[error("weak geometry: pdop={pdop:.3} exceeds {max_pdop:.3}")]
    WeakGeometry { pdop: f64, max_pdop: f64 },

    /// Degenerate satellite geometry: the matrix cannot be inverted.
    #[error("singular matrix {0}: degenerate geometry")]
    SingularMatrix(MatrixKind),

    /// Iteration budget was exhausted before the correction fell below the threshold.
    #[error("wlsq did not converge after {iterations} iteration(s) (|dx|={norm:.3e})")]
    NonConvergence { iterations: usize, norm: f64 },

    /// UERE standard deviation must be strictly positive and finite.
    #[error("{0}: invalid uere sigma")]
    InvalidUere(SV),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Failed to parse a [crate::prelude::Boundary]
    #[error("unknown boundary (expecting \"inclusive\" or \"exclusive\")")]
    UnknownBoundary,
}
