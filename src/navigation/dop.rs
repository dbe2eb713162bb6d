use nalgebra::Matrix4;

use crate::{error::MatrixKind, navigation::checked_inverse, prelude::Error};

use super::Geometry;

/// [Geometry] [DilutionOfPrecision]. Since the G matrix is
/// expressed in the local (East, North, Up) frame, no rotation is needed.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DilutionOfPrecision {
    /// Geometric DOP
    pub gdop: f64,

    /// Horizontal DOP
    pub hdop: f64,

    /// Vertical DOP
    pub vdop: f64,

    /// Position DOP
    pub pdop: f64,

    /// Temporal DOP
    pub tdop: f64,
}

impl DilutionOfPrecision {
    /// Creates new [DilutionOfPrecision] from Q = (Gᵗ.G)⁻¹.
    pub(crate) fn from_q(q: &Matrix4<f64>) -> Self {
        Self {
            gdop: q.trace().sqrt(),
            hdop: (q[(0, 0)] + q[(1, 1)]).sqrt(),
            vdop: q[(2, 2)].sqrt(),
            pdop: (q[(0, 0)] + q[(1, 1)] + q[(2, 2)]).sqrt(),
            tdop: q[(3, 3)].sqrt(),
        }
    }

    /// Creates new [DilutionOfPrecision] from [Geometry].
    pub(crate) fn new(geometry: &Geometry) -> Result<Self, Error> {
        let q = checked_inverse(geometry.gt_g(), MatrixKind::DilutionOfPrecision)?;
        Ok(Self::from_q(&q))
    }
}
