use itertools::Itertools;
use log::debug;

use nalgebra::{DMatrix, DVector, Dyn, Matrix4, MatrixXx4, OMatrix, RowVector4, U4};

mod dop;
mod protection;
mod state;
mod sv;
mod wlsq;

pub mod solutions;

pub use dop::DilutionOfPrecision;
pub use protection::ProtectionLevels;
pub use solutions::{PositionSolution, SolutionStatus};
pub use sv::SVContribution;
pub use wlsq::LsqStatus;

pub(crate) use state::State;
pub(crate) use wlsq::Wlsq;

use crate::{
    constants::MIN_RECIPROCAL_CONDITION,
    error::MatrixKind,
    prelude::{Error, SatelliteCorrection},
};

/// Line of sight partial derivatives of the pseudo range, with respect to
/// East, North and Up offsets and the receiver clock bias.
/// Angles are expressed in degrees.
pub(crate) fn geometry_row(elevation_deg: f64, azimuth_deg: f64) -> RowVector4<f64> {
    let (elev_rad, azim_rad) = (elevation_deg.to_radians(), azimuth_deg.to_radians());
    RowVector4::new(
        -elev_rad.cos() * azim_rad.sin(),
        -elev_rad.cos() * azim_rad.cos(),
        -elev_rad.sin(),
        1.0,
    )
}

/// Inverts a 4x4 matrix, rejecting singular or ill-conditioned matrices.
pub(crate) fn checked_inverse(mat: Matrix4<f64>, kind: MatrixKind) -> Result<Matrix4<f64>, Error> {
    if mat.iter().any(|v| !v.is_finite()) {
        return Err(Error::SingularMatrix(kind));
    }

    let singular = mat.singular_values();
    let (max, min) = (singular.max(), singular.min());

    if !(max > 0.0) || min / max < MIN_RECIPROCAL_CONDITION {
        return Err(Error::SingularMatrix(kind));
    }

    let inv = mat.try_inverse().ok_or(Error::SingularMatrix(kind))?;

    if inv.iter().any(|v| !v.is_finite()) {
        return Err(Error::SingularMatrix(kind));
    }

    Ok(inv)
}

/// Epoch-wise navigation [Geometry]: stacked line of sight rows (G)
/// and inverse variance weights (W) of every eligible satellite.
#[derive(Debug, Clone)]
pub(crate) struct Geometry<'a> {
    /// Eligible satellites, in matrix row order
    pub candidates: Vec<&'a SatelliteCorrection>,
    /// G matrix (n x 4)
    pub g: MatrixXx4<f64>,
    /// Diagonal W matrix (n x n)
    pub w: DMatrix<f64>,
}

impl<'a> Geometry<'a> {
    /// Forms a new [Geometry] from all eligible [SatelliteCorrection]s.
    pub fn new(corrections: &'a [SatelliteCorrection]) -> Result<Self, Error> {
        let candidates = corrections.iter().filter(|cd| cd.eligible).collect_vec();

        let size = candidates.len();
        if size == 0 {
            return Err(Error::EmptyGeometry);
        }

        let mut g = MatrixXx4::<f64>::zeros(size);
        let mut weights = DVector::<f64>::zeros(size);

        for (i, cd) in candidates.iter().enumerate() {
            g.set_row(i, &geometry_row(cd.elevation_deg, cd.azimuth_deg));
            weights[i] = cd.weight()?;
        }

        Ok(Self {
            candidates,
            g,
            w: DMatrix::from_diagonal(&weights),
        })
    }

    /// Number of eligible satellites
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Gᵗ.G
    pub fn gt_g(&self) -> Matrix4<f64> {
        self.g.transpose() * &self.g
    }

    /// Gᵗ.W.G
    pub fn gt_w_g(&self) -> Matrix4<f64> {
        let gt_w: OMatrix<f64, U4, Dyn> = self.g.transpose() * &self.w;
        gt_w * &self.g
    }

    /// D = (Gᵗ.W.G)⁻¹, the position error covariance.
    pub fn covariance(&self) -> Result<Matrix4<f64>, Error> {
        checked_inverse(self.gt_w_g(), MatrixKind::Covariance)
    }

    /// S = (Gᵗ.W.G)⁻¹.Gᵗ.W, from precomputed D.
    pub fn solution_matrix(&self, d: &Matrix4<f64>) -> OMatrix<f64, U4, Dyn> {
        let s: OMatrix<f64, U4, Dyn> = d * self.g.transpose() * &self.w;
        debug!("G: {} W: {} S: {}", self.g, self.w, s);
        s
    }
}
