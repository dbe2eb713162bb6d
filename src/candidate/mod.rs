//! Corrected satellite observables
use crate::prelude::{Error, Vector3, SV};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the geometric range to a satellite is obtained.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SatelliteRange {
    /// Satellite position in meters ECEF (WGS84). The geometric range is
    /// evaluated from the current receiver position, at each iteration.
    Ecef(Vector3<f64>),
    /// Geometric range (meters) evaluated by the caller from the seed position.
    /// It is projected along the line of sight as the estimate moves away from the seed.
    Precomputed(f64),
}

/// [SatelliteCorrection] is one satellite's already-corrected contribution
/// to a given epoch. The solver only reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteCorrection {
    /// [SV] identity
    pub sv: SV,
    /// Corrected pseudo range (meters)
    pub pseudo_range_m: f64,
    /// Elevation angle from the receiver (degrees)
    pub elevation_deg: f64,
    /// Azimuth angle from the receiver (degrees)
    pub azimuth_deg: f64,
    /// [SatelliteRange]
    pub range: SatelliteRange,
    /// User Equivalent Range Error standard deviation (meters)
    pub sigma_uere_m: f64,
    /// True when this satellite may contribute to the Precision Approach solution
    pub eligible: bool,
}

impl SatelliteCorrection {
    /// Builds a new eligible [SatelliteCorrection] from the satellite ECEF position.
    /// ## Input
    /// - sv: [SV] identity
    /// - pseudo_range_m: corrected pseudo range (meters)
    /// - elevation_deg, azimuth_deg: line of sight (degrees)
    /// - sv_ecef_m: satellite position (meters ECEF)
    /// - sigma_uere_m: UERE standard deviation (meters)
    pub fn new(
        sv: SV,
        pseudo_range_m: f64,
        elevation_deg: f64,
        azimuth_deg: f64,
        sv_ecef_m: Vector3<f64>,
        sigma_uere_m: f64,
    ) -> Self {
        Self {
            sv,
            pseudo_range_m,
            elevation_deg,
            azimuth_deg,
            sigma_uere_m,
            eligible: true,
            range: SatelliteRange::Ecef(sv_ecef_m),
        }
    }

    /// Builds a new eligible [SatelliteCorrection] when only the
    /// geometric range from the seed position is known.
    pub fn with_precomputed_range(
        sv: SV,
        pseudo_range_m: f64,
        elevation_deg: f64,
        azimuth_deg: f64,
        range_m: f64,
        sigma_uere_m: f64,
    ) -> Self {
        Self {
            sv,
            pseudo_range_m,
            elevation_deg,
            azimuth_deg,
            sigma_uere_m,
            eligible: true,
            range: SatelliteRange::Precomputed(range_m),
        }
    }

    /// Copies and returns [SatelliteCorrection] with updated eligibility.
    pub fn with_eligibility(&self, eligible: bool) -> Self {
        let mut s = self.clone();
        s.eligible = eligible;
        s
    }

    /// Inverse variance weight `1/σ²`.
    pub(crate) fn weight(&self) -> Result<f64, Error> {
        if self.sigma_uere_m > 0.0 && self.sigma_uere_m.is_finite() {
            Ok(1.0 / self.sigma_uere_m.powi(2))
        } else {
            Err(Error::InvalidUere(self.sv))
        }
    }

    /// Unit line of sight vector (East, North, Up) towards this satellite.
    pub(crate) fn line_of_sight_enu(&self) -> Vector3<f64> {
        let (elev_rad, azim_rad) = (
            self.elevation_deg.to_radians(),
            self.azimuth_deg.to_radians(),
        );
        Vector3::new(
            elev_rad.cos() * azim_rad.sin(),
            elev_rad.cos() * azim_rad.cos(),
            elev_rad.sin(),
        )
    }

    /// Geometric range (meters) between this satellite and the receiver.
    /// ## Input
    /// - rx_ecef_m: current receiver position (meters ECEF)
    /// - displacement_enu_m: total displacement from the seed position (meters ENU)
    pub(crate) fn geometric_range(
        &self,
        rx_ecef_m: &Vector3<f64>,
        displacement_enu_m: &Vector3<f64>,
    ) -> f64 {
        match self.range {
            SatelliteRange::Ecef(sv_ecef_m) => (sv_ecef_m - rx_ecef_m).norm(),
            SatelliteRange::Precomputed(range_m) => {
                range_m - self.line_of_sight_enu().dot(displacement_enu_m)
            },
        }
    }
}
