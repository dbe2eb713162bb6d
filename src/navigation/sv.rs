use crate::prelude::SV;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Data attached to each satellite that contributed to the solution.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SVContribution {
    /// [SV] identity
    pub sv: SV,

    /// Elevation angle from RX position (degrees)
    pub elevation_deg: f64,

    /// Azimuth angle from RX position (degrees)
    pub azimuth_deg: f64,

    /// UERE standard deviation (meters)
    pub sigma_uere_m: f64,

    /// Inverse variance weight
    pub weight: f64,

    /// Pseudo range residual at the final state (meters)
    pub postfit_residual_m: f64,
}
