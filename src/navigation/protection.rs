use nalgebra::Matrix4;

use crate::prelude::Config;

/// Integrity bounds of the Precision Approach solution,
/// derived from the position error covariance D = (Gᵗ.W.G)⁻¹.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct ProtectionLevels {
    /// Horizontal Protection Level (meters)
    pub hpl_m: f64,
    /// Vertical Protection Level (meters)
    pub vpl_m: f64,
}

impl ProtectionLevels {
    /// Builds [ProtectionLevels] from D, with the multipliers defined in [Config].
    pub(crate) fn new(cfg: &Config, d: &Matrix4<f64>) -> Self {
        let (d_ee, d_nn, d_en, d_uu) = (d[(0, 0)], d[(1, 1)], d[(0, 1)], d[(2, 2)]);

        // semi major axis of the horizontal error ellipse
        let d_major = ((d_ee + d_nn) / 2.0
            + (((d_ee - d_nn) / 2.0).powi(2) + d_en.powi(2)).sqrt())
        .sqrt();

        Self {
            hpl_m: cfg.kh_pa * d_major,
            vpl_m: cfg.kv_pa * d_uu.sqrt(),
        }
    }

    /// Horizontal and vertical safety indices for given position errors.
    pub fn safety_indices(&self, hpe_m: f64, vpe_m: f64) -> (f64, f64) {
        (safety_index(hpe_m, self.hpl_m), safety_index(vpe_m, self.vpl_m))
    }
}

fn safety_index(error_m: f64, protection_m: f64) -> f64 {
    if error_m == 0.0 {
        0.0
    } else {
        error_m.abs() / protection_m
    }
}
