//! Position Solution
use crate::{
    navigation::{DilutionOfPrecision, ProtectionLevels, SVContribution, State},
    prelude::{EpochTag, Error, ReceiverSeed},
};

pub(crate) mod validator;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Solution status
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SolutionStatus {
    /// No solution could be formed for this epoch
    #[default]
    NoSolution,
    /// Precision Approach solution achieved
    PrecisionApproachSolution,
}

impl std::fmt::Display for SolutionStatus {
    /*
     * Prints self
     */
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoSolution => write!(f, "No Solution"),
            Self::PrecisionApproachSolution => write!(f, "PA"),
        }
    }
}

/// [PositionSolution] is created once per epoch, then never modified.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PositionSolution {
    /// [EpochTag] of this solution
    pub epoch: EpochTag,
    /// Estimated longitude (decimal degrees)
    pub longitude_ddeg: f64,
    /// Estimated latitude (decimal degrees)
    pub latitude_ddeg: f64,
    /// Estimated altitude (meters)
    pub altitude_m: f64,
    /// Estimated receiver clock bias (meters)
    pub clock_bias_m: f64,
    /// [SolutionStatus]
    pub status: SolutionStatus,
    /// Number of satellites in sight
    pub sats_visible: usize,
    /// Number of satellites eligible for the solution
    pub sats_used: usize,
    /// Horizontal Position Error (meters)
    pub hpe_m: f64,
    /// Vertical Position Error (meters)
    pub vpe_m: f64,
    /// East Position Error (meters)
    pub epe_m: f64,
    /// North Position Error (meters)
    pub npe_m: f64,
    /// Horizontal Protection Level (meters)
    pub hpl_m: f64,
    /// Vertical Protection Level (meters)
    pub vpl_m: f64,
    /// Horizontal Safety Index
    pub hsi: f64,
    /// Vertical Safety Index
    pub vsi: f64,
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    /// Vertical Dilution of Precision
    pub vdop: f64,
    /// Position Dilution of Precision
    pub pdop: f64,
    /// Temporal Dilution of Precision
    pub tdop: f64,
    /// Geometric Dilution of Precision
    pub gdop: f64,
    /// Number of WLSQ iterations (0 when the estimator was not invoked)
    pub iterations: usize,
    /// Satellites that helped form this solution
    pub sv: Vec<SVContribution>,
    /// Why this epoch was not resolved
    pub rejection: Option<Error>,
}

impl PositionSolution {
    /// Creates a blank [PositionSolution]
    pub(crate) fn new(epoch: EpochTag) -> Self {
        Self {
            epoch,
            ..Default::default()
        }
    }

    /// Returns true if this is a Precision Approach solution
    pub fn is_precision_approach(&self) -> bool {
        self.status == SolutionStatus::PrecisionApproachSolution
    }

    /// Returns the estimated position as a [ReceiverSeed], to initialize the following epoch.
    pub fn to_seed(&self) -> ReceiverSeed {
        ReceiverSeed::from_geo(self.longitude_ddeg, self.latitude_ddeg, self.altitude_m)
    }

    pub(crate) fn set_seed(&mut self, seed: &ReceiverSeed) {
        self.longitude_ddeg = seed.longitude_ddeg;
        self.latitude_ddeg = seed.latitude_ddeg;
        self.altitude_m = seed.altitude_m;
    }

    pub(crate) fn set_dop(&mut self, dop: &DilutionOfPrecision) {
        self.hdop = dop.hdop;
        self.vdop = dop.vdop;
        self.pdop = dop.pdop;
        self.tdop = dop.tdop;
        self.gdop = dop.gdop;
    }

    /// Stores a converged [State]
    pub(crate) fn set_state(&mut self, state: &State) {
        self.longitude_ddeg = state.longitude_ddeg;
        self.latitude_ddeg = state.latitude_ddeg;
        self.altitude_m = state.altitude_m;
        self.clock_bias_m = state.clock_bias_m;
        self.epe_m = state.error_enu_m[0];
        self.npe_m = state.error_enu_m[1];
        self.hpe_m = state.hpe_m();
        self.vpe_m = state.vpe_m();
    }

    pub(crate) fn set_protection_levels(&mut self, pl: &ProtectionLevels) {
        self.hpl_m = pl.hpl_m;
        self.vpl_m = pl.vpl_m;
        (self.hsi, self.vsi) = pl.safety_indices(self.hpe_m, self.vpe_m);
    }
}
