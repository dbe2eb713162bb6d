#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod apriori;
mod candidate;
mod cfg;
mod constants;
mod epoch;
mod error;
mod navigation;
mod solver;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::apriori::ReceiverSeed;
    pub use crate::candidate::{SatelliteCorrection, SatelliteRange};
    pub use crate::cfg::{Boundary, Config};
    pub use crate::constants::{
        EARTH_MEAN_RADIUS_M, LSQ_DELTA_EPS, MAX_LSQ_ITER, MIN_NUM_SATS_PVT, MOPS_KH_PA,
        MOPS_KV_PA, PDOP_MAX,
    };
    pub use crate::epoch::EpochTag;
    pub use crate::error::{Error, MatrixKind};
    pub use crate::navigation::{
        DilutionOfPrecision, LsqStatus, PositionSolution, ProtectionLevels, SVContribution,
        SolutionStatus,
    };
    pub use crate::solver::{EpochInput, Solver};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::Epoch;
    pub use nalgebra::Vector3;
}
