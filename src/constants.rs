/// Mean Earth radius (meters), used to turn North/East corrections into angles
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// MOPS (DO-229) horizontal protection level multiplier, Precision Approach
pub const MOPS_KH_PA: f64 = 6.0;

/// MOPS (DO-229) vertical protection level multiplier, Precision Approach
pub const MOPS_KV_PA: f64 = 5.33;

/// Default WLSQ convergence threshold (meters)
pub const LSQ_DELTA_EPS: f64 = 1.0E-4;

/// Default WLSQ iteration budget
pub const MAX_LSQ_ITER: usize = 100;

/// Position (x3) and clock: minimal number of vehicles to form a solution
pub const MIN_NUM_SATS_PVT: usize = 4;

/// Default PDOP ceiling
pub const PDOP_MAX: f64 = 10.0;

/// Reciprocal condition number under which a matrix is declared singular
pub(crate) const MIN_RECIPROCAL_CONDITION: f64 = 1.0E-12;
