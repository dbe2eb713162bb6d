#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        EARTH_MEAN_RADIUS_M, LSQ_DELTA_EPS, MAX_LSQ_ITER, MIN_NUM_SATS_PVT, MOPS_KH_PA,
        MOPS_KV_PA, PDOP_MAX,
    },
    prelude::Error,
};

mod boundary;
pub use boundary::Boundary;

fn default_max_lsq_iterations() -> usize {
    MAX_LSQ_ITER
}

fn default_convergence_epsilon() -> f64 {
    LSQ_DELTA_EPS
}

fn default_min_sats() -> usize {
    MIN_NUM_SATS_PVT
}

fn default_max_pdop() -> f64 {
    PDOP_MAX
}

fn default_kh_pa() -> f64 {
    MOPS_KH_PA
}

fn default_kv_pa() -> f64 {
    MOPS_KV_PA
}

fn default_earth_radius() -> f64 {
    EARTH_MEAN_RADIUS_M
}

fn default_convergence_boundary() -> Boundary {
    Boundary::Inclusive
}

fn default_iteration_boundary() -> Boundary {
    Boundary::Exclusive
}

fn default_seed_from_previous() -> bool {
    false
}

/// [Solver](crate::prelude::Solver) configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximal number of WLSQ iterations per epoch.
    #[cfg_attr(feature = "serde", serde(default = "default_max_lsq_iterations"))]
    pub max_lsq_iterations: usize,
    /// WLSQ iteration stops once the norm of the correction
    /// falls below this threshold (meters).
    #[cfg_attr(feature = "serde", serde(default = "default_convergence_epsilon"))]
    pub convergence_epsilon_m: f64,
    /// Minimal number of eligible satellites to attempt a solution.
    /// Cannot be lower than 4 (3D position and clock).
    #[cfg_attr(feature = "serde", serde(default = "default_min_sats"))]
    pub min_sats_for_solution: usize,
    /// Epochs with PDOP above this ceiling are not resolved.
    #[cfg_attr(feature = "serde", serde(default = "default_max_pdop"))]
    pub max_pdop: f64,
    /// Horizontal protection level multiplier (Precision Approach)
    #[cfg_attr(feature = "serde", serde(default = "default_kh_pa"))]
    pub kh_pa: f64,
    /// Vertical protection level multiplier (Precision Approach)
    #[cfg_attr(feature = "serde", serde(default = "default_kv_pa"))]
    pub kv_pa: f64,
    /// Earth radius used to convert horizontal corrections to angles (meters).
    #[cfg_attr(feature = "serde", serde(default = "default_earth_radius"))]
    pub earth_radius_m: f64,
    /// [Boundary] of the `|dx|` vs. epsilon convergence test.
    #[cfg_attr(feature = "serde", serde(default = "default_convergence_boundary"))]
    pub convergence_boundary: Boundary,
    /// [Boundary] of the iteration budget. [Boundary::Exclusive] allows
    /// exactly `max_lsq_iterations` iterations, [Boundary::Inclusive]
    /// allows one extra iteration.
    #[cfg_attr(feature = "serde", serde(default = "default_iteration_boundary"))]
    pub iteration_boundary: Boundary,
    /// When processing a batch, seed each epoch with the previous
    /// Precision Approach fix instead of the receiver reference position.
    #[cfg_attr(feature = "serde", serde(default = "default_seed_from_previous"))]
    pub seed_from_previous: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_lsq_iterations: default_max_lsq_iterations(),
            convergence_epsilon_m: default_convergence_epsilon(),
            min_sats_for_solution: default_min_sats(),
            max_pdop: default_max_pdop(),
            kh_pa: default_kh_pa(),
            kv_pa: default_kv_pa(),
            earth_radius_m: default_earth_radius(),
            convergence_boundary: default_convergence_boundary(),
            iteration_boundary: default_iteration_boundary(),
            seed_from_previous: default_seed_from_previous(),
        }
    }
}

impl Config {
    /// Returns [Config] preset for Precision Approach (MOPS integrity multipliers).
    /// You can then customize [Self] as you will.
    pub fn precision_approach() -> Self {
        Self::default()
    }

    /// Copies and returns [Config] with updated iteration budget.
    pub fn with_max_lsq_iterations(&self, iterations: usize) -> Self {
        let mut s = self.clone();
        s.max_lsq_iterations = iterations;
        s
    }

    /// Copies and returns [Config] with updated convergence threshold (meters).
    pub fn with_convergence_epsilon(&self, epsilon_m: f64) -> Self {
        let mut s = self.clone();
        s.convergence_epsilon_m = epsilon_m;
        s
    }

    /// Copies and returns [Config] with updated satellite minimum.
    pub fn with_min_sats(&self, min_sats: usize) -> Self {
        let mut s = self.clone();
        s.min_sats_for_solution = min_sats;
        s
    }

    /// Copies and returns [Config] with updated PDOP ceiling.
    pub fn with_max_pdop(&self, max_pdop: f64) -> Self {
        let mut s = self.clone();
        s.max_pdop = max_pdop;
        s
    }

    /// Copies and returns [Config] with both [Boundary] policies.
    pub fn with_boundaries(&self, convergence: Boundary, iteration: Boundary) -> Self {
        let mut s = self.clone();
        s.convergence_boundary = convergence;
        s.iteration_boundary = iteration;
        s
    }

    /// Copies and returns [Config] with seed chaining enabled or disabled.
    pub fn with_seed_from_previous(&self, enabled: bool) -> Self {
        let mut s = self.clone();
        s.seed_from_previous = enabled;
        s
    }

    /// Number of iterations the WLSQ estimator may run.
    pub(crate) fn iteration_budget(&self) -> usize {
        match self.iteration_boundary {
            Boundary::Inclusive => self.max_lsq_iterations + 1,
            Boundary::Exclusive => self.max_lsq_iterations,
        }
    }

    /// Verifies this [Config] is physically meaningful.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_lsq_iterations == 0 {
            return Err(Error::InvalidConfig("null iteration budget"));
        }
        if !(self.convergence_epsilon_m > 0.0) {
            return Err(Error::InvalidConfig("convergence epsilon must be positive"));
        }
        if self.min_sats_for_solution < MIN_NUM_SATS_PVT {
            return Err(Error::InvalidConfig(
                "at least 4 satellites are required (position and clock)",
            ));
        }
        if !(self.max_pdop > 0.0) {
            return Err(Error::InvalidConfig("pdop ceiling must be positive"));
        }
        if !(self.kh_pa > 0.0) || !(self.kv_pa > 0.0) {
            return Err(Error::InvalidConfig(
                "protection level multipliers must be positive",
            ));
        }
        if !(self.earth_radius_m > 0.0) {
            return Err(Error::InvalidConfig("earth radius must be positive"));
        }
        Ok(())
    }
}
