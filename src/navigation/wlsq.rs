//! Iterative Weighted Least Squares estimator
use log::{debug, trace};

use nalgebra::{DVector, Dyn, Matrix4, OMatrix, Vector4, U4};

use crate::{
    navigation::{Geometry, State},
    prelude::{Config, EpochTag},
};

/// [Wlsq] estimator status
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LsqStatus {
    /// Estimator is still iterating
    #[default]
    Iterating,
    /// Correction fell below the convergence threshold
    Converged,
    /// Iteration budget exhausted before convergence
    MaxIterationsExceeded,
}

impl std::fmt::Display for LsqStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Iterating => write!(f, "iterating"),
            Self::Converged => write!(f, "converged"),
            Self::MaxIterationsExceeded => write!(f, "max iterations exceeded"),
        }
    }
}

/// [Wlsq] outcome
#[derive(Debug, Copy, Clone)]
pub(crate) struct LsqOutput {
    /// Terminal [LsqStatus]
    pub status: LsqStatus,
    /// Final [State]
    pub state: State,
    /// Number of iterations
    pub iterations: usize,
    /// Norm of the last correction
    pub norm: f64,
}

/// Weighted Least Squares estimator. Geometry does not evolve over the
/// iterations, only the residuals do: S = (Gᵗ.W.G)⁻¹.Gᵗ.W is formed once.
pub(crate) struct Wlsq<'a> {
    cfg: &'a Config,
    tag: EpochTag,
    geometry: &'a Geometry<'a>,
    s: OMatrix<f64, U4, Dyn>,
}

impl<'a> Wlsq<'a> {
    /// Builds new [Wlsq] estimator
    /// ## Input
    /// - cfg: [Config] preset
    /// - tag: [EpochTag] (logs only)
    /// - geometry: epoch [Geometry]
    /// - d: precomputed (Gᵗ.W.G)⁻¹
    pub fn new(cfg: &'a Config, tag: EpochTag, geometry: &'a Geometry<'a>, d: &Matrix4<f64>) -> Self {
        Self {
            cfg,
            tag,
            geometry,
            s: geometry.solution_matrix(d),
        }
    }

    /// Pseudo range residuals at given [State]:
    /// `pr - clock - range(state)`, in matrix row order.
    pub fn residuals(&self, state: &State) -> DVector<f64> {
        let rx_ecef_m = state.ecef();
        DVector::from_iterator(
            self.geometry.len(),
            self.geometry.candidates.iter().map(|cd| {
                let range = cd.geometric_range(&rx_ecef_m, &state.error_enu_m);
                let res = cd.pseudo_range_m - state.clock_bias_m - range;
                trace!("({}) {} - residual={:.4}", self.tag, cd.sv, res);
                res
            }),
        )
    }

    /// Runs one iteration: returns the updated [State] and the correction norm.
    pub fn iterate(&self, state: State) -> (State, f64) {
        let residuals = self.residuals(&state);
        let dx: Vector4<f64> = &self.s * residuals;
        let norm = dx.norm();
        (state.update(&dx, self.cfg.earth_radius_m), norm)
    }

    /// Iterates from initial [State] until convergence or budget exhaustion.
    pub fn run(&self, initial: State) -> LsqOutput {
        let budget = self.cfg.iteration_budget();

        let mut output = LsqOutput {
            status: LsqStatus::Iterating,
            state: initial,
            iterations: 0,
            norm: f64::INFINITY,
        };

        while output.status == LsqStatus::Iterating {
            let (state, norm) = self.iterate(output.state);

            output.state = state;
            output.norm = norm;
            output.iterations += 1;

            debug!(
                "({}) wlsq iter={} |dx|={:.3e} lat={:.9} lon={:.9} alt={:.4} clk={:.4}",
                self.tag,
                output.iterations,
                norm,
                state.latitude_ddeg,
                state.longitude_ddeg,
                state.altitude_m,
                state.clock_bias_m,
            );

            output.status = if self
                .cfg
                .convergence_boundary
                .below(norm, self.cfg.convergence_epsilon_m)
            {
                LsqStatus::Converged
            } else if !norm.is_finite() || output.iterations >= budget {
                LsqStatus::MaxIterationsExceeded
            } else {
                LsqStatus::Iterating
            };
        }

        output
    }
}
