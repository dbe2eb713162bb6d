//! Position solver
use log::{debug, error, info, warn};

use crate::{
    navigation::{
        solutions::validator::Validator, DilutionOfPrecision, Geometry, LsqStatus,
        PositionSolution, ProtectionLevels, SVContribution, SolutionStatus, State, Wlsq,
    },
    prelude::{Config, EpochTag, Error, ReceiverSeed, SatelliteCorrection},
};

/// Corrected observations of a single epoch, see [Solver::resolve_batch].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochInput {
    /// [EpochTag]
    pub epoch: EpochTag,
    /// Every satellite in sight at that epoch
    pub corrections: Vec<SatelliteCorrection>,
}

/// [Solver] forms one [PositionSolution] per epoch. It does not
/// retain anything from one epoch to the next: epochs may be
/// resolved in any order, or concurrently.
#[derive(Debug, Clone)]
pub struct Solver {
    /// Solver parametrization
    cfg: Config,
}

impl Solver {
    /// Creates a new [Solver]
    /// ## Input
    /// - cfg: solver [Config], which is verified
    pub fn new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// [Config] in use
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Resolves one epoch. This never fails: when no solution may be formed,
    /// the returned [PositionSolution] has [SolutionStatus::NoSolution] status
    /// and describes the reason.
    /// ## Input
    /// - epoch: [EpochTag]
    /// - seed: [ReceiverSeed] used to initialize the iteration
    /// - corrections: [SatelliteCorrection]s of every satellite in sight
    pub fn resolve(
        &self,
        epoch: EpochTag,
        seed: &ReceiverSeed,
        corrections: &[SatelliteCorrection],
    ) -> PositionSolution {
        let mut solution = PositionSolution::new(epoch);

        match self.process(&mut solution, seed, corrections) {
            Ok(()) => {
                info!(
                    "({}) PA solution: lat={:.8} lon={:.8} alt={:.3} hpl={:.3} vpl={:.3}",
                    epoch,
                    solution.latitude_ddeg,
                    solution.longitude_ddeg,
                    solution.altitude_m,
                    solution.hpl_m,
                    solution.vpl_m,
                );
            },
            Err(e) => {
                match e {
                    Error::SingularMatrix(_) | Error::InvalidUere(_) => {
                        error!("({}) no solution: {}", epoch, e)
                    },
                    _ => warn!("({}) no solution: {}", epoch, e),
                }
                solution.status = SolutionStatus::NoSolution;
                solution.rejection = Some(e);
            },
        }

        solution
    }

    /// Same as [Solver::resolve], returning the rejection cause as an [Error].
    pub fn try_resolve(
        &self,
        epoch: EpochTag,
        seed: &ReceiverSeed,
        corrections: &[SatelliteCorrection],
    ) -> Result<PositionSolution, Error> {
        let solution = self.resolve(epoch, seed, corrections);
        match solution.rejection {
            Some(e) => Err(e),
            None => Ok(solution),
        }
    }

    /// Resolves a batch of epochs, in order. One [PositionSolution] is returned per epoch,
    /// failing epochs do not interrupt the batch. When [Config::seed_from_previous]
    /// is set, each Precision Approach fix seeds the following epoch.
    pub fn resolve_batch(&self, seed: &ReceiverSeed, epochs: &[EpochInput]) -> Vec<PositionSolution> {
        let mut current_seed = *seed;

        epochs
            .iter()
            .map(|input| {
                let solution = self.resolve(input.epoch, &current_seed, &input.corrections);
                if self.cfg.seed_from_previous && solution.is_precision_approach() {
                    current_seed = solution.to_seed();
                }
                solution
            })
            .collect()
    }

    /// Populates the [PositionSolution] step by step.
    fn process(
        &self,
        solution: &mut PositionSolution,
        seed: &ReceiverSeed,
        corrections: &[SatelliteCorrection],
    ) -> Result<(), Error> {
        let epoch = solution.epoch;

        let geometry = Geometry::new(corrections)?;

        solution.set_seed(seed);
        solution.sats_visible = corrections.len();
        solution.sats_used = geometry.len();

        debug!(
            "({}) {} satellite(s) in sight, {} eligible",
            epoch,
            solution.sats_visible,
            solution.sats_used
        );

        Validator::satellites(&self.cfg, geometry.len())?;

        let dop = DilutionOfPrecision::new(&geometry)?;
        solution.set_dop(&dop);

        debug!(
            "({}) hdop={:.3} vdop={:.3} pdop={:.3} tdop={:.3}",
            epoch,
            dop.hdop,
            dop.vdop,
            dop.pdop,
            dop.tdop
        );

        Validator::geometry(&self.cfg, &dop)?;

        let d = geometry.covariance()?;
        debug!("({}) D: {}", epoch, d);

        let wlsq = Wlsq::new(&self.cfg, epoch, &geometry, &d);
        let output = wlsq.run(State::from_seed(seed));

        solution.iterations = output.iterations;

        if output.status != LsqStatus::Converged {
            return Err(Error::NonConvergence {
                iterations: output.iterations,
                norm: output.norm,
            });
        }

        let residuals = wlsq.residuals(&output.state);

        solution.sv = geometry
            .candidates
            .iter()
            .zip(residuals.iter())
            .map(|(cd, residual)| SVContribution {
                sv: cd.sv,
                elevation_deg: cd.elevation_deg,
                azimuth_deg: cd.azimuth_deg,
                sigma_uere_m: cd.sigma_uere_m,
                weight: 1.0 / cd.sigma_uere_m.powi(2),
                postfit_residual_m: *residual,
            })
            .collect();

        solution.set_state(&output.state);

        let pl = ProtectionLevels::new(&self.cfg, &d);
        solution.set_protection_levels(&pl);

        solution.status = SolutionStatus::PrecisionApproachSolution;
        Ok(())
    }
}
