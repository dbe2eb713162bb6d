use crate::{
    navigation::DilutionOfPrecision,
    prelude::{Config, Error},
};

/// Acceptance gates, applied before any attempt to resolve.
pub(crate) struct Validator {}

impl Validator {
    /// Verifies enough satellites are eligible.
    pub fn satellites(cfg: &Config, eligible: usize) -> Result<(), Error> {
        if eligible < cfg.min_sats_for_solution {
            Err(Error::InsufficientGeometry {
                eligible,
                required: cfg.min_sats_for_solution,
            })
        } else {
            Ok(())
        }
    }

    /// Verifies the geometry is strong enough to provide integrity.
    pub fn geometry(cfg: &Config, dop: &DilutionOfPrecision) -> Result<(), Error> {
        if dop.pdop < cfg.max_pdop {
            Ok(())
        } else {
            Err(Error::WeakGeometry {
                pdop: dop.pdop,
                max_pdop: cfg.max_pdop,
            })
        }
    }
}
