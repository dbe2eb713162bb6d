//! Epoch identification
use hifitime::{Duration, TimeScale};

use crate::prelude::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [EpochTag] identifies one sampling instant, the way the
/// corrected observations are labeled: second of day and day of year.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpochTag {
    /// Second of day
    pub sod: f64,
    /// Day of year (1 = January 1st)
    pub doy: u16,
}

impl std::fmt::Display for EpochTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "doy={:03} sod={:.3}", self.doy, self.sod)
    }
}

impl EpochTag {
    pub fn new(doy: u16, sod: f64) -> Self {
        Self { sod, doy }
    }

    /// Builds [EpochTag] from [Epoch], expressed in UTC.
    pub fn from_epoch(epoch: Epoch) -> Self {
        let utc = epoch.to_time_scale(TimeScale::UTC);
        let midnight = utc.floor(Duration::from_days(1.0));
        Self {
            sod: (utc - midnight).to_seconds(),
            doy: utc.day_of_year().floor() as u16,
        }
    }
}
