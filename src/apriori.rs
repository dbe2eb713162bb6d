use crate::prelude::Vector3;
use map_3d::{geodetic2ecef, Ellipsoid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Approximate receiver position, used to initialize the iteration.
/// The solver never modifies [ReceiverSeed] and works on a copy.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReceiverSeed {
    /// Longitude (decimal degrees)
    pub longitude_ddeg: f64,
    /// Latitude (decimal degrees)
    pub latitude_ddeg: f64,
    /// Altitude above the WGS84 ellipsoid (meters)
    pub altitude_m: f64,
}

impl ReceiverSeed {
    /// Builds Self from geodetic coordinates:
    /// longitude [ddeg], latitude [ddeg] and altitude [m].
    pub fn from_geo(longitude_ddeg: f64, latitude_ddeg: f64, altitude_m: f64) -> Self {
        Self {
            longitude_ddeg,
            latitude_ddeg,
            altitude_m,
        }
    }

    /// Returns ECEF coordinates [m] of Self
    pub fn ecef(&self) -> Vector3<f64> {
        geodetic_to_ecef(self.longitude_ddeg, self.latitude_ddeg, self.altitude_m)
    }
}

/// Converts geodetic coordinates (ddeg, ddeg, m) to WGS84 ECEF [m].
pub(crate) fn geodetic_to_ecef(longitude_ddeg: f64, latitude_ddeg: f64, alt_m: f64) -> Vector3<f64> {
    let (x, y, z) = geodetic2ecef(
        latitude_ddeg.to_radians(),
        longitude_ddeg.to_radians(),
        alt_m,
        Ellipsoid::WGS84,
    );
    Vector3::new(x, y, z)
}
