mod integrity;

use log::LevelFilter;
use std::sync::Once;

use crate::{
    constants::EARTH_MEAN_RADIUS_M,
    prelude::{Constellation, ReceiverSeed, SatelliteCorrection, Vector3, SV},
};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference receiver location (Barcelona)
pub const REFERENCE_SEED: ReceiverSeed = ReceiverSeed {
    longitude_ddeg: 2.1128,
    latitude_ddeg: 41.3849,
    altitude_m: 120.0,
};

/// Reference elevation angles (degrees)
pub const REFERENCE_ELEVATIONS: [f64; 5] = [85.0, 60.0, 45.0, 30.0, 15.0];

/// Reference azimuth angles (degrees)
pub const REFERENCE_AZIMUTHS: [f64; 5] = [0.0, 72.0, 144.0, 216.0, 288.0];

/// Moves the [ReceiverSeed] by (East, North, Up) meters, using the
/// spherical approximation the estimator relies on.
pub fn offset_seed(seed: &ReceiverSeed, east_m: f64, north_m: f64, up_m: f64) -> ReceiverSeed {
    let latitude_ddeg = seed.latitude_ddeg + (north_m / EARTH_MEAN_RADIUS_M).to_degrees();
    let lat_rad = latitude_ddeg.to_radians();
    ReceiverSeed {
        longitude_ddeg: seed.longitude_ddeg
            + (east_m / (EARTH_MEAN_RADIUS_M * lat_rad.cos())).to_degrees(),
        latitude_ddeg,
        altitude_m: seed.altitude_m + up_m,
    }
}

/// Rotates a local (East, North, Up) vector to ECEF, at given geodetic location.
pub fn enu_to_ecef(seed: &ReceiverSeed, enu: &Vector3<f64>) -> Vector3<f64> {
    let (lat, lon) = (
        seed.latitude_ddeg.to_radians(),
        seed.longitude_ddeg.to_radians(),
    );

    let east = Vector3::new(-lon.sin(), lon.cos(), 0.0);
    let north = Vector3::new(-lat.sin() * lon.cos(), -lat.sin() * lon.sin(), lat.cos());
    let up = Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin());

    east * enu[0] + north * enu[1] + up * enu[2]
}

/// Builds noise-free [SatelliteCorrection]s seen from `truth`,
/// where pseudo ranges are affected by `clock_bias_m` only.
pub fn synthetic_pool_with(
    truth: &ReceiverSeed,
    clock_bias_m: f64,
    elevations: &[f64],
    azimuths: &[f64],
    sigmas: &[f64],
) -> Vec<SatelliteCorrection> {
    let rx_ecef = truth.ecef();

    elevations
        .iter()
        .zip(azimuths.iter())
        .zip(sigmas.iter())
        .enumerate()
        .map(|(i, ((elev, azim), sigma))| {
            let (elev_rad, azim_rad) = (elev.to_radians(), azim.to_radians());

            let los = Vector3::new(
                elev_rad.cos() * azim_rad.sin(),
                elev_rad.cos() * azim_rad.cos(),
                elev_rad.sin(),
            );

            let range_m = 20_200_000.0 + 500_000.0 * i as f64;
            let sv_ecef = rx_ecef + enu_to_ecef(truth, &(los * range_m));
            let pr = (sv_ecef - rx_ecef).norm() + clock_bias_m;

            SatelliteCorrection::new(
                SV::new(Constellation::GPS, i as u8 + 1),
                pr,
                *elev,
                *azim,
                sv_ecef,
                *sigma,
            )
        })
        .collect()
}

/// Noise-free reference pool: 5 satellites, 1m UERE.
pub fn synthetic_pool(truth: &ReceiverSeed, clock_bias_m: f64) -> Vec<SatelliteCorrection> {
    synthetic_pool_with(
        truth,
        clock_bias_m,
        &REFERENCE_ELEVATIONS,
        &REFERENCE_AZIMUTHS,
        &[1.0; 5],
    )
}
