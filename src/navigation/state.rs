use nalgebra::Vector4;

use crate::{
    apriori::geodetic_to_ecef,
    prelude::{ReceiverSeed, Vector3},
};

/// Receiver [State], threaded through the WLSQ iterations by value.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub(crate) struct State {
    /// Longitude (decimal degrees)
    pub longitude_ddeg: f64,
    /// Latitude (decimal degrees)
    pub latitude_ddeg: f64,
    /// Altitude (meters)
    pub altitude_m: f64,
    /// Receiver clock bias (meters)
    pub clock_bias_m: f64,
    /// Accumulated (East, North, Up) corrections since the seed (meters)
    pub error_enu_m: Vector3<f64>,
}

impl State {
    /// Initial [State], located at the [ReceiverSeed], with null clock and accumulators.
    pub fn from_seed(seed: &ReceiverSeed) -> Self {
        Self {
            longitude_ddeg: seed.longitude_ddeg,
            latitude_ddeg: seed.latitude_ddeg,
            altitude_m: seed.altitude_m,
            clock_bias_m: 0.0,
            error_enu_m: Vector3::zeros(),
        }
    }

    /// Current position in meters ECEF.
    pub fn ecef(&self) -> Vector3<f64> {
        geodetic_to_ecef(self.longitude_ddeg, self.latitude_ddeg, self.altitude_m)
    }

    /// Horizontal position error: magnitude of the accumulated East/North corrections.
    pub fn hpe_m(&self) -> f64 {
        self.error_enu_m[0].hypot(self.error_enu_m[1])
    }

    /// Vertical position error: magnitude of the accumulated Up correction.
    pub fn vpe_m(&self) -> f64 {
        self.error_enu_m[2].abs()
    }

    /// Applies correction `dx` = (East, North, Up, clock) in meters
    /// and returns the updated [State]. Latitude is advanced first,
    /// the longitude scale factor uses the updated latitude.
    pub fn update(self, dx: &Vector4<f64>, earth_radius_m: f64) -> Self {
        let dlat_rad = dx[1] / earth_radius_m;
        let latitude_ddeg = self.latitude_ddeg + dlat_rad.to_degrees();

        let dlon_rad = dx[0] / (earth_radius_m * latitude_ddeg.to_radians().cos());

        Self {
            longitude_ddeg: self.longitude_ddeg + dlon_rad.to_degrees(),
            latitude_ddeg,
            altitude_m: self.altitude_m + dx[2],
            clock_bias_m: self.clock_bias_m + dx[3],
            error_enu_m: self.error_enu_m + Vector3::new(dx[0], dx[1], dx[2]),
        }
    }
}

#[cfg(test)]
mod test {
    use super::State;
    use crate::prelude::ReceiverSeed;
    use nalgebra::Vector4;

    const R: f64 = 6_371_000.0;

    #[test]
    fn seed_state() {
        let seed = ReceiverSeed::from_geo(2.0, 41.0, 100.0);
        let state = State::from_seed(&seed);
        assert_eq!(state.longitude_ddeg, 2.0);
        assert_eq!(state.latitude_ddeg, 41.0);
        assert_eq!(state.altitude_m, 100.0);
        assert_eq!(state.clock_bias_m, 0.0);
        assert_eq!(state.hpe_m(), 0.0);
        assert_eq!(state.vpe_m(), 0.0);
        assert_eq!(state.ecef(), seed.ecef());
    }

    #[test]
    fn state_update() {
        let initial = State::from_seed(&ReceiverSeed::from_geo(0.0, 60.0, 0.0));

        let dx = Vector4::new(3.0, 4.0, -2.0, 10.0);
        let state = initial.update(&dx, R);

        // seed is left untouched
        assert_eq!(initial.latitude_ddeg, 60.0);

        let dlat = (4.0 / R).to_degrees();
        let dlon = (3.0 / (R * (60.0 + dlat).to_radians().cos())).to_degrees();

        assert!((state.latitude_ddeg - 60.0 - dlat).abs() < 1.0E-12);
        assert!((state.longitude_ddeg - dlon).abs() < 1.0E-12);
        assert_eq!(state.altitude_m, -2.0);
        assert_eq!(state.clock_bias_m, 10.0);
        assert!((state.hpe_m() - 5.0).abs() < 1.0E-12);
        assert_eq!(state.vpe_m(), 2.0);

        // accumulators sum every correction
        let state = state.update(&Vector4::new(-3.0, -4.0, 2.0, 0.0), R);
        assert!(state.hpe_m().abs() < 1.0E-12);
        assert!(state.vpe_m().abs() < 1.0E-12);
        assert_eq!(state.clock_bias_m, 10.0);
    }

    #[test]
    fn longitude_scaled_at_updated_latitude() {
        let initial = State::from_seed(&ReceiverSeed::from_geo(10.0, 0.0, 0.0));

        // one degree north and 1km east, in a single step
        let dn = R * 1.0_f64.to_radians();
        let state = initial.update(&Vector4::new(1000.0, dn, 0.0, 0.0), R);

        assert!((state.latitude_ddeg - 1.0).abs() < 1.0E-9);

        let expected = 10.0 + (1000.0 / (R * 1.0_f64.to_radians().cos())).to_degrees();
        assert!((state.longitude_ddeg - expected).abs() < 1.0E-12);

        // equator scaling would land elsewhere
        let equator = 10.0 + (1000.0 / R).to_degrees();
        assert!((state.longitude_ddeg - equator).abs() > 1.0E-9);
    }
}
