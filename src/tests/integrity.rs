use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    prelude::{Config, EpochTag, Solver},
    tests::{init_logger, synthetic_pool_with, REFERENCE_SEED},
};

const ELEVATIONS: [f64; 6] = [85.0, 60.0, 45.0, 30.0, 15.0, 50.0];
const AZIMUTHS: [f64; 6] = [0.0, 72.0, 144.0, 216.0, 288.0, 330.0];

#[test]
fn protection_levels_only_depend_on_geometry() {
    init_logger();
    let solver = Solver::new(Config::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);

    let sigmas = [0.8, 1.2, 1.5, 2.0, 3.5, 1.0];
    let reference = synthetic_pool_with(&REFERENCE_SEED, 0.0, &ELEVATIONS, &AZIMUTHS, &sigmas);
    let reference = solver.resolve(EpochTag::new(10, 0.0), &REFERENCE_SEED, &reference);
    assert!(reference.is_precision_approach());

    for i in 1..32 {
        let mut pool = synthetic_pool_with(&REFERENCE_SEED, 30.0, &ELEVATIONS, &AZIMUTHS, &sigmas);
        for cd in pool.iter_mut() {
            cd.pseudo_range_m += rng.random_range(-cd.sigma_uere_m..cd.sigma_uere_m);
        }

        let solution = solver.resolve(EpochTag::new(10, i as f64), &REFERENCE_SEED, &pool);
        assert!(solution.is_precision_approach());

        assert!((solution.hpl_m - reference.hpl_m).abs() < 1.0E-9);
        assert!((solution.vpl_m - reference.vpl_m).abs() < 1.0E-9);
        assert!((solution.pdop - reference.pdop).abs() < 1.0E-12);

        assert!(solution.hsi >= 0.0);
        assert!(solution.vsi >= 0.0);
        assert!((solution.hsi - solution.hpe_m / solution.hpl_m).abs() < 1.0E-12);
        assert!((solution.vsi - solution.vpe_m / solution.vpl_m).abs() < 1.0E-12);

        // bounded noise, at most a few meters of position error
        assert!(solution.hpe_m < solution.hpl_m, "hpe={}", solution.hpe_m);
        assert!(solution.vpe_m < solution.vpl_m, "vpe={}", solution.vpe_m);
    }
}

#[test]
fn protection_levels_grow_when_losing_satellites() {
    let solver = Solver::new(Config::default()).unwrap();
    let sigmas = [1.0; 6];

    let pool = synthetic_pool_with(&REFERENCE_SEED, 0.0, &ELEVATIONS, &AZIMUTHS, &sigmas);
    let full = solver.resolve(EpochTag::default(), &REFERENCE_SEED, &pool);
    assert!(full.is_precision_approach());
    assert_eq!(full.sats_used, 6);

    for excluded in 0..6 {
        let pool = pool
            .iter()
            .enumerate()
            .map(|(i, cd)| cd.with_eligibility(i != excluded))
            .collect::<Vec<_>>();

        let reduced = solver.resolve(EpochTag::default(), &REFERENCE_SEED, &pool);
        assert!(reduced.is_precision_approach());
        assert_eq!(reduced.sats_used, 5);
        assert_eq!(reduced.sats_visible, 6);

        assert!(reduced.hpl_m >= full.hpl_m - 1.0E-9);
        assert!(reduced.vpl_m >= full.vpl_m - 1.0E-9);
        assert!(reduced.pdop >= full.pdop - 1.0E-9);
    }
}

#[test]
fn uere_weighting() {
    let solver = Solver::new(Config::default()).unwrap();

    // degrading one satellite cannot tighten the protection levels
    let pool = synthetic_pool_with(&REFERENCE_SEED, 0.0, &ELEVATIONS, &AZIMUTHS, &[1.0; 6]);
    let nominal = solver.resolve(EpochTag::default(), &REFERENCE_SEED, &pool);

    let mut sigmas = [1.0; 6];
    sigmas[0] = 10.0;
    let pool = synthetic_pool_with(&REFERENCE_SEED, 0.0, &ELEVATIONS, &AZIMUTHS, &sigmas);
    let degraded = solver.resolve(EpochTag::default(), &REFERENCE_SEED, &pool);

    assert!(degraded.vpl_m > nominal.vpl_m);
    assert!(degraded.hpl_m >= nominal.hpl_m - 1.0E-9);

    // DOP is a geometry-only criterion
    assert!((degraded.pdop - nominal.pdop).abs() < 1.0E-12);
    assert_eq!(degraded.sv[0].weight, 0.01);
}

#[cfg(feature = "serde")]
#[test]
fn solution_serialization() {
    use crate::tests::synthetic_pool;

    let solver = Solver::new(Config::default()).unwrap();
    let pool = synthetic_pool(&REFERENCE_SEED, 0.0);
    let solution = solver.resolve(EpochTag::new(12, 300.0), &REFERENCE_SEED, &pool);

    let content = serde_json::to_string(&solution).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["status"], "PrecisionApproachSolution");
    assert_eq!(value["epoch"]["doy"], 12);
    assert_eq!(value["sats_used"], 5);
    assert!(value["rejection"].is_null());
}
