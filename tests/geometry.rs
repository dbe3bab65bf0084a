use std::f64::consts::{PI, TAU};

use kepler_orbit::constants::{AU_M, DEFAULT_SAMPLES, EARTH_ECCENTRICITY};
use kepler_orbit::orbits::geometry::sample_angles;
use kepler_orbit::orbits::{OrbitPath, OrbitalElements, kepler_orbit, kepler_orbit_default, radius_at};

fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel_tol * scale,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn earth_orbit_matches_reference_extremes() {
    let path = kepler_orbit(1.496e11, 0.0167, 1000);
    assert_eq!(path.len(), 1000);

    let min = path.min_radius().unwrap().radius();
    let max = path.max_radius().unwrap().radius();
    assert_close(min, 1.496e11 * 0.9833, 1e-9);
    // 999 intervals put no sample exactly on θ = π; the nearest is within
    // half a step, which moves the radius by a negligible e·(Δθ/2)² term.
    assert_close(max, 1.496e11 * 1.0167, 1e-6);
    assert!((min - 1.4711e11).abs() < 1.0e7);
    assert!((max - 1.5210e11).abs() < 1.0e7);
}

#[test]
fn default_sampling_uses_one_thousand_points() {
    let path = kepler_orbit_default(AU_M, EARTH_ECCENTRICITY);
    assert_eq!(path.len(), DEFAULT_SAMPLES);
    assert_eq!(path, OrbitalElements::earth().orbit_path());
}

#[test]
fn every_radius_is_positive_for_closed_orbits() {
    for &(a, e) in &[(1.0, 0.0), (7.0e6, 0.001), (AU_M, 0.5), (3.0e12, 0.95), (2.0, 0.999)] {
        for theta in sample_angles(721) {
            let r = radius_at(a, e, theta);
            assert!(r > 0.0, "r({theta}) = {r} for a = {a}, e = {e}");
        }
        let path = kepler_orbit(a, e, 500);
        assert!(path.radii().iter().all(|&r| r > 0.0));
    }
}

#[test]
fn path_closes_on_itself() {
    for &e in &[0.0, 0.3, 0.9] {
        let a = 4.2e10;
        let path = kepler_orbit(a, e, 257);
        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert_eq!(first.theta_rad, 0.0);
        assert_eq!(last.theta_rad, TAU);
        assert!((first.x_m - last.x_m).abs() <= 1e-9 * a);
        assert!((first.y_m - last.y_m).abs() <= 1e-9 * a);
    }
}

#[test]
fn circular_orbit_has_constant_radius() {
    let a = 6.371e6;
    let path = kepler_orbit(a, 0.0, 360);
    for p in path.points() {
        assert_close(p.x_m * p.x_m + p.y_m * p.y_m, a * a, 1e-12);
    }
}

#[test]
fn periapsis_sits_on_positive_x_axis() {
    let (a, e) = (2.0e11, 0.4);
    let path = kepler_orbit(a, e, 1001);
    let peri = path.first().unwrap();
    assert_close(peri.radius(), a * (1.0 - e), 1e-12);
    assert!(peri.x_m > 0.0);
    assert_eq!(peri.y_m, 0.0);

    let min = path.min_radius().unwrap();
    assert_close(min.radius(), a * (1.0 - e), 1e-12);
}

#[test]
fn apoapsis_is_reached_at_pi() {
    let (a, e) = (2.0e11, 0.4);
    // An odd count puts the middle sample exactly on θ = π.
    let path = kepler_orbit(a, e, 1001);
    let apo = path.max_radius().unwrap();
    assert_close(apo.theta_rad, PI, 1e-12);
    assert_close(apo.radius(), a * (1.0 + e), 1e-12);
    assert!(apo.x_m < 0.0);
    assert!(apo.y_m.abs() < 1e-6 * a);
}

#[test]
fn four_samples_land_on_thirds_of_a_turn() {
    let path = kepler_orbit(1.0, 0.0, 4);
    let half_sqrt3 = 3.0_f64.sqrt() / 2.0;
    let expected = [(1.0, 0.0), (-0.5, half_sqrt3), (-0.5, -half_sqrt3), (1.0, 0.0)];
    assert_eq!(path.len(), expected.len());
    for (p, (x, y)) in path.points().iter().zip(expected) {
        assert!((p.x_m - x).abs() < 1e-12, "x {} vs {x}", p.x_m);
        assert!((p.y_m - y).abs() < 1e-12, "y {} vs {y}", p.y_m);
    }
    let angles = sample_angles(4);
    assert_close(angles[1], TAU / 3.0, 1e-15);
    assert_close(angles[2], 2.0 * TAU / 3.0, 1e-15);
}

#[test]
fn two_samples_coincide() {
    let path = kepler_orbit(5.0, 0.2, 2);
    assert_eq!(path.len(), 2);
    let (xs, ys) = path.into_xy();
    assert_close(xs[0], 4.0, 1e-12);
    assert!((xs[0] - xs[1]).abs() < 1e-12);
    assert!((ys[0] - ys[1]).abs() < 1e-12);
}

#[test]
fn degenerate_sample_counts() {
    assert!(kepler_orbit(1.0, 0.1, 0).is_empty());
    let single = kepler_orbit(1.0, 0.1, 1);
    assert_eq!(single.len(), 1);
    assert_close(single.first().unwrap().x_m, 0.9, 1e-12);
}

#[test]
fn parabolic_input_is_not_rejected_by_the_sweep() {
    // e >= 1 is outside the supported domain; the sweep still returns n
    // samples, some of them non-physical.
    let path = kepler_orbit(1.0, 1.0, 3);
    assert_eq!(path.len(), 3);
    assert_eq!(path.radii()[0], 0.0);
    assert!(path.radii()[1].is_nan());
    assert!(radius_at(1.0, 1.5, 0.0) < 0.0);
}

#[test]
fn xy_sequences_follow_sample_order() {
    let path = kepler_orbit(3.0, 0.25, 9);
    let xs = path.xs();
    let ys = path.ys();
    for (i, p) in path.points().iter().enumerate() {
        assert_eq!(xs[i], p.x_m);
        assert_eq!(ys[i], p.y_m);
    }
    let bounds = path.bounds().unwrap();
    assert_close(bounds.x_max, 3.0 * 0.75, 1e-12);
    assert_close(bounds.x_min, -3.0 * 1.25, 1e-12);
}

#[test]
fn from_xy_pairs_up_to_the_shorter_sequence() {
    let path = OrbitPath::from_xy(&[1.0, 0.0, -1.0], &[0.0, 1.0]);
    assert_eq!(path.len(), 2);
    assert_eq!(path.xs(), [1.0, 0.0]);
    assert_eq!(path.ys(), [0.0, 1.0]);
    assert_close(path.points()[0].theta_rad, 0.0, 1e-15);
    assert_close(path.points()[1].theta_rad, PI / 2.0, 1e-15);

    let below_axis = OrbitPath::from_xy(&[0.0], &[-2.0]);
    assert_close(below_axis.points()[0].theta_rad, 1.5 * PI, 1e-15);
}

#[test]
fn checked_elements_reject_open_orbits() {
    use kepler_orbit::orbits::ElementsError;

    assert_eq!(
        OrbitalElements::try_new(1.0, 1.0, 10),
        Err(ElementsError::EccentricityOutOfRange(1.0))
    );
    assert_eq!(
        OrbitalElements::try_new(-1.0, 0.1, 10),
        Err(ElementsError::InvalidSemiMajorAxis(-1.0))
    );
    assert_eq!(
        OrbitalElements::try_new(1.0, 0.1, 1),
        Err(ElementsError::TooFewSamples(1))
    );
    assert!(OrbitalElements::try_new(1.0, f64::NAN, 10).is_err());
    let ok = OrbitalElements::try_new(AU_M, 0.0167, 10).unwrap();
    assert_eq!(ok.with_samples(20).samples, 20);
}
