//! Reference values and invariants for the public earth-pressure API.
//!
//! Worked examples are taken from standard retaining-wall textbook problems
//! (vertical and inclined walls, φ = 30°-35°).

use lateral_core::calculations::profile::sample_depths;
use lateral_core::{
    compute_active_coefficient, compute_force_components, compute_ordinate, compute_profile, compute_slip_angle,
    compute_surcharge_pressure, compute_surcharge_profile, CalcError,
};

#[test]
fn inclined_wall_with_sloping_backfill() {
    let k = compute_active_coefficient(35.0, 10.0, 20.0, 23.33).unwrap();
    assert!((k - 0.44).abs() < 0.01);

    let e = compute_ordinate(20.0, 5.0, 0.44);
    assert!((e - 44.0).abs() < 0.1);

    let theta = compute_slip_angle(35.0, 10.0, 20.0, 23.33).unwrap();
    assert!((theta - 55.8).abs() < 0.1);

    let (e_h, e_v) = compute_force_components(110.0, 10.0, 24.0).as_tuple();
    assert!((e_h - 91.2).abs() < 0.1);
    assert!((e_v - 61.5).abs() < 0.1);
}

#[test]
fn vertical_wall_with_surcharge() {
    let k = compute_active_coefficient(30.0, 0.0, 0.0, 20.0).unwrap();
    assert!((k - 0.30).abs() < 0.05);

    let e = compute_ordinate(18.0, 5.0, 0.3);
    assert!((e - 27.0).abs() < 1.0);

    let e_p = compute_surcharge_pressure(30.0, 0.3);
    assert!((e_p - 9.0).abs() < 1e-9);

    let profile = compute_surcharge_profile(30.0, 5.0, 20, 0.3).unwrap();
    assert_eq!(profile.len(), 20);
    assert!((profile.max_ordinate() - 9.0).abs() < 1e-9);
}

#[test]
fn coefficient_bounded_for_conventional_backfills() {
    let mut checked = 0;
    for phi in (20..=45).step_by(5).map(f64::from) {
        for alpha in (-10..=10).step_by(5).map(f64::from) {
            for beta in (0..=20).step_by(5).map(f64::from) {
                if beta >= phi - 5.0 {
                    continue;
                }
                for delta in [0.0, phi / 2.0, 2.0 * phi / 3.0] {
                    let k = compute_active_coefficient(phi, alpha, beta, delta).unwrap();
                    assert!((0.0..=1.0).contains(&k), "K({}, {}, {}, {}) = {}", phi, alpha, beta, delta, k);
                    checked += 1;
                }
            }
        }
    }
    assert!(checked > 100);
}

#[test]
fn coefficient_decreases_with_friction_angle() {
    for (alpha, beta, delta) in [(0.0, 0.0, 0.0), (5.0, 5.0, 10.0), (10.0, 10.0, 15.0), (-5.0, 0.0, 10.0)] {
        let ks: Vec<f64> = (16..40)
            .map(|phi| compute_active_coefficient(f64::from(phi), alpha, beta, delta).unwrap())
            .collect();
        assert!(
            ks.windows(2).all(|w| w[1] < w[0]),
            "K not strictly decreasing for α={} β={} δ={}",
            alpha,
            beta,
            delta
        );
    }

    let k15 = compute_active_coefficient(15.0, 0.0, 0.0, 10.0).unwrap();
    let k40 = compute_active_coefficient(40.0, 0.0, 0.0, 26.7).unwrap();
    assert!((k15 - 0.53).abs() < 0.01);
    assert!((k40 - 0.20).abs() < 0.01);
}

#[test]
fn vanishing_cos_alpha_plus_delta_is_rejected() {
    for (alpha, delta) in [(60.0, 30.0), (45.0, 45.0), (70.0, 20.0)] {
        let err = compute_active_coefficient(35.0, alpha, 0.0, delta).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }), "α={} δ={}: {:?}", alpha, delta, err);

        let err = compute_slip_angle(35.0, alpha, 0.0, delta).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }
}

#[test]
fn negative_radicand_is_domain_error() {
    let err = compute_active_coefficient(25.0, 0.0, 35.0, 10.0).unwrap_err();
    assert_eq!(err.error_code(), "DOMAIN_ERROR");
    assert!(err.to_string().contains("is negative"));
}

#[test]
fn profile_spans_height_with_exact_sample_count() {
    for n in [2usize, 3, 10, 50, 101] {
        let profile = compute_profile(19.0, 6.5, n, 0.31).unwrap();
        assert_eq!(profile.len(), n);

        let points = profile.points();
        assert_eq!(points[0].depth_m, 0.0);
        assert_eq!(points[n - 1].depth_m, 6.5);
        assert!(points.windows(2).all(|w| w[1].depth_m >= w[0].depth_m));
        assert!(points.windows(2).all(|w| w[1].ordinate_kn_m2 >= w[0].ordinate_kn_m2));

        for p in points {
            assert!((p.ordinate_kn_m2 - compute_ordinate(19.0, p.depth_m, 0.31)).abs() < 1e-12);
        }
    }
}

#[test]
fn step_size_callers_derive_sample_count() {
    // 0.25 m spacing over 5 m needs 5/0.25 + 1 samples
    let depths = sample_depths(5.0, 21).unwrap();
    assert!((depths[1] - 0.25).abs() < 1e-12);
    assert_eq!(*depths.last().unwrap(), 5.0);
}

#[test]
fn profile_is_recomputable() {
    let a = compute_profile(20.0, 5.0, 50, 0.44).unwrap();
    let b = compute_profile(20.0, 5.0, 50, 0.44).unwrap();
    assert_eq!(a, b);
}
