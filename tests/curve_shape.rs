//! Shape properties shared by the whole curve family.
//!
//! These tests pin the derived statistics to the curves themselves: the
//! reported maximum must match what a dense numeric sweep of `recruit`
//! actually finds, and dome-shaped curves must rise monotonically to the
//! reported peak and fall beyond it.

use approx::assert_relative_eq;
use spawner_recruit::{
    BevertonHolt, Cushing, DerisoSchnute, Gamma, LudwigWalters, Ricker, Shepherd, SpawnerRecruit,
};

/// Evaluates the curve on a dense uniform grid over `[0, upper]` and returns
/// the largest recruitment found.
fn sweep_max<M: SpawnerRecruit<f64>>(curve: &M, upper: f64) -> f64 {
    let steps = 200_000;
    (0..=steps)
        .map(|i| curve.recruit(upper * f64::from(i) / f64::from(steps)))
        .fold(0.0, f64::max)
}

/// Asserts that recruitment strictly increases up to the peak and strictly
/// decreases beyond it.
fn assert_dome_shape<M: SpawnerRecruit<f64>>(curve: &M) {
    let (spawners_at_max, max) = curve.max_spawn_recruits();
    assert!(spawners_at_max.is_finite());
    assert_relative_eq!(curve.recruit(spawners_at_max), max, max_relative = 1e-12);

    let samples = 100;
    for i in 1..samples {
        let below_a = spawners_at_max * f64::from(i - 1) / f64::from(samples);
        let below_b = spawners_at_max * f64::from(i) / f64::from(samples);
        assert!(
            curve.recruit(below_a) < curve.recruit(below_b),
            "curve must rise below its peak (S = {below_a} vs {below_b})"
        );

        let above_a = spawners_at_max * (1.0 + f64::from(i - 1) / f64::from(samples));
        let above_b = spawners_at_max * (1.0 + f64::from(i) / f64::from(samples));
        assert!(
            curve.recruit(above_a) > curve.recruit(above_b),
            "curve must fall above its peak (S = {above_a} vs {above_b})"
        );
    }
}

#[test]
fn no_spawners_produce_no_recruits() {
    assert_eq!(BevertonHolt::new(2.0, 0.5).recruit(0.0), 0.0);
    assert_eq!(Ricker::new(3.0, 0.1).recruit(0.0), 0.0);
    assert_eq!(LudwigWalters::new(2.5, 0.05, 1.3).recruit(0.0), 0.0);
    assert_eq!(Cushing::new(1.0, 0.5).recruit(0.0), 0.0);
    assert_eq!(DerisoSchnute::new(2.0, 0.01, 0.5).recruit(0.0), 0.0);
    assert_eq!(Shepherd::new(2.0, 0.05, 2.5).recruit(0.0), 0.0);
    assert_eq!(Gamma::new(3.0, 0.1, 2.0).unwrap().recruit(0.0), 0.0);
}

#[test]
fn recruitment_is_nonnegative_within_each_domain() {
    let spawners = [0.0, 0.1, 1.0, 7.3, 42.0, 199.0];

    for s in spawners {
        assert!(BevertonHolt::new(2.0, 0.5).recruit(s) >= 0.0);
        assert!(Ricker::new(3.0, 0.1).recruit(s) >= 0.0);
        assert!(LudwigWalters::new(2.5, 0.05, 1.3).recruit(s) >= 0.0);
        assert!(Cushing::new(1.0, 0.5).recruit(s) >= 0.0);
        assert!(Shepherd::new(2.0, 0.05, 2.5).recruit(s) >= 0.0);
        assert!(Gamma::new(3.0, 0.1, 2.0).unwrap().recruit(s) >= 0.0);
        // Deriso-Schnute is only defined up to S = 1/(beta * gamma) = 200.
        assert!(DerisoSchnute::new(2.0, 0.01, 0.5).recruit(s) >= 0.0);
    }
}

#[test]
fn reported_max_matches_a_dense_sweep_for_dome_curves() {
    let ricker = Ricker::new(3.0, 0.1);
    assert_relative_eq!(sweep_max(&ricker, 100.0), ricker.max_recruits(), max_relative = 1e-8);

    let ludwig_walters = LudwigWalters::new(2.5, 0.05, 1.3);
    let (peak, _) = ludwig_walters.max_spawn_recruits();
    assert_relative_eq!(
        sweep_max(&ludwig_walters, 10.0 * peak),
        ludwig_walters.max_recruits(),
        max_relative = 1e-8
    );

    let deriso_schnute = DerisoSchnute::new(2.0, 0.01, 0.5);
    // Sweep the full biological domain, which ends at S = 1/(beta * gamma).
    assert_relative_eq!(
        sweep_max(&deriso_schnute, 200.0),
        deriso_schnute.max_recruits(),
        max_relative = 1e-8
    );

    let shepherd = Shepherd::new(2.0, 0.05, 2.5);
    let (peak, _) = shepherd.max_spawn_recruits();
    assert_relative_eq!(
        sweep_max(&shepherd, 10.0 * peak),
        shepherd.max_recruits(),
        max_relative = 1e-8
    );

    let gamma = Gamma::new(3.0, 0.1, 2.0).unwrap();
    assert_relative_eq!(sweep_max(&gamma, 200.0), gamma.max_recruits(), max_relative = 1e-8);
}

#[test]
fn monotone_curves_never_exceed_their_supremum() {
    let beverton_holt = BevertonHolt::new(2.0, 0.5);
    let swept = sweep_max(&beverton_holt, 1e6);
    assert!(swept < beverton_holt.max_recruits());
    assert_relative_eq!(swept, beverton_holt.max_recruits(), max_relative = 1e-5);

    // Unbounded curves report an infinite supremum, so any finite sweep
    // stays below it.
    assert!(sweep_max(&Cushing::new(1.0, 0.5), 1e6) < Cushing::new(1.0, 0.5).max_recruits());
    let shepherd = Shepherd::new(2.0, 0.5, 0.5);
    assert!(sweep_max(&shepherd, 1e6) < shepherd.max_recruits());
}

#[test]
fn dome_curves_rise_to_the_peak_and_fall_beyond_it() {
    assert_dome_shape(&Ricker::new(3.0, 0.1));
    assert_dome_shape(&LudwigWalters::new(2.5, 0.05, 1.3));
    assert_dome_shape(&DerisoSchnute::new(2.0, 0.01, 0.5));
    assert_dome_shape(&Shepherd::new(2.0, 0.05, 2.5));
    assert_dome_shape(&Gamma::new(3.0, 0.1, 2.0).unwrap());
}

#[test]
fn shepherd_at_unit_gamma_is_beverton_holt() {
    let shepherd = Shepherd::new(2.0, 0.5, 1.0);
    let beverton_holt = BevertonHolt::new(2.0, 0.5);

    for s in [0.0, 0.5, 2.0, 10.0, 1e4] {
        assert_relative_eq!(shepherd.recruit(s), beverton_holt.recruit(s));
    }
    assert_eq!(shepherd.max_recruits(), beverton_holt.max_recruits());
    assert_eq!(
        shepherd.max_spawn_recruits(),
        beverton_holt.max_spawn_recruits()
    );
}

#[test]
fn gamma_at_unit_exponent_is_ricker() {
    let gamma = Gamma::new(3.0, 0.1, 1.0).unwrap();
    let ricker = Ricker::new(3.0, 0.1);

    for s in [0.0, 0.5, 2.0, 10.0, 100.0] {
        assert_relative_eq!(gamma.recruit(s), ricker.recruit(s), max_relative = 1e-12);
    }
    assert_relative_eq!(gamma.max_recruits(), ricker.max_recruits(), max_relative = 1e-12);
    let (gamma_peak, _) = gamma.max_spawn_recruits();
    let (ricker_peak, _) = ricker.max_spawn_recruits();
    assert_relative_eq!(gamma_peak, ricker_peak);
}
