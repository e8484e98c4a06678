use std::f64::consts::{FRAC_PI_4, PI, TAU};

use orbsim::simulation::integrator::{integrate, integrate_on_grid, rk4_step, TimeGrid};
use orbsim::simulation::forces::{AccelSet, Acceleration, Dynamics, ForceModel, J2Oblateness, LunarThirdBody, TwoBodyGravity};
use orbsim::simulation::params::PhysicalParameters;
use orbsim::simulation::states::{position, NVec3, StateVector, Trajectory};
use orbsim::analysis::elements::{ascending_node_angle, inclination, specific_energy, OrbitalElements};
use orbsim::analysis::diagnostics::{
    j2_nodal_precession_rate, linear_fit, max_relative_energy_drift, measured_precession_rate,
    raan_series, radius_series, unwrap_angles,
};
use orbsim::{bench_rk4_step, convergence_study, propagate_batch, PropagationError, Scenario, ScenarioConfig, SweepCase};

const MU: f64 = 3.986e14;

/// Earth/Moon parameters with the rounded mu used throughout the tests
pub fn test_params() -> PhysicalParameters {
    PhysicalParameters::earth().with_mu(MU)
}

/// Circular equatorial state of radius `r0`, starting on the x-axis
pub fn circular_state(r0: f64) -> StateVector {
    StateVector::new(r0, 0.0, 0.0, 0.0, (MU / r0).sqrt(), 0.0)
}

/// Orbital period of a circular orbit of radius `r0`
pub fn period(r0: f64) -> f64 {
    TAU * (r0 * r0 * r0 / MU).sqrt()
}

fn single_term<T: Acceleration>(term: T, t: f64, r: NVec3) -> NVec3 {
    let mut out = NVec3::zeros();
    term.acceleration(t, &r, &test_params(), &mut out).unwrap();
    out
}

fn final_energy_drift(traj: &Trajectory) -> f64 {
    let (_, first) = traj.initial().unwrap();
    let (_, last) = traj.last().unwrap();
    let e0 = specific_energy(first, MU);
    ((specific_energy(last, MU) - e0) / e0).abs()
}

// ==================================================================================
// Force model tests
// ==================================================================================

#[test]
fn two_body_points_toward_primary() {
    let r = NVec3::new(7.0e6, -2.0e6, 1.0e6);
    let a = single_term(TwoBodyGravity, 0.0, r);

    assert!(a.dot(&r) < 0.0, "acceleration is not toward the primary");
    assert!((a.normalize() + r.normalize()).norm() < 1e-12);
    assert!((a.norm() - MU / r.norm_squared()).abs() / a.norm() < 1e-12);
}

#[test]
fn two_body_inverse_square_law() {
    let a_r = single_term(TwoBodyGravity, 0.0, NVec3::new(7.0e6, 0.0, 0.0));
    let a_2r = single_term(TwoBodyGravity, 0.0, NVec3::new(14.0e6, 0.0, 0.0));

    let ratio = a_r.norm() / a_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-12, "Expected 4x, got {}", ratio);
}

#[test]
fn zero_radius_is_rejected() {
    let origin = StateVector::new(0.0, 0.0, 0.0, 10.0, 0.0, 0.0);
    let p = test_params();

    for model in [ForceModel::TwoBody, ForceModel::J2, ForceModel::J2Moon] {
        let err = model.derivative(12.0, &origin, &p).unwrap_err();
        assert_eq!(err, PropagationError::DegenerateState { t: 12.0 });
    }

    let mut out = NVec3::zeros();
    let err = J2Oblateness.acceleration(0.0, &NVec3::zeros(), &p, &mut out).unwrap_err();
    assert_eq!(err, PropagationError::DegenerateState { t: 0.0 });
}

#[test]
fn derivative_carries_velocity_through() {
    let s = StateVector::new(7.0e6, 1.0e5, -3.0e5, 12.0, 7500.0, -40.0);
    let d = ForceModel::J2.derivative(0.0, &s, &test_params()).unwrap();

    assert_eq!(d[0], 12.0);
    assert_eq!(d[1], 7500.0);
    assert_eq!(d[2], -40.0);
}

#[test]
fn j2_term_on_equator_and_pole() {
    let p = test_params();
    let r0: f64 = 7.0e6;
    let factor = 1.5 * p.j2 * p.mu * p.body_radius * p.body_radius / r0.powi(5);

    // equator: z = 0, only the x component, pulling inward
    let eq = single_term(J2Oblateness, 0.0, NVec3::new(r0, 0.0, 0.0));
    assert!((eq.x + factor * r0).abs() / (factor * r0) < 1e-12);
    assert_eq!(eq.y, 0.0);
    assert_eq!(eq.z, 0.0);

    // pole: z = r, x/y vanish and z gets factor * z * (5 - 3)
    let pole = single_term(J2Oblateness, 0.0, NVec3::new(0.0, 0.0, r0));
    assert_eq!(pole.x, 0.0);
    assert_eq!(pole.y, 0.0);
    assert!((pole.z - 2.0 * factor * r0).abs() / (2.0 * factor * r0) < 1e-12);
}

#[test]
fn j2_term_uses_each_axis() {
    let p = test_params();
    let r = NVec3::new(4.0e6, -3.0e6, 5.0e6);
    let a = single_term(J2Oblateness, 0.0, r);

    let r_mag = r.norm();
    let factor = 1.5 * p.j2 * p.mu * p.body_radius * p.body_radius / r_mag.powi(5);
    let zr2 = (r.z / r_mag).powi(2);
    let expected = NVec3::new(
        factor * r.x * (5.0 * zr2 - 1.0),
        factor * r.y * (5.0 * zr2 - 1.0),
        factor * r.z * (5.0 * zr2 - 3.0),
    );
    assert!((a - expected).norm() / expected.norm() < 1e-12, "{:?} vs {:?}", a, expected);
}

#[test]
fn lunar_term_accumulates_every_axis() {
    let p = test_params();
    let t = 50_000.0;
    let r = NVec3::new(1.0e7, 2.0e7, 3.0e6);
    let a = single_term(LunarThirdBody, t, r);

    let angle = p.moon_rate * t;
    let moon = NVec3::new(p.moon_distance * angle.cos(), p.moon_distance * angle.sin(), 0.0);
    let d = moon - r;
    let expected = p.moon_mu * (d / d.norm().powi(3) - moon / p.moon_distance.powi(3));

    for axis in 0..3 {
        assert!(expected[axis] != 0.0);
        assert!(
            (a[axis] - expected[axis]).abs() / expected[axis].abs() < 1e-9,
            "axis {} mismatch: {} vs {}",
            axis,
            a[axis],
            expected[axis]
        );
    }
}

#[test]
fn lunar_term_vanishes_at_primary_centre() {
    // direct and indirect parts cancel at the origin
    let a = single_term(LunarThirdBody, 1234.0, NVec3::zeros());
    assert!(a.norm() < 1e-18, "tidal term at origin: {:?}", a);
}

#[test]
fn satellite_on_the_moon_is_rejected() {
    let p = test_params();
    let on_moon = StateVector::new(p.moon_distance, 0.0, 0.0, 0.0, 0.0, 0.0);
    let err = ForceModel::J2Moon.derivative(0.0, &on_moon, &p).unwrap_err();
    assert_eq!(err, PropagationError::ThirdBodyCollision { t: 0.0 });
}

#[test]
fn force_models_match_their_term_chains() {
    let p = test_params();
    let s = StateVector::new(5.0e6, 4.0e6, 2.5e6, -3000.0, 5000.0, 2000.0);
    let t = 3600.0;

    let chains = [
        (ForceModel::TwoBody, AccelSet::new().with(TwoBodyGravity)),
        (ForceModel::J2, AccelSet::new().with(TwoBodyGravity).with(J2Oblateness)),
        (
            ForceModel::J2Moon,
            AccelSet::new().with(TwoBodyGravity).with(J2Oblateness).with(LunarThirdBody),
        ),
    ];

    for (model, set) in chains {
        assert_eq!(model.terms().len(), set.len());
        assert_eq!(model.derivative(t, &s, &p).unwrap(), set.derivative(t, &s, &p).unwrap());
    }
}

#[test]
fn each_variant_adds_one_term() {
    let p = test_params();
    let s = StateVector::new(5.0e6, 4.0e6, 2.5e6, -3000.0, 5000.0, 2000.0);
    let r = position(&s);
    let t = 100.0;

    let two = ForceModel::TwoBody.derivative(t, &s, &p).unwrap();
    let j2 = ForceModel::J2.derivative(t, &s, &p).unwrap();
    let moon = ForceModel::J2Moon.derivative(t, &s, &p).unwrap();

    let j2_only = single_term(J2Oblateness, t, r);
    let lunar_only = single_term(LunarThirdBody, t, r);

    for axis in 0..3 {
        let da = j2[3 + axis] - two[3 + axis];
        assert!((da - j2_only[axis]).abs() <= 1e-9 * j2_only.norm());
        let db = moon[3 + axis] - j2[3 + axis];
        assert!((db - lunar_only[axis]).abs() <= 1e-6 * lunar_only.norm());
    }
}

#[test]
fn empty_accel_set_is_free_motion() {
    let s = StateVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let y = rk4_step(&AccelSet::new(), 0.0, &s, 6.0, &test_params()).unwrap();
    assert_eq!(y, StateVector::new(25.0, 32.0, 39.0, 4.0, 5.0, 6.0));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn boosted_leo_scenario() {
    let r0 = 6.771e6;
    let v0 = (MU / r0).sqrt() * 1.1;
    let y0 = StateVector::new(r0, 0.0, 0.0, 0.0, v0, 0.0);
    let p = test_params();

    let traj = integrate(&ForceModel::TwoBody, (0.0, 5600.0), &y0, 60.0, &p).unwrap();

    assert_eq!(traj.len(), 94);
    assert_eq!(traj.times()[0], 0.0);
    assert_eq!(traj.times()[93], 5580.0);
    assert_eq!(traj.states()[0], y0);

    // r0 is perigee of the boosted orbit
    for r in radius_series(&traj) {
        assert!(r >= r0 * (1.0 - 1e-3), "radius {} dipped below perigee", r);
    }
    assert!(max_relative_energy_drift(&traj, MU) < 1e-3);
}

#[test]
fn half_open_grid_excludes_end() {
    let grid = TimeGrid::HalfOpen;
    let times = grid.sample_times(0.0, 600.0, 60.0);
    assert_eq!(times.len(), 10);
    assert_eq!(*times.last().unwrap(), 540.0);

    let times = grid.sample_times(100.0, 250.0, 60.0);
    assert_eq!(times, vec![100.0, 160.0, 220.0]);
}

#[test]
fn closed_grid_lands_on_end() {
    let grid = TimeGrid::Closed;
    let times = grid.sample_times(0.0, 600.0, 60.0);
    assert_eq!(times.len(), 11);
    assert_eq!(*times.last().unwrap(), 600.0);

    let times = grid.sample_times(0.0, 650.0, 60.0);
    assert_eq!(times.len(), 12);
    assert_eq!(times[10], 600.0);
    assert_eq!(times[11], 650.0);
}

#[test]
fn closed_grid_final_partial_step() {
    let p = test_params();
    let y0 = circular_state(7.0e6);

    let traj = integrate_on_grid(&ForceModel::TwoBody, (0.0, 650.0), &y0, 60.0, &p, TimeGrid::Closed).unwrap();
    let full = integrate(&ForceModel::TwoBody, (0.0, 700.0), &y0, 60.0, &p).unwrap();

    // shared fixed-grid prefix is identical
    assert_eq!(traj.states()[..11], full.states()[..11]);

    let (t_last, y_last) = traj.last().unwrap();
    let expected = rk4_step(&ForceModel::TwoBody, 600.0, &full.states()[10], 50.0, &p).unwrap();
    assert_eq!(t_last, 650.0);
    assert_eq!(*y_last, expected);
}

#[test]
fn invalid_inputs_are_rejected() {
    let p = test_params();
    let y0 = circular_state(7.0e6);
    let model = ForceModel::TwoBody;

    assert_eq!(
        integrate(&model, (0.0, 100.0), &y0, 0.0, &p).unwrap_err(),
        PropagationError::InvalidStepSize(0.0)
    );
    assert_eq!(
        integrate(&model, (0.0, 100.0), &y0, -5.0, &p).unwrap_err(),
        PropagationError::InvalidStepSize(-5.0)
    );
    assert_eq!(
        integrate(&model, (100.0, 100.0), &y0, 1.0, &p).unwrap_err(),
        PropagationError::InvalidTimeSpan { t0: 100.0, tf: 100.0 }
    );

    let bad = p.with_mu(-1.0);
    assert!(matches!(
        integrate(&model, (0.0, 100.0), &y0, 1.0, &bad),
        Err(PropagationError::InvalidParameters(_))
    ));

    let mut nan_state = y0;
    nan_state[4] = f64::NAN;
    assert_eq!(
        integrate(&model, (0.0, 100.0), &nan_state, 1.0, &p).unwrap_err(),
        PropagationError::NonFiniteState { t: 0.0 }
    );
}

#[test]
fn oversized_step_count_is_rejected() {
    let p = test_params();
    let y0 = circular_state(7.0e6);

    let err = integrate(&ForceModel::TwoBody, (0.0, 1e-300), &y0, 1e-320, &p).unwrap_err();
    assert!(matches!(err, PropagationError::TooManySteps { .. }), "got {:?}", err);

    let err = integrate_on_grid(&ForceModel::TwoBody, (0.0, 1.0e12), &y0, 1.0e-3, &p, TimeGrid::Closed).unwrap_err();
    assert!(matches!(err, PropagationError::TooManySteps { .. }), "got {:?}", err);
}

/// Test term that refuses to evaluate past `limit`
struct FailAfter {
    limit: f64,
}

impl Acceleration for FailAfter {
    fn acceleration(&self, t: f64, _r: &NVec3, _p: &PhysicalParameters, _out: &mut NVec3) -> orbsim::PropagationResult<()> {
        if t > self.limit {
            return Err(PropagationError::DegenerateState { t });
        }
        Ok(())
    }
}

#[test]
fn force_failure_aborts_the_run() {
    let p = test_params();
    let y0 = circular_state(7.0e6);
    let model = AccelSet::new().with(TwoBodyGravity).with(FailAfter { limit: 125.0 });

    // k4 of the step from t = 120 is the first evaluation past the limit
    let err = integrate(&model, (0.0, 600.0), &y0, 10.0, &p).unwrap_err();
    assert_eq!(err, PropagationError::DegenerateState { t: 130.0 });

    assert!(integrate(&model, (0.0, 120.0), &y0, 10.0, &p).is_ok());
}

#[test]
fn circular_orbit_keeps_radius() {
    let r0 = 7.0e6;
    let y0 = circular_state(r0);
    let traj = integrate(&ForceModel::TwoBody, (0.0, 3.0 * period(r0)), &y0, 10.0, &test_params()).unwrap();

    for r in radius_series(&traj) {
        assert!(((r - r0) / r0).abs() < 1e-6, "radius drifted to {}", r);
    }
}

#[test]
fn energy_drift_shrinks_with_step() {
    let r0 = 7.0e6;
    let y0 = circular_state(r0);
    let p = test_params();
    let span = (0.0, 5820.0);

    let coarse = integrate_on_grid(&ForceModel::TwoBody, span, &y0, 60.0, &p, TimeGrid::Closed).unwrap();
    let fine = integrate_on_grid(&ForceModel::TwoBody, span, &y0, 30.0, &p, TimeGrid::Closed).unwrap();

    let drift_coarse = final_energy_drift(&coarse);
    let drift_fine = final_energy_drift(&fine);

    assert!(drift_coarse < 1e-5);
    assert!(drift_fine > 0.0);
    assert!(
        drift_coarse / drift_fine > 10.0,
        "energy drift ratio {} below h^4 scaling",
        drift_coarse / drift_fine
    );
}

#[test]
fn rk4_is_fourth_order() {
    let elements = OrbitalElements { a: 7.0e6, e: 0.05, i: 0.3, raan: 0.5, argp: 1.0, nu: 0.0 };
    let y0 = elements.to_state(MU);

    let rows = convergence_study(&ForceModel::TwoBody, (0.0, 5400.0), &y0, 60.0, &test_params(), 3).unwrap();

    assert_eq!(rows.len(), 3);
    assert!(rows[0].ratio.is_none());
    for row in &rows[1..] {
        let ratio = row.ratio.unwrap();
        assert!((12.0..20.0).contains(&ratio), "h = {}: ratio {}", row.h, ratio);
    }
}

#[test]
fn bench_times_every_model() {
    let rows = bench_rk4_step(&circular_state(7.0e6), 30.0, &test_params(), 10);

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.steps, 10);
        assert!(row.ns_per_step >= 0.0);
    }

    // a degenerate start fails the warm-up step for every model
    let origin = StateVector::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    for row in bench_rk4_step(&origin, 30.0, &test_params(), 10) {
        assert_eq!(row.steps, 0);
    }
}

#[test]
fn integration_is_deterministic() {
    let elements = OrbitalElements { a: 8.0e6, e: 0.1, i: 0.9, raan: 2.0, argp: 0.4, nu: 1.0 };
    let y0 = elements.to_state(MU);
    let p = test_params();

    let a = integrate(&ForceModel::J2Moon, (0.0, 7200.0), &y0, 20.0, &p).unwrap();
    let b = integrate(&ForceModel::J2Moon, (0.0, 7200.0), &y0, 20.0, &p).unwrap();
    assert_eq!(a, b);
}

#[test]
fn batch_matches_sequential_runs() {
    let p = test_params();
    let cases: Vec<SweepCase> = [6.8e6, 7.2e6, 8.0e6]
        .iter()
        .zip([ForceModel::TwoBody, ForceModel::J2, ForceModel::J2Moon])
        .map(|(&r0, model)| SweepCase {
            force_model: model,
            parameters: p,
            initial_state: circular_state(r0),
            span: (0.0, 3000.0),
            h: 30.0,
            time_grid: TimeGrid::HalfOpen,
        })
        .collect();

    let results = propagate_batch(&cases);
    assert_eq!(results.len(), cases.len());
    for (case, result) in cases.iter().zip(results) {
        let expected = integrate(&case.force_model, case.span, &case.initial_state, case.h, &case.parameters).unwrap();
        assert_eq!(result.unwrap(), expected);
    }
}

// ==================================================================================
// Orbital element tests
// ==================================================================================

#[test]
fn equatorial_orbit_node_sentinel() {
    let y0 = circular_state(7.0e6);
    let traj = integrate(&ForceModel::J2, (0.0, 11_000.0), &y0, 20.0, &test_params()).unwrap();

    for omega in raan_series(&traj) {
        assert_eq!(omega, 0.0);
    }
}

#[test]
fn node_angle_quadrants() {
    for raan in [FRAC_PI_4, 0.75 * PI, 1.25 * PI, 1.5 * PI] {
        let el = OrbitalElements { a: 7.0e6, e: 0.0, i: 0.7, raan, argp: 0.0, nu: 0.3 };
        let omega = ascending_node_angle(&el.to_state(MU));
        assert!((omega - raan).abs() < 1e-9, "expected {}, got {}", raan, omega);
        assert!((0.0..TAU).contains(&omega));
    }
}

#[test]
fn node_angle_stays_below_two_pi() {
    // n.y is a tiny negative number here and acos(n.x / |n|) rounds to 0
    let s = StateVector::new(1.0, 0.0, 1e-20, 0.0, 1.0, 1.0);
    let omega = ascending_node_angle(&s);

    assert_eq!(omega, 0.0);
    assert!((0.0..TAU).contains(&omega));
}

#[test]
fn elements_round_trip() {
    let el = OrbitalElements { a: 9.0e6, e: 0.2, i: 1.1, raan: 4.0, argp: 2.5, nu: 0.8 };
    let back = OrbitalElements::from_state(&el.to_state(MU), MU);

    assert!((back.a - el.a).abs() / el.a < 1e-9);
    assert!((back.e - el.e).abs() < 1e-9);
    assert!((back.i - el.i).abs() < 1e-9);
    assert!((back.raan - el.raan).abs() < 1e-9);
    assert!((back.argp - el.argp).abs() < 1e-9);
    assert!((back.nu - el.nu).abs() < 1e-9);
    assert!((inclination(&el.to_state(MU)) - el.i).abs() < 1e-9);
}

#[test]
fn j2_nodal_precession_matches_theory() {
    let p = test_params();
    let el = OrbitalElements::circular(7.0e6, 45f64.to_radians());
    let y0 = el.to_state(p.mu);

    let traj = integrate(&ForceModel::J2, (0.0, 86_400.0), &y0, 30.0, &p).unwrap();

    let measured = measured_precession_rate(&traj).unwrap();
    let analytic = j2_nodal_precession_rate(&el, &p);

    assert!(analytic < 0.0);
    assert!(measured < 0.0, "prograde orbit must regress, got {}", measured);
    assert!(
        ((measured - analytic) / analytic).abs() < 0.05,
        "measured {} vs analytic {}",
        measured,
        analytic
    );
}

#[test]
fn retrograde_node_advances() {
    let p = test_params();
    let el = OrbitalElements::circular(7.0e6, 120f64.to_radians());
    let traj = integrate(&ForceModel::J2, (0.0, 43_200.0), &el.to_state(p.mu), 30.0, &p).unwrap();

    assert!(measured_precession_rate(&traj).unwrap() > 0.0);
    assert!(j2_nodal_precession_rate(&el, &p) > 0.0);
}

// ==================================================================================
// Diagnostics tests
// ==================================================================================

#[test]
fn unwrap_removes_two_pi_jumps() {
    let wrapped = [0.0, 6.2, 6.1, 0.05, 0.1];
    let unwrapped = unwrap_angles(&wrapped);

    assert_eq!(unwrapped[0], 0.0);
    assert!((unwrapped[1] - (6.2 - TAU)).abs() < 1e-12);
    assert!((unwrapped[2] - (6.1 - TAU)).abs() < 1e-12);
    assert!((unwrapped[3] - 0.05).abs() < 1e-12);
    assert!(unwrap_angles(&[]).is_empty());
}

#[test]
fn linear_fit_recovers_line() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys: Vec<f64> = xs.iter().map(|x| 2.5 * x - 1.0).collect();
    let (slope, intercept) = linear_fit(&xs, &ys).unwrap();

    assert!((slope - 2.5).abs() < 1e-12);
    assert!((intercept + 1.0).abs() < 1e-12);
    assert!(linear_fit(&[1.0], &[2.0]).is_none());
    assert!(linear_fit(&[1.0, 1.0], &[2.0, 3.0]).is_none());
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn shipped_leo_scenario_runs() {
    let cfg: ScenarioConfig = serde_yaml::from_str(include_str!("../scenarios/leo_boosted.yaml")).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    let r0 = 6.771e6;
    let v0 = (MU / r0).sqrt() * 1.1;
    assert!((scenario.initial_state[0] - r0).abs() < 1e-6);
    assert!((scenario.initial_state[4] - v0).abs() < 1e-9);

    let traj = scenario.run().unwrap();
    let report = scenario.report(&traj).unwrap();
    assert_eq!(report.samples, 94);
    assert_eq!(report.final_time, 5580.0);
    assert!(report.energy_drift < 1e-3);
    assert!(report.precession_rate.is_none());
}

#[test]
fn j2_scenario_reports_precession() {
    let yaml = r#"
engine:
  force_model: "j2"
  time_grid: "closed"
parameters:
  t_end: 21600.0
  h0: 30.0
body:
  mu: 3.986e14
initial:
  elements:
    a: 7000000.0
    i_deg: 45.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();
    assert_eq!(scenario.engine.force_model, ForceModel::J2);
    assert_eq!(scenario.engine.time_grid, TimeGrid::Closed);

    let traj = scenario.run().unwrap();
    assert_eq!(traj.last().unwrap().0, 21600.0);

    let report = scenario.report(&traj).unwrap();
    assert!(report.precession_rate.unwrap() < 0.0);
    assert!(report.analytic_precession_rate.unwrap() < 0.0);
}

#[test]
fn scenario_needs_exactly_one_initial_condition() {
    let yaml = r#"
engine:
  force_model: "two_body"
parameters:
  t_end: 100.0
  h0: 10.0
initial:
  state: [7000000.0, 0.0, 0.0, 0.0, 7546.0, 0.0]
  circular:
    altitude: 400000.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    assert!(Scenario::build_scenario(cfg).is_err());

    let short = r#"
engine:
  force_model: "two_body"
parameters:
  t_end: 100.0
  h0: 10.0
initial:
  state: [7000000.0, 0.0, 0.0]
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(short).unwrap();
    assert!(Scenario::build_scenario(cfg).is_err());
}
