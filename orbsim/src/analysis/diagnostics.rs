//! Trajectory diagnostics: energy drift, node-angle series and precession rate

use std::f64::consts::{PI, TAU};

use crate::analysis::elements::{ascending_node_angle, specific_energy, OrbitalElements};
use crate::simulation::params::PhysicalParameters;
use crate::simulation::states::{position, Trajectory};

/// Specific orbital energy at every sample
pub fn energy_series(traj: &Trajectory, mu: f64) -> Vec<f64> {
    traj.states().iter().map(|s| specific_energy(s, mu)).collect()
}

/// Largest `|E(t) - E(t0)| / |E(t0)|` over the trajectory
pub fn max_relative_energy_drift(traj: &Trajectory, mu: f64) -> f64 {
    let energies = energy_series(traj, mu);
    let Some(&e0) = energies.first() else {
        return 0.0;
    };
    energies
        .iter()
        .map(|e| ((e - e0) / e0).abs())
        .fold(0.0, f64::max)
}

/// Distance from the primary at every sample
pub fn radius_series(traj: &Trajectory) -> Vec<f64> {
    traj.states().iter().map(|s| position(s).norm()).collect()
}

/// Ascending-node angle at every sample, each wrapped to `[0, 2pi)`
pub fn raan_series(traj: &Trajectory) -> Vec<f64> {
    traj.states().iter().map(ascending_node_angle).collect()
}

/// Remove `2pi` jumps so consecutive angles never differ by more than `pi`
pub fn unwrap_angles(angles: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(angles.len());
    let mut offset = 0.0;
    let mut prev: Option<f64> = None;

    for &angle in angles {
        if let Some(p) = prev {
            let delta = angle - p;
            if delta > PI || delta < -PI {
                offset -= TAU * (delta / TAU).round();
            }
        }
        prev = Some(angle);
        out.push(angle + offset);
    }
    out
}

/// Least-squares line through `(xs, ys)`, returned as `(slope, intercept)`.
///
/// `None` when fewer than two points are given or all `xs` coincide.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let x_mean = xs[..n].iter().sum::<f64>() / nf;
    let y_mean = ys[..n].iter().sum::<f64>() / nf;

    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, y_mean - slope * x_mean))
}

/// Measured nodal drift: slope of the unwrapped node angle against time (rad/s)
pub fn measured_precession_rate(traj: &Trajectory) -> Option<f64> {
    let omega = unwrap_angles(&raan_series(traj));
    linear_fit(traj.times(), &omega).map(|(slope, _)| slope)
}

/// Secular J2 nodal drift `-1.5 J2 (R/p)^2 n cos i` (rad/s)
pub fn j2_nodal_precession_rate(elements: &OrbitalElements, params: &PhysicalParameters) -> f64 {
    let p = elements.semi_latus_rectum();
    let n = elements.mean_motion(params.mu);
    let ratio = params.body_radius / p;
    -1.5 * params.j2 * ratio * ratio * n * elements.i.cos()
}
