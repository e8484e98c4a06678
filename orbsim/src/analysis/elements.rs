//! Orbital elements from Cartesian states and back.
//!
//! The ascending-node angle is the main diagnostic: under J2 it drifts
//! secularly and its slope gives the nodal precession rate.

use std::f64::consts::TAU;

use crate::simulation::states::{position, state_from_parts, velocity, NVec3, StateVector};

// Below this eccentricity the orbit is treated as circular
const CIRCULAR_EPS: f64 = 1e-10;

/// Right ascension of the ascending node, in `[0, 2pi)`.
///
/// Returns `0.0` for equatorial orbits, where the line of nodes is undefined.
/// That sentinel cannot be told apart from a genuine `0` node angle.
pub fn ascending_node_angle(state: &StateVector) -> f64 {
    let h = angular_momentum(state);
    let n = node_vector(&h);
    let n_mag = n.norm();
    if n_mag == 0.0 {
        return 0.0;
    }

    let omega = (n.x / n_mag).clamp(-1.0, 1.0).acos();
    // acos can round to 0 for a tiny negative n.y; keep the result below 2pi
    if n.y < 0.0 && omega > 0.0 {
        TAU - omega
    } else {
        omega
    }
}

/// Specific angular momentum `r x v`
pub fn angular_momentum(state: &StateVector) -> NVec3 {
    position(state).cross(&velocity(state))
}

/// Line of nodes `z_hat x h = (-h_y, h_x, 0)`
fn node_vector(h: &NVec3) -> NVec3 {
    NVec3::new(-h.y, h.x, 0.0)
}

/// Inclination of the orbit plane to the reference plane, in `[0, pi]`
pub fn inclination(state: &StateVector) -> f64 {
    let h = angular_momentum(state);
    let h_mag = h.norm();
    if h_mag == 0.0 {
        return 0.0;
    }
    (h.z / h_mag).clamp(-1.0, 1.0).acos()
}

/// Specific orbital energy `|v|^2 / 2 - mu / r`
pub fn specific_energy(state: &StateVector, mu: f64) -> f64 {
    0.5 * velocity(state).norm_squared() - mu / position(state).norm()
}

/// Classical Keplerian elements; angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub a: f64, // semi-major axis (m)
    pub e: f64, // eccentricity
    pub i: f64, // inclination
    pub raan: f64, // right ascension of the ascending node
    pub argp: f64, // argument of periapsis
    pub nu: f64, // true anomaly
}

impl OrbitalElements {
    /// Circular orbit of radius `a` starting at the ascending node
    pub fn circular(a: f64, i: f64) -> Self {
        Self { a, e: 0.0, i, raan: 0.0, argp: 0.0, nu: 0.0 }
    }

    /// Osculating elements of a bound state.
    ///
    /// For circular orbits `argp` is zero and `nu` is measured from the
    /// ascending node (or from the x-axis if the orbit is also equatorial).
    pub fn from_state(state: &StateVector, mu: f64) -> Self {
        let r = position(state);
        let v = velocity(state);
        let r_mag = r.norm();

        let h = r.cross(&v);
        let n = node_vector(&h);
        let n_mag = n.norm();

        let e_vec = ((v.norm_squared() - mu / r_mag) * r - r.dot(&v) * v) / mu;
        let e = e_vec.norm();

        let energy = specific_energy(state, mu);
        let a = -mu / (2.0 * energy);

        let i = inclination(state);
        let raan = ascending_node_angle(state);

        // angle between two vectors, flipped into (pi, 2pi) when `flip` holds
        let angle = |u: &NVec3, w: &NVec3, flip: bool| {
            let c = (u.dot(w) / (u.norm() * w.norm())).clamp(-1.0, 1.0);
            let theta = c.acos();
            if flip { TAU - theta } else { theta }
        };

        let (argp, nu) = if e > CIRCULAR_EPS {
            let argp = if n_mag > 0.0 { angle(&n, &e_vec, e_vec.z < 0.0) } else {
                // equatorial: longitude of periapsis
                let lon = e_vec.y.atan2(e_vec.x);
                lon.rem_euclid(TAU)
            };
            (argp, angle(&e_vec, &r, r.dot(&v) < 0.0))
        } else if n_mag > 0.0 {
            // argument of latitude
            (0.0, angle(&n, &r, r.z < 0.0))
        } else {
            // true longitude
            (0.0, r.y.atan2(r.x).rem_euclid(TAU))
        };

        Self { a, e, i, raan, argp, nu }
    }

    /// Cartesian state through the perifocal-to-inertial rotation
    pub fn to_state(&self, mu: f64) -> StateVector {
        let p = self.semi_latus_rectum();
        let r_pf = p / (1.0 + self.e * self.nu.cos());

        let (sin_raan, cos_raan) = self.raan.sin_cos();
        let (sin_argp, cos_argp) = self.argp.sin_cos();
        let (sin_i, cos_i) = self.i.sin_cos();

        // perifocal unit vectors in the inertial frame
        let p_hat = NVec3::new(
            cos_raan * cos_argp - sin_raan * sin_argp * cos_i,
            sin_raan * cos_argp + cos_raan * sin_argp * cos_i,
            sin_argp * sin_i,
        );
        let q_hat = NVec3::new(
            -cos_raan * sin_argp - sin_raan * cos_argp * cos_i,
            -sin_raan * sin_argp + cos_raan * cos_argp * cos_i,
            cos_argp * sin_i,
        );

        let (sin_nu, cos_nu) = self.nu.sin_cos();
        let r = r_pf * (cos_nu * p_hat + sin_nu * q_hat);
        let v = (mu / p).sqrt() * (-sin_nu * p_hat + (self.e + cos_nu) * q_hat);
        state_from_parts(&r, &v)
    }

    /// `p = a (1 - e^2)`
    pub fn semi_latus_rectum(&self) -> f64 {
        self.a * (1.0 - self.e * self.e)
    }

    /// `n = sqrt(mu / a^3)`
    pub fn mean_motion(&self, mu: f64) -> f64 {
        (mu / (self.a * self.a * self.a)).sqrt()
    }

    /// Orbital period `2pi / n`
    pub fn period(&self, mu: f64) -> f64 {
        TAU / self.mean_motion(mu)
    }
}
