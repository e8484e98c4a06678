//! Physical parameters for the propagation
//!
//! `PhysicalParameters` holds the immutable constants read by the force models:
//! - gravitational parameter and radius of the primary (`mu`, `body_radius`),
//! - oblateness coefficient (`j2`),
//! - third-body gravitational parameter, distance and angular rate
//!   (`moon_mu`, `moon_distance`, `moon_rate`)

use crate::error::{PropagationError, PropagationResult};

pub const G: f64 = 6.67430e-11; // gravitational constant (m^3 kg^-1 s^-2)
pub const M_EARTH: f64 = 5.972e24; // mass of the Earth (kg)
pub const MU_EARTH: f64 = G * M_EARTH; // standard gravitational parameter (m^3 s^-2)
pub const R_EARTH: f64 = 6_371_000.0; // mean radius of the Earth (m)
pub const J2_EARTH: f64 = 1.08262668e-3;

pub const MU_MOON: f64 = 4.9048695e12; // m^3 s^-2
pub const MOON_DISTANCE: f64 = 3.844e8; // mean Earth-Moon distance (m)
pub const MOON_RATE: f64 = 2.6617e-6; // mean lunar angular rate (rad/s)

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    pub mu: f64, // gravitational parameter of the primary
    pub body_radius: f64, // equatorial radius used by J2
    pub j2: f64, // oblateness coefficient
    pub moon_mu: f64, // third-body gravitational parameter
    pub moon_distance: f64, // third-body orbit radius
    pub moon_rate: f64, // third-body angular rate
}

impl PhysicalParameters {
    /// Earth primary with the Moon as third body
    pub fn earth() -> Self {
        Self {
            mu: MU_EARTH,
            body_radius: R_EARTH,
            j2: J2_EARTH,
            moon_mu: MU_MOON,
            moon_distance: MOON_DISTANCE,
            moon_rate: MOON_RATE,
        }
    }

    /// Same parameters with a different primary gravitational parameter
    pub fn with_mu(self, mu: f64) -> Self {
        Self { mu, ..self }
    }

    /// Reject values the force models cannot evaluate
    pub fn validate(&self) -> PropagationResult<()> {
        let positive = [
            ("mu", self.mu),
            ("body_radius", self.body_radius),
            ("moon_distance", self.moon_distance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PropagationError::InvalidParameters(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        let non_negative = [("j2", self.j2), ("moon_mu", self.moon_mu)];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PropagationError::InvalidParameters(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !self.moon_rate.is_finite() {
            return Err(PropagationError::InvalidParameters(format!(
                "moon_rate must be finite, got {}",
                self.moon_rate
            )));
        }
        Ok(())
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self::earth()
    }
}
