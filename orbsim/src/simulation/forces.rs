//! Force / acceleration contributors for the propagator
//!
//! Defines the acceleration-term trait, an open builder-style set of terms,
//! and the closed set of force models (two-body, +J2, +J2+Moon) selected
//! by the caller. Every term is additive; a model is the sum of its terms.

use crate::error::{PropagationError, PropagationResult};
use crate::simulation::params::PhysicalParameters;
use crate::simulation::states::{position, state_from_parts, velocity, NVec3, StateVector};

/// Anything that maps `(t, state, params)` to the state derivative
/// `[vx, vy, vz, ax, ay, az]`. This is what the integrator drives.
pub trait Dynamics {
    fn derivative(
        &self,
        t: f64,
        state: &StateVector,
        params: &PhysicalParameters,
    ) -> PropagationResult<StateVector>;
}

/// Trait for acceleration sources acting on the satellite.
/// Implementations add their contribution into `out`.
pub trait Acceleration {
    fn acceleration(
        &self,
        t: f64,
        r: &NVec3,
        params: &PhysicalParameters,
        out: &mut NVec3,
    ) -> PropagationResult<()>;
}

/// Collection of acceleration terms (central gravity, J2, third body, ...)
/// Each term implements [`Acceleration`] and their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration at time `t` for a satellite at `r`
    pub fn accumulate_accel(
        &self,
        t: f64,
        r: &NVec3,
        params: &PhysicalParameters,
    ) -> PropagationResult<NVec3> {
        sum_terms(self.terms.iter().map(|term| term.as_ref()), t, r, params)
    }
}

/// Sum the contributions of `terms` in order, starting from zero
fn sum_terms<'a, T, I>(
    terms: I,
    t: f64,
    r: &NVec3,
    params: &PhysicalParameters,
) -> PropagationResult<NVec3>
where
    T: Acceleration + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = NVec3::zeros();
    for term in terms {
        term.acceleration(t, r, params, &mut out)?;
    }
    Ok(out)
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Dynamics for AccelSet {
    fn derivative(
        &self,
        t: f64,
        state: &StateVector,
        params: &PhysicalParameters,
    ) -> PropagationResult<StateVector> {
        let r = position(state);
        let a = self.accumulate_accel(t, &r, params)?;
        Ok(state_from_parts(&velocity(state), &a))
    }
}

/// Squared radius, rejecting the origin and non-finite positions
fn checked_r2(t: f64, r: &NVec3) -> PropagationResult<f64> {
    if !r.iter().all(|c| c.is_finite()) {
        return Err(PropagationError::NonFiniteState { t });
    }
    let r2 = r.norm_squared();
    if r2 == 0.0 {
        return Err(PropagationError::DegenerateState { t });
    }
    Ok(r2)
}

/// Central inverse-square gravity of the primary: `a = -mu r / |r|^3`
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoBodyGravity;

impl Acceleration for TwoBodyGravity {
    fn acceleration(
        &self,
        t: f64,
        r: &NVec3,
        params: &PhysicalParameters,
        out: &mut NVec3,
    ) -> PropagationResult<()> {
        let r2 = checked_r2(t, r)?;
        let inv_r = r2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;
        *out -= (params.mu * inv_r3) * *r;
        Ok(())
    }
}

/// Oblateness correction of the primary.
///
/// With `factor = 1.5 J2 mu R^2 / r^5` the term adds
/// `factor * x * (5 (z/r)^2 - 1)` on x and y and
/// `factor * z * (5 (z/r)^2 - 3)` on z, using the current radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct J2Oblateness;

impl Acceleration for J2Oblateness {
    fn acceleration(
        &self,
        t: f64,
        r: &NVec3,
        params: &PhysicalParameters,
        out: &mut NVec3,
    ) -> PropagationResult<()> {
        let r2 = checked_r2(t, r)?;
        let r_mag = r2.sqrt();
        let r5 = r2 * r2 * r_mag;

        let factor = 1.5 * params.j2 * params.mu * params.body_radius * params.body_radius / r5;
        let z2_r2 = r.z * r.z / r2;

        out.x += factor * r.x * (5.0 * z2_r2 - 1.0);
        out.y += factor * r.y * (5.0 * z2_r2 - 1.0);
        out.z += factor * r.z * (5.0 * z2_r2 - 3.0);
        Ok(())
    }
}

/// Lunar perturbation with direct and indirect (tidal) parts.
///
/// The Moon moves on a circle in the reference plane:
/// `moon = (D cos wt, D sin wt, 0)`. With `d = moon - r` the term adds
/// `mu_moon * (d / |d|^3 - moon / D^3)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunarThirdBody;

impl LunarThirdBody {
    /// Moon position at time `t`
    pub fn moon_position(t: f64, params: &PhysicalParameters) -> NVec3 {
        let angle = params.moon_rate * t;
        NVec3::new(
            params.moon_distance * angle.cos(),
            params.moon_distance * angle.sin(),
            0.0,
        )
    }
}

impl Acceleration for LunarThirdBody {
    fn acceleration(
        &self,
        t: f64,
        r: &NVec3,
        params: &PhysicalParameters,
        out: &mut NVec3,
    ) -> PropagationResult<()> {
        let moon = Self::moon_position(t, params);

        // satellite -> moon
        let d = moon - *r;
        let d2 = d.norm_squared();
        if d2 == 0.0 {
            return Err(PropagationError::ThirdBodyCollision { t });
        }
        let inv_d = d2.sqrt().recip();
        let inv_d3 = inv_d * inv_d * inv_d;

        let dist = params.moon_distance;
        let inv_dist3 = (dist * dist * dist).recip();

        // per-axis accumulation through the vector sum
        *out += params.moon_mu * (inv_d3 * d - inv_dist3 * moon);
        Ok(())
    }
}

type TermList = &'static [&'static (dyn Acceleration + Sync)];

const TWO_BODY_TERMS: TermList = &[&TwoBodyGravity];
const J2_TERMS: TermList = &[&TwoBodyGravity, &J2Oblateness];
const J2_MOON_TERMS: TermList = &[&TwoBodyGravity, &J2Oblateness, &LunarThirdBody];

/// Closed set of force models; each variant extends the previous one by one term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceModel {
    #[default]
    TwoBody,
    J2,
    J2Moon,
}

impl ForceModel {
    /// The additive terms making up this model, in summation order
    pub fn terms(&self) -> TermList {
        match self {
            ForceModel::TwoBody => TWO_BODY_TERMS,
            ForceModel::J2 => J2_TERMS,
            ForceModel::J2Moon => J2_MOON_TERMS,
        }
    }

    pub fn includes_j2(&self) -> bool {
        matches!(self, ForceModel::J2 | ForceModel::J2Moon)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ForceModel::TwoBody => "two-body",
            ForceModel::J2 => "two-body + J2",
            ForceModel::J2Moon => "two-body + J2 + moon",
        }
    }
}

impl Dynamics for ForceModel {
    fn derivative(
        &self,
        t: f64,
        state: &StateVector,
        params: &PhysicalParameters,
    ) -> PropagationResult<StateVector> {
        let r = position(state);
        let a = sum_terms(self.terms().iter().copied(), t, &r, params)?;
        Ok(state_from_parts(&velocity(state), &a))
    }
}
