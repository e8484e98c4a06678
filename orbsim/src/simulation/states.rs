//! Core state types for orbit propagation.
//!
//! Defines the satellite state vector and the trajectory record:
//! - `StateVector` is `[x, y, z, vx, vy, vz]` in meters and meters/second,
//!   in an inertial frame centred on the primary body
//! - a derivative vector uses the same type and ordering, `[vx, vy, vz, ax, ay, az]`
//! - `Trajectory` holds parallel time and state sequences produced by the integrator

use nalgebra::{Vector3, Vector6};

pub type NVec3 = Vector3<f64>;
pub type StateVector = Vector6<f64>;

/// Position part of a state vector
pub fn position(state: &StateVector) -> NVec3 {
    state.fixed_rows::<3>(0).into_owned()
}

/// Velocity part of a state vector
pub fn velocity(state: &StateVector) -> NVec3 {
    state.fixed_rows::<3>(3).into_owned()
}

/// Pack a position/velocity pair (or velocity/acceleration pair) into one vector
pub fn state_from_parts(r: &NVec3, v: &NVec3) -> StateVector {
    StateVector::new(r.x, r.y, r.z, v.x, v.y, v.z)
}

/// Propagated history: `times[i]` is the epoch of `states[i]`.
///
/// Built once by the integrator and read-only afterwards. Each row is an
/// independent value, so diagnostics may index and transform rows freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<StateVector>,
}

impl Trajectory {
    pub(crate) fn new(times: Vec<f64>, states: Vec<StateVector>) -> Self {
        debug_assert_eq!(times.len(), states.len());
        Self { times, states }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn states(&self) -> &[StateVector] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First sample, always the unmodified initial state
    pub fn initial(&self) -> Option<(f64, &StateVector)> {
        Some((*self.times.first()?, self.states.first()?))
    }

    /// Last sample
    pub fn last(&self) -> Option<(f64, &StateVector)> {
        Some((*self.times.last()?, self.states.last()?))
    }

    /// Iterate over `(t, state)` rows in time order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &StateVector)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }
}
