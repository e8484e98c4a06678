//! Fixed-step classical Runge–Kutta (RK4) integrator
//!
//! Provides a single RK4 step and a full-trajectory driver, both generic over
//! any [`Dynamics`] (a [`ForceModel`](super::forces::ForceModel) or a custom
//! [`AccelSet`](super::forces::AccelSet)). There is no error control: the step
//! size is fixed for the whole run.

use tracing::debug;

use crate::error::{PropagationError, PropagationResult};
use super::forces::Dynamics;
use super::params::PhysicalParameters;
use super::states::{StateVector, Trajectory};

/// How the sample times cover the span `(t0, tf)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeGrid {
    /// `t0, t0 + h, ...` strictly below `tf`; no partial last step
    #[default]
    HalfOpen,
    /// Fixed grid up to `tf`, plus one shorter step landing exactly on `tf`
    /// when the span is not a multiple of `h`
    Closed,
}

// Ratios within this distance of an integer are treated as exact multiples
const GRID_SNAP: f64 = 1e-9;

/// Largest number of steps a single run may store
pub const MAX_STEPS: usize = 100_000_000;

impl TimeGrid {
    /// Sample times for the span, computed as `t0 + i h` (never accumulated)
    pub fn sample_times(&self, t0: f64, tf: f64, h: f64) -> Vec<f64> {
        let ratio = (tf - t0) / h;
        let nearest = ratio.round();
        let exact = nearest >= 1.0 && (ratio - nearest).abs() < GRID_SNAP;

        match self {
            TimeGrid::HalfOpen => {
                let n = (if exact { nearest } else { ratio.ceil() }) as usize;
                (0..n).map(|i| t0 + i as f64 * h).collect()
            }
            TimeGrid::Closed => {
                let steps = (if exact { nearest } else { ratio.floor() }) as usize;
                let mut times: Vec<f64> = Vec::with_capacity(steps + 2);
                times.extend((0..=steps).map(|i| t0 + i as f64 * h));
                if exact {
                    // land on tf itself, not on a rounded multiple
                    if let Some(last) = times.last_mut() {
                        *last = tf;
                    }
                } else {
                    times.push(tf);
                }
                times
            }
        }
    }
}

/// Advance `y` from `t` by one classical RK4 step of size `h`
///
/// k1 = f(t, y)
/// k2 = f(t + h/2, y + h/2 k1)
/// k3 = f(t + h/2, y + h/2 k2)
/// k4 = f(t + h, y + h k3)
/// y_next = y + h/6 (k1 + 2 k2 + 2 k3 + k4)
pub fn rk4_step<D>(
    dynamics: &D,
    t: f64,
    y: &StateVector,
    h: f64,
    params: &PhysicalParameters,
) -> PropagationResult<StateVector>
where
    D: Dynamics + ?Sized,
{
    let half_h = 0.5 * h;

    let k1 = dynamics.derivative(t, y, params)?;
    let k2 = dynamics.derivative(t + half_h, &(y + half_h * k1), params)?;
    let k3 = dynamics.derivative(t + half_h, &(y + half_h * k2), params)?;
    let k4 = dynamics.derivative(t + h, &(y + h * k3), params)?;

    Ok(y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
}

/// Propagate `y0` over `span` on the half-open grid
pub fn integrate<D>(
    dynamics: &D,
    span: (f64, f64),
    y0: &StateVector,
    h: f64,
    params: &PhysicalParameters,
) -> PropagationResult<Trajectory>
where
    D: Dynamics + ?Sized,
{
    integrate_on_grid(dynamics, span, y0, h, params, TimeGrid::HalfOpen)
}

/// Propagate `y0` over `span` with an explicit time-grid policy
///
/// Any failed force evaluation aborts the whole run.
pub fn integrate_on_grid<D>(
    dynamics: &D,
    span: (f64, f64),
    y0: &StateVector,
    h: f64,
    params: &PhysicalParameters,
    grid: TimeGrid,
) -> PropagationResult<Trajectory>
where
    D: Dynamics + ?Sized,
{
    let (t0, tf) = span;
    if !h.is_finite() || h <= 0.0 {
        return Err(PropagationError::InvalidStepSize(h));
    }
    if !t0.is_finite() || !tf.is_finite() || tf <= t0 {
        return Err(PropagationError::InvalidTimeSpan { t0, tf });
    }
    if !y0.iter().all(|c| c.is_finite()) {
        return Err(PropagationError::NonFiniteState { t: t0 });
    }
    params.validate()?;

    let steps = (tf - t0) / h;
    if !steps.is_finite() || steps > MAX_STEPS as f64 {
        return Err(PropagationError::TooManySteps { steps });
    }

    let times = grid.sample_times(t0, tf, h);

    // Pre-sized storage; row 0 is the initial state as given
    let mut states: Vec<StateVector> = Vec::with_capacity(times.len());
    states.push(*y0);

    for window in times.windows(2) {
        let (t, t_next) = (window[0], window[1]);
        // Only the closed grid's final partial step differs from h
        let dt = if (t_next - t - h).abs() <= GRID_SNAP * h { h } else { t_next - t };
        let y = &states[states.len() - 1];
        let y_next = rk4_step(dynamics, t, y, dt, params)?;
        if !y_next.iter().all(|c| c.is_finite()) {
            return Err(PropagationError::NonFiniteState { t: t_next });
        }
        states.push(y_next);
    }

    debug!(
        samples = times.len(),
        t0,
        t_last = times.last().copied().unwrap_or(t0),
        h,
        ?grid,
        "rk4 propagation finished"
    );

    Ok(Trajectory::new(times, states))
}
