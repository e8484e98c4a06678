//! Parallel propagation of independent trajectories (parameter sweeps)
//!
//! A single trajectory is strictly sequential. Separate cases share nothing
//! mutable, so they are spread over the rayon thread pool.

use rayon::prelude::*;

use crate::error::PropagationResult;
use super::forces::ForceModel;
use super::integrator::{integrate_on_grid, TimeGrid};
use super::params::PhysicalParameters;
use super::states::{StateVector, Trajectory};

/// One isolated propagation: its own model, parameters, state and grid
#[derive(Debug, Clone, PartialEq)]
pub struct SweepCase {
    pub force_model: ForceModel,
    pub parameters: PhysicalParameters,
    pub initial_state: StateVector,
    pub span: (f64, f64),
    pub h: f64,
    pub time_grid: TimeGrid,
}

/// Propagate every case; results keep the order of `cases`
pub fn propagate_batch(cases: &[SweepCase]) -> Vec<PropagationResult<Trajectory>> {
    cases
        .par_iter()
        .map(|case| {
            integrate_on_grid(
                &case.force_model,
                case.span,
                &case.initial_state,
                case.h,
                &case.parameters,
                case.time_grid,
            )
        })
        .collect()
}
