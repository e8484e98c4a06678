//! High-level runtime propagation settings
//!
//! Selects the force model, time-grid policy, span and step size
//! used when running a `Scenario`

use super::forces::ForceModel;
use super::integrator::TimeGrid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    pub force_model: ForceModel, // two-body, +J2 or +J2+moon
    pub time_grid: TimeGrid, // half-open or closed
    pub t0: f64, // start time
    pub t_end: f64, // end time
    pub h0: f64, // fixed step size
}

impl Engine {
    pub fn span(&self) -> (f64, f64) {
        (self.t0, self.t_end)
    }
}
