use std::time::Instant;

use tracing::info;

use crate::error::PropagationResult;
use crate::simulation::forces::{Dynamics, ForceModel};
use crate::simulation::integrator::{integrate_on_grid, rk4_step, TimeGrid};
use crate::simulation::params::PhysicalParameters;
use crate::simulation::states::{position, NVec3, StateVector};

/// One level of a step-halving study
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceRow {
    pub h: f64,
    pub error: f64, // final position error against the reference (m)
    pub ratio: Option<f64>, // error of the previous (coarser) level over this one
}

/// Integrate with `h, h/2, ...` (`levels` runs) and compare final positions
/// against a reference run at 1/16 of the finest step.
///
/// Uses the closed grid so every run ends exactly on `span.1`.
/// RK4 should show ratios near 16.
pub fn convergence_study<D>(
    dynamics: &D,
    span: (f64, f64),
    y0: &StateVector,
    h: f64,
    params: &PhysicalParameters,
    levels: usize,
) -> PropagationResult<Vec<ConvergenceRow>>
where
    D: Dynamics + ?Sized,
{
    let finest = h / 2f64.powi(levels.saturating_sub(1) as i32);
    let reference = final_position(dynamics, span, y0, finest / 16.0, params)?;

    let mut rows: Vec<ConvergenceRow> = Vec::with_capacity(levels);
    for level in 0..levels {
        let step = h / 2f64.powi(level as i32);
        let error = (final_position(dynamics, span, y0, step, params)? - reference).norm();
        let ratio = rows.last().map(|prev| prev.error / error);
        info!(h = step, error, ?ratio, "convergence level");
        rows.push(ConvergenceRow { h: step, error, ratio });
    }
    Ok(rows)
}

fn final_position<D>(
    dynamics: &D,
    span: (f64, f64),
    y0: &StateVector,
    h: f64,
    params: &PhysicalParameters,
) -> PropagationResult<NVec3>
where
    D: Dynamics + ?Sized,
{
    let traj = integrate_on_grid(dynamics, span, y0, h, params, TimeGrid::Closed)?;
    let (_, last) = traj.last().unwrap_or((span.0, y0));
    Ok(position(last))
}

/// Timing of one force model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchRow {
    pub model: ForceModel,
    pub steps: usize, // steps completed before any failure
    pub ns_per_step: f64,
}

/// Time single RK4 steps for each force model
/// Paste output directly into a spreadsheet to compare
pub fn bench_rk4_step(y0: &StateVector, h: f64, params: &PhysicalParameters, steps: usize) -> Vec<BenchRow> {
    println!("model,ns_per_step");

    let mut rows = Vec::with_capacity(3);
    for model in [ForceModel::TwoBody, ForceModel::J2, ForceModel::J2Moon] {
        let mut y = *y0;
        let mut t = 0.0;

        // Warm up
        if let Err(err) = rk4_step(&model, t, &y, h, params) {
            println!("{},failed: {}", model.name(), err);
            rows.push(BenchRow { model, steps: 0, ns_per_step: 0.0 });
            continue;
        }

        let mut done = 0;
        let start = Instant::now();
        for _ in 0..steps {
            match rk4_step(&model, t, &y, h, params) {
                Ok(next) => y = next,
                Err(err) => {
                    println!("{},failed: {}", model.name(), err);
                    break;
                }
            }
            t += h;
            done += 1;
        }
        let ns = start.elapsed().as_secs_f64() * 1e9 / done.max(1) as f64;

        println!("{},{:.1}", model.name(), ns);
        rows.push(BenchRow { model, steps: done, ns_per_step: ns });
    }
    rows
}
