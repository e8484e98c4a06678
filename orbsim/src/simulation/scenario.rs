//! Build fully-initialized propagation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - physical parameters (`PhysicalParameters`)
//! - the initial state at `t0`
//!
//! A scenario is run into a `Trajectory` and summarised by a `ScenarioReport`

use anyhow::{bail, ensure, Context, Result};
use tracing::info;

use crate::analysis::diagnostics::{
    j2_nodal_precession_rate, max_relative_energy_drift, measured_precession_rate, radius_series,
};
use crate::analysis::elements::OrbitalElements;
use crate::configuration::config::{
    ElementsConfig, ForceModelConfig, InitialConfig, ScenarioConfig, TimeGridConfig,
};
use crate::error::PropagationResult;
use crate::simulation::engine::Engine;
use crate::simulation::forces::ForceModel;
use crate::simulation::integrator::{integrate_on_grid, TimeGrid};
use crate::simulation::params::PhysicalParameters;
use crate::simulation::states::{StateVector, Trajectory};

/// Runtime bundle constructed from a [`ScenarioConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: PhysicalParameters,
    pub initial_state: StateVector,
}

/// Summary diagnostics of one propagated scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub samples: usize,
    pub final_time: f64,
    pub final_state: StateVector,
    pub energy_drift: f64, // max relative drift of specific energy
    pub min_radius: f64,
    pub max_radius: f64,
    pub precession_rate: Option<f64>, // measured node drift (rad/s), J2 models only
    pub analytic_precession_rate: Option<f64>, // -1.5 J2 (R/p)^2 n cos i
}

impl From<ForceModelConfig> for ForceModel {
    fn from(cfg: ForceModelConfig) -> Self {
        match cfg {
            ForceModelConfig::TwoBody => ForceModel::TwoBody,
            ForceModelConfig::J2 => ForceModel::J2,
            ForceModelConfig::J2Moon => ForceModel::J2Moon,
        }
    }
}

impl From<TimeGridConfig> for TimeGrid {
    fn from(cfg: TimeGridConfig) -> Self {
        match cfg {
            TimeGridConfig::HalfOpen => TimeGrid::HalfOpen,
            TimeGridConfig::Closed => TimeGrid::Closed,
        }
    }
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Physical parameters (runtime) from body/moon config
        let parameters = PhysicalParameters {
            mu: cfg.body.mu,
            body_radius: cfg.body.radius,
            j2: cfg.body.j2,
            moon_mu: cfg.moon.mu,
            moon_distance: cfg.moon.distance,
            moon_rate: cfg.moon.angular_rate,
        };
        parameters.validate().context("invalid body or moon constants")?;

        // Engine (runtime) from EngineConfig and ParametersConfig
        let p_cfg = cfg.parameters;
        let engine = Engine {
            force_model: cfg.engine.force_model.into(),
            time_grid: cfg.engine.time_grid.into(),
            t0: p_cfg.t0,
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
        };
        ensure!(
            engine.h0.is_finite() && engine.h0 > 0.0,
            "h0 must be finite and positive, got {}",
            engine.h0
        );
        ensure!(
            engine.t0.is_finite() && engine.t_end.is_finite() && engine.t_end > engine.t0,
            "t_end ({}) must be after t0 ({})",
            engine.t_end,
            engine.t0
        );

        let initial_state = initial_state(&cfg.initial, &parameters)?;

        Ok(Self { engine, parameters, initial_state })
    }

    /// Propagate the initial state over the configured span
    pub fn run(&self) -> PropagationResult<Trajectory> {
        info!(
            model = self.engine.force_model.name(),
            t0 = self.engine.t0,
            t_end = self.engine.t_end,
            h0 = self.engine.h0,
            "propagating scenario"
        );
        integrate_on_grid(
            &self.engine.force_model,
            self.engine.span(),
            &self.initial_state,
            self.engine.h0,
            &self.parameters,
            self.engine.time_grid,
        )
    }

    /// Energy, radius and node-drift diagnostics for a trajectory of this scenario
    pub fn report(&self, traj: &Trajectory) -> Option<ScenarioReport> {
        let (final_time, final_state) = traj.last()?;
        let radii = radius_series(traj);
        let min_radius = radii.iter().copied().fold(f64::INFINITY, f64::min);
        let max_radius = radii.iter().copied().fold(0.0, f64::max);

        let (precession_rate, analytic_precession_rate) = if self.engine.force_model.includes_j2() {
            let elements = OrbitalElements::from_state(&self.initial_state, self.parameters.mu);
            (
                measured_precession_rate(traj),
                Some(j2_nodal_precession_rate(&elements, &self.parameters)),
            )
        } else {
            (None, None)
        };

        Some(ScenarioReport {
            samples: traj.len(),
            final_time,
            final_state: *final_state,
            energy_drift: max_relative_energy_drift(traj, self.parameters.mu),
            min_radius,
            max_radius,
            precession_rate,
            analytic_precession_rate,
        })
    }
}

/// Resolve the configured initial condition into a state vector
fn initial_state(cfg: &InitialConfig, params: &PhysicalParameters) -> Result<StateVector> {
    let given = [cfg.state.is_some(), cfg.elements.is_some(), cfg.circular.is_some()]
        .iter()
        .filter(|set| **set)
        .count();
    ensure!(given == 1, "initial: set exactly one of state, elements, circular (found {given})");

    if let Some(state) = &cfg.state {
        if state.len() != 6 {
            bail!("initial state must have 6 components, got {}", state.len());
        }
        return Ok(StateVector::from_column_slice(state));
    }

    if let Some(elements) = &cfg.elements {
        return elements_state(elements, params);
    }

    match &cfg.circular {
        Some(circ) => {
            let r0 = params.body_radius + circ.altitude;
            ensure!(r0 > 0.0, "circular: radius must be positive, got {r0}");
            let v0 = (params.mu / r0).sqrt() * circ.speed_factor;
            let (sin_i, cos_i) = circ.inclination_deg.to_radians().sin_cos();
            Ok(StateVector::new(r0, 0.0, 0.0, 0.0, v0 * cos_i, v0 * sin_i))
        }
        None => bail!("initial: no initial condition given"),
    }
}

fn elements_state(cfg: &ElementsConfig, params: &PhysicalParameters) -> Result<StateVector> {
    ensure!(cfg.a > 0.0, "elements: a must be positive, got {}", cfg.a);
    ensure!((0.0..1.0).contains(&cfg.e), "elements: e must be in [0, 1), got {}", cfg.e);
    let elements = OrbitalElements {
        a: cfg.a,
        e: cfg.e,
        i: cfg.i_deg.to_radians(),
        raan: cfg.raan_deg.to_radians(),
        argp: cfg.argp_deg.to_radians(),
        nu: cfg.nu_deg.to_radians(),
    };
    Ok(elements.to_state(params.mu))
}
