pub mod error;
pub mod simulation;
pub mod analysis;
pub mod configuration;
pub mod benchmark;

pub use error::{PropagationError, PropagationResult};

pub use simulation::states::{StateVector, NVec3, Trajectory, position, velocity, state_from_parts};
pub use simulation::params::PhysicalParameters;
pub use simulation::forces::{Dynamics, Acceleration, AccelSet, ForceModel, TwoBodyGravity, J2Oblateness, LunarThirdBody};
pub use simulation::integrator::{rk4_step, integrate, integrate_on_grid, TimeGrid};
pub use simulation::engine::Engine;
pub use simulation::scenario::{Scenario, ScenarioReport};
pub use simulation::sweep::{propagate_batch, SweepCase};

pub use analysis::elements::{ascending_node_angle, inclination, specific_energy, OrbitalElements};
pub use analysis::diagnostics::{energy_series, max_relative_energy_drift, radius_series, raan_series, unwrap_angles, linear_fit, measured_precession_rate, j2_nodal_precession_rate};

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, BodyConfig, MoonConfig, InitialConfig, ForceModelConfig, TimeGridConfig};

pub use benchmark::benchmark::{convergence_study, bench_rk4_step, BenchRow, ConvergenceRow};
