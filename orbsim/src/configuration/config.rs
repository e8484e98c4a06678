//! Configuration types for loading propagation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – force model and time-grid policy
//! - [`ParametersConfig`] – time span and fixed step size
//! - [`BodyConfig`]       – primary body constants (defaults to Earth)
//! - [`MoonConfig`]       – third-body constants (defaults to the Moon)
//! - [`InitialConfig`]    – initial state, given one of three ways
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   force_model: "j2"       # "two_body", "j2" or "j2_moon"
//!   time_grid: "half_open"  # or "closed"
//!
//! parameters:
//!   t0: 0.0
//!   t_end: 86400.0          # end of the span (s)
//!   h0: 30.0                # fixed step size (s)
//!
//! body:
//!   mu: 3.986e14
//!   radius: 6371000.0
//!   j2: 1.08262668e-3
//!
//! initial:
//!   elements:
//!     a: 7000000.0
//!     e: 0.0
//!     i_deg: 45.0
//! ```
//!
//! `initial` takes exactly one of `state: [x, y, z, vx, vy, vz]`,
//! `elements: {...}` or `circular: { altitude, speed_factor, inclination_deg }`.

use serde::Deserialize;

use crate::simulation::params::{J2_EARTH, MOON_DISTANCE, MOON_RATE, MU_EARTH, MU_MOON, R_EARTH};

/// Which force model the engine propagates with
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceModelConfig {
    #[serde(rename = "two_body")] // central inverse-square gravity only
    TwoBody,

    #[serde(rename = "j2")] // adds the oblateness term
    J2,

    #[serde(rename = "j2_moon")] // adds oblateness and lunar third-body terms
    J2Moon,
}

/// How sample times cover the span
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeGridConfig {
    #[default]
    #[serde(rename = "half_open")] // t0, t0 + h, ... strictly below t_end
    HalfOpen,

    #[serde(rename = "closed")] // ends exactly on t_end
    Closed,
}

#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub force_model: ForceModelConfig,
    #[serde(default)]
    pub time_grid: TimeGridConfig,
}

/// Time span and fixed step size
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default)]
    pub t0: f64,     // start time
    pub t_end: f64,  // end time
    pub h0: f64,     // fixed step size
}

/// Primary body constants
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default = "default_mu")]
    pub mu: f64,     // gravitational parameter (m^3/s^2)
    #[serde(default = "default_radius")]
    pub radius: f64, // equatorial radius (m)
    #[serde(default = "default_j2")]
    pub j2: f64,     // oblateness coefficient
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self { mu: MU_EARTH, radius: R_EARTH, j2: J2_EARTH }
    }
}

/// Third-body constants; the third body moves on a circle in the reference plane
#[derive(Deserialize, Debug, Clone)]
pub struct MoonConfig {
    #[serde(default = "default_moon_mu")]
    pub mu: f64,           // gravitational parameter (m^3/s^2)
    #[serde(default = "default_moon_distance")]
    pub distance: f64,     // orbit radius (m)
    #[serde(default = "default_moon_rate")]
    pub angular_rate: f64, // rad/s
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self { mu: MU_MOON, distance: MOON_DISTANCE, angular_rate: MOON_RATE }
    }
}

/// Keplerian elements; angles in degrees
#[derive(Deserialize, Debug, Clone)]
pub struct ElementsConfig {
    pub a: f64,
    #[serde(default)]
    pub e: f64,
    #[serde(default)]
    pub i_deg: f64,
    #[serde(default)]
    pub raan_deg: f64,
    #[serde(default)]
    pub argp_deg: f64,
    #[serde(default)]
    pub nu_deg: f64,
}

/// Start on the x-axis at `altitude` above the body with `speed_factor` times
/// the circular speed, in a plane tilted by `inclination_deg` about x
#[derive(Deserialize, Debug, Clone)]
pub struct CircularConfig {
    pub altitude: f64,
    #[serde(default = "default_speed_factor")]
    pub speed_factor: f64,
    #[serde(default)]
    pub inclination_deg: f64,
}

/// Initial condition; exactly one field must be set
#[derive(Deserialize, Debug, Clone, Default)]
pub struct InitialConfig {
    pub state: Option<Vec<f64>>,
    pub elements: Option<ElementsConfig>,
    pub circular: Option<CircularConfig>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // force model and time grid
    pub parameters: ParametersConfig, // time span and step size
    #[serde(default)]
    pub body: BodyConfig,             // primary body constants
    #[serde(default)]
    pub moon: MoonConfig,             // third-body constants
    pub initial: InitialConfig,       // initial state
}

fn default_mu() -> f64 { MU_EARTH }
fn default_radius() -> f64 { R_EARTH }
fn default_j2() -> f64 { J2_EARTH }
fn default_moon_mu() -> f64 { MU_MOON }
fn default_moon_distance() -> f64 { MOON_DISTANCE }
fn default_moon_rate() -> f64 { MOON_RATE }
fn default_speed_factor() -> f64 { 1.0 }
