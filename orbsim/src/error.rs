//! Error types for propagation

use thiserror::Error;

/// Result type for force evaluation and integration
pub type PropagationResult<T> = Result<T, PropagationError>;

/// Errors that can occur while evaluating forces or integrating a trajectory
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropagationError {
    #[error("invalid state at t = {t}: r = 0")]
    DegenerateState { t: f64 },

    #[error("invalid state at t = {t}: satellite coincides with the third body")]
    ThirdBodyCollision { t: f64 },

    #[error("non-finite state at t = {t}")]
    NonFiniteState { t: f64 },

    #[error("step size must be finite and positive, got {0}")]
    InvalidStepSize(f64),

    #[error("span over step size gives {steps:e} steps, more than the integrator will store")]
    TooManySteps { steps: f64 },

    #[error("time span must be finite with tf > t0, got ({t0}, {tf})")]
    InvalidTimeSpan { t0: f64, tf: f64 },

    #[error("invalid physical parameters: {0}")]
    InvalidParameters(String),
}
