//! Error types.
//!
//! Nothing in the per-step path can fail. Errors only surface while a
//! controller is being configured or while the plugin is being built.

use thiserror::Error;

/// A [`ControllerConfig`](crate::config::ControllerConfig) value that cannot be
/// simulated.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Crouch speed multiplier must lie in `0.0..=1.0`.
    #[error("crouch speed multiplier must be within [0, 1], got {0}")]
    CrouchSpeedOutOfRange(f32),

    /// Movement smoothing time must be finite and non-negative.
    #[error("movement smoothing time must be finite and non-negative, got {0}")]
    InvalidSmoothing(f32),

    /// A probe distance or radius must be finite and non-negative.
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeDistance {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Horizontal scale must be finite and strictly positive.
    #[error("horizontal scale must be finite and positive, got {0}")]
    InvalidHorizontalScale(f32),

    /// Jump force must be finite and non-negative.
    #[error("jump force must be finite and non-negative, got {0}")]
    InvalidJumpForce(f32),
}

/// Fatal controller setup errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// The configuration was rejected.
    #[error("invalid controller configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The physics engine the backend relies on was never added to the app.
    #[error("physics backend `{backend}` requires its physics plugin to be added to the app")]
    PhysicsBackendMissing {
        /// Name of the backend that could not find its engine.
        backend: &'static str,
    },
}
