//! Controller configuration components.
//!
//! This module defines the tunables for a platformer controller: jump
//! strength, movement smoothing, crouch behaviour and the feature toggles
//! that gate optional mechanics. Configuration is set once when the
//! character is spawned and treated as read-only while simulating.

use bevy::prelude::*;

use crate::error::ConfigError;

/// Multiplier turning a per-step move amount into a horizontal velocity.
pub const DEFAULT_HORIZONTAL_SCALE: f32 = 10.0;

/// Length of the upward ray used to detect a ceiling above a crouching body.
pub const DEFAULT_CEILING_PROBE_LENGTH: f32 = 0.1;

/// Upper bound of the recommended movement smoothing range.
pub const MAX_RECOMMENDED_SMOOTHING: f32 = 0.3;

/// Feature toggles for optional controller mechanics.
///
/// Each flag gates one mechanic. A disabled mechanic is skipped entirely
/// rather than evaluated and discarded.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerFeatures {
    /// Allow jumping while grounded.
    pub jumping: bool,
    /// Allow crouching, forced crouching under ceilings and fall-through
    /// platform toggling.
    pub crouching: bool,
    /// Emit animation parameters.
    pub animations: bool,
    /// Freeze the character when it touches a hazard.
    pub death_on_hazard: bool,
}

impl Default for ControllerFeatures {
    fn default() -> Self {
        Self {
            jumping: true,
            crouching: true,
            animations: true,
            death_on_hazard: false,
        }
    }
}

impl ControllerFeatures {
    /// All mechanics enabled.
    pub fn all() -> Self {
        Self {
            death_on_hazard: true,
            ..default()
        }
    }

    /// Only horizontal movement and orientation.
    pub fn none() -> Self {
        Self {
            jumping: false,
            crouching: false,
            animations: false,
            death_on_hazard: false,
        }
    }
}

/// Configuration parameters for the platformer controller.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct ControllerConfig {
    // === Jump Settings ===
    /// Upward force applied for a single physics step when the character
    /// jumps.
    pub jump_force: f32,

    // === Movement Settings ===
    /// Time (seconds) the velocity smoother takes to approach its target.
    /// Recommended range is `0.0..=0.3`.
    pub movement_smoothing: f32,

    /// Multiplier from per-step move amount to horizontal velocity.
    pub horizontal_scale: f32,

    /// Speed used by [`MoveIntent::set_axis`](crate::intent::MoveIntent::set_axis)
    /// to turn a `[-1, 1]` input axis into a per-step move amount.
    pub run_speed: f32,

    // === Crouch Settings ===
    /// Multiplier applied to the move amount while crouching.
    /// 1.0 = as fast as running, 0.0 = no movement while crouching.
    pub crouch_speed: f32,

    /// Offset above the body origin where the ceiling probe starts.
    pub ceiling_distance: f32,

    /// Length of the upward ceiling probe.
    pub ceiling_probe_length: f32,

    /// Radius of the fall-through overlap probe when the primary collider is
    /// not a ball. Ball colliders use half their radius instead.
    pub fall_through_probe_radius: f32,

    // === Features ===
    /// Which optional mechanics are enabled.
    pub features: ControllerFeatures,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Jump settings
            jump_force: 400.0,

            // Movement settings
            movement_smoothing: 0.05,
            horizontal_scale: DEFAULT_HORIZONTAL_SCALE,
            run_speed: 40.0,

            // Crouch settings
            crouch_speed: 0.36,
            ceiling_distance: 0.6,
            ceiling_probe_length: DEFAULT_CEILING_PROBE_LENGTH,
            fall_through_probe_radius: 0.25,

            features: ControllerFeatures::default(),
        }
    }
}

impl ControllerConfig {
    /// Create a config for a player character: every mechanic enabled,
    /// including death on hazard contact.
    pub fn player() -> Self {
        Self {
            features: ControllerFeatures::all(),
            ..default()
        }
    }

    /// Create a config that only walks and turns around.
    pub fn minimal() -> Self {
        Self {
            features: ControllerFeatures::none(),
            ..default()
        }
    }

    /// Check that every tunable is within its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.crouch_speed) {
            return Err(ConfigError::CrouchSpeedOutOfRange(self.crouch_speed));
        }
        if !self.movement_smoothing.is_finite() || self.movement_smoothing < 0.0 {
            return Err(ConfigError::InvalidSmoothing(self.movement_smoothing));
        }
        if !self.horizontal_scale.is_finite() || self.horizontal_scale <= 0.0 {
            return Err(ConfigError::InvalidHorizontalScale(self.horizontal_scale));
        }
        if !self.jump_force.is_finite() || self.jump_force < 0.0 {
            return Err(ConfigError::InvalidJumpForce(self.jump_force));
        }
        for (name, value) in [
            ("ceiling_distance", self.ceiling_distance),
            ("ceiling_probe_length", self.ceiling_probe_length),
            ("fall_through_probe_radius", self.fall_through_probe_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeDistance { name, value });
            }
        }
        Ok(())
    }

    /// Consume the config, returning it only if it is valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map(|()| self)
    }

    /// Return a copy with every tunable clamped into its valid range.
    ///
    /// Non-finite values fall back to the default for that field.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let non_negative = |value: f32, fallback: f32| {
            if value.is_finite() {
                value.max(0.0)
            } else {
                fallback
            }
        };

        Self {
            jump_force: non_negative(self.jump_force, defaults.jump_force),
            movement_smoothing: non_negative(self.movement_smoothing, defaults.movement_smoothing),
            horizontal_scale: if self.horizontal_scale.is_finite() && self.horizontal_scale > 0.0 {
                self.horizontal_scale
            } else {
                defaults.horizontal_scale
            },
            run_speed: non_negative(self.run_speed, defaults.run_speed),
            crouch_speed: if self.crouch_speed.is_nan() {
                defaults.crouch_speed
            } else {
                self.crouch_speed.clamp(0.0, 1.0)
            },
            ceiling_distance: non_negative(self.ceiling_distance, defaults.ceiling_distance),
            ceiling_probe_length: non_negative(
                self.ceiling_probe_length,
                defaults.ceiling_probe_length,
            ),
            fall_through_probe_radius: non_negative(
                self.fall_through_probe_radius,
                defaults.fall_through_probe_radius,
            ),
            features: self.features,
        }
    }

    /// Builder: set jump force.
    pub fn with_jump_force(mut self, force: f32) -> Self {
        self.jump_force = force;
        self
    }

    /// Builder: set movement smoothing time.
    pub fn with_movement_smoothing(mut self, seconds: f32) -> Self {
        self.movement_smoothing = seconds;
        self
    }

    /// Builder: set crouch speed multiplier.
    pub fn with_crouch_speed(mut self, multiplier: f32) -> Self {
        self.crouch_speed = multiplier;
        self
    }

    /// Builder: set the ceiling probe offset.
    pub fn with_ceiling_distance(mut self, distance: f32) -> Self {
        self.ceiling_distance = distance;
        self
    }

    /// Builder: set run speed.
    pub fn with_run_speed(mut self, speed: f32) -> Self {
        self.run_speed = speed;
        self
    }

    /// Builder: replace all feature toggles.
    pub fn with_features(mut self, features: ControllerFeatures) -> Self {
        self.features = features;
        self
    }

    /// Builder: enable or disable jumping.
    pub fn with_jumping(mut self, enabled: bool) -> Self {
        self.features.jumping = enabled;
        self
    }

    /// Builder: enable or disable crouching.
    pub fn with_crouching(mut self, enabled: bool) -> Self {
        self.features.crouching = enabled;
        self
    }

    /// Builder: enable or disable animation parameters.
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.features.animations = enabled;
        self
    }

    /// Builder: enable or disable death on hazard contact.
    pub fn with_death_on_hazard(mut self, enabled: bool) -> Self {
        self.features.death_on_hazard = enabled;
        self
    }
}
