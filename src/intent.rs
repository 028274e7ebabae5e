//! Movement intent component.
//!
//! Intents carry what the player or an AI wants to do this step. Input
//! handling lives outside this crate; collaborators write into
//! [`MoveIntent`] and the controller reads it once per fixed step.

use bevy::prelude::*;

use crate::config::ControllerConfig;

/// Per-step movement intent.
///
/// # Example
///
/// ```rust
/// use msg_platformer_controller::prelude::*;
///
/// let mut intent = MoveIntent::new();
///
/// // Rising edge produces a single jump request
/// intent.set_jump_pressed(true);
/// assert!(intent.jump_requested());
/// assert!(intent.take_jump_request());
///
/// // Holding the button does not request again
/// intent.set_jump_pressed(true);
/// assert!(!intent.jump_requested());
/// ```
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct MoveIntent {
    /// Signed horizontal move amount for this step (negative = left).
    pub horizontal: f32,
    /// Whether crouch is held.
    pub crouch_held: bool,
    /// Pending jump request. Set on the rising edge of the jump button and
    /// cleared by the controller after the step that consumes it.
    pub jump_requested: bool,
    /// Jump button state from the last call to `set_jump_pressed`.
    jump_pressed_prev: bool,
}

impl MoveIntent {
    /// Create a new empty intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an intent with the given move amount, crouch and jump flags.
    pub fn with(horizontal: f32, crouch_held: bool, jump_requested: bool) -> Self {
        Self {
            horizontal,
            crouch_held,
            jump_requested,
            jump_pressed_prev: false,
        }
    }

    /// Set the signed move amount directly.
    pub fn set_horizontal(&mut self, amount: f32) {
        self.horizontal = amount;
    }

    /// Set the move amount from an input axis.
    ///
    /// The axis is clamped to `[-1, 1]` and scaled by `run_speed` and the
    /// fixed timestep, giving the per-step move amount the resolver expects.
    pub fn set_axis(&mut self, axis: f32, run_speed: f32, dt: f32) {
        self.horizontal = axis.clamp(-1.0, 1.0) * run_speed * dt;
    }

    /// Set the move amount from an input axis using the configured
    /// [`run_speed`](ControllerConfig::run_speed).
    pub fn set_axis_from_config(&mut self, axis: f32, config: &ControllerConfig, dt: f32) {
        self.set_axis(axis, config.run_speed, dt);
    }

    /// Set whether crouch is held.
    pub fn set_crouch_held(&mut self, held: bool) {
        self.crouch_held = held;
    }

    /// Feed the current jump button state.
    ///
    /// Call this every frame with whether the button is down. A jump is
    /// requested only when the state goes from released to pressed. An
    /// unconsumed request stays pending after the button is released.
    pub fn set_jump_pressed(&mut self, pressed: bool) {
        if pressed && !self.jump_pressed_prev {
            self.jump_requested = true;
        }
        self.jump_pressed_prev = pressed;
    }

    /// Request a jump directly, bypassing edge detection.
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    /// Check if a jump is pending.
    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    /// Consume the pending jump request, returning whether there was one.
    pub fn take_jump_request(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }

    /// Check if there is horizontal input.
    pub fn is_moving(&self) -> bool {
        self.horizontal != 0.0
    }

    /// Clear move and crouch input. A pending jump request is kept.
    pub fn clear(&mut self) {
        self.horizontal = 0.0;
        self.crouch_held = false;
    }
}
