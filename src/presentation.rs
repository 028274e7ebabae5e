//! Animation parameters.
//!
//! The controller does not play animations. It pushes a small set of
//! parameters into an [`AnimationSink`] and forgets about them. The bundled
//! sink is the [`AnimationParams`] component, which an animation system can
//! read to drive sprites.

use bevy::prelude::*;

/// Receiver for animation parameters emitted by the controller.
pub trait AnimationSink {
    /// Horizontal speed (always non-negative).
    fn set_horizontal_speed(&mut self, speed: f32);
    /// Signed vertical speed.
    fn set_vertical_speed(&mut self, speed: f32);
    /// Whether the character is crouching.
    fn set_crouching(&mut self, crouching: bool);
    /// Whether the character is alive.
    fn set_alive(&mut self, alive: bool);
}

/// Animation parameters written by the controller each fixed step.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct AnimationParams {
    /// Horizontal speed magnitude.
    pub horizontal_speed: f32,
    /// Vertical speed.
    pub vertical_speed: f32,
    /// Crouching.
    pub crouching: bool,
    /// Alive.
    pub alive: bool,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            horizontal_speed: 0.0,
            vertical_speed: 0.0,
            crouching: false,
            alive: true,
        }
    }
}

impl AnimationSink for AnimationParams {
    fn set_horizontal_speed(&mut self, speed: f32) {
        self.horizontal_speed = speed;
    }

    fn set_vertical_speed(&mut self, speed: f32) {
        self.vertical_speed = speed;
    }

    fn set_crouching(&mut self, crouching: bool) {
        self.crouching = crouching;
    }

    fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
}
