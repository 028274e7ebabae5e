//! Velocity smoothing.
//!
//! A critically damped spring that moves the applied velocity toward the
//! resolved target velocity without overshooting it. The filter keeps a
//! rate-of-change accumulator between calls, so one smoother belongs to
//! exactly one body.

use bevy::prelude::*;

/// Smallest smoothing time the filter accepts. Smaller values are raised
/// to this to keep the spring frequency finite.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Critically damped velocity filter.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocitySmoother {
    /// Rate of change of the smoothed velocity, carried across calls.
    rate: Vec2,
}

impl VelocitySmoother {
    /// Create a smoother at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rate accumulator.
    pub fn rate(&self) -> Vec2 {
        self.rate
    }

    /// Forget any accumulated rate.
    pub fn reset(&mut self) {
        self.rate = Vec2::ZERO;
    }

    /// Advance `current` toward `target` over `dt` seconds.
    ///
    /// Each axis ends up between `current` and `target` (inclusive). When
    /// an axis already sits on its target and has no accumulated rate, it
    /// is returned unchanged.
    pub fn smooth(&mut self, current: Vec2, target: Vec2, smooth_time: f32, dt: f32) -> Vec2 {
        if dt <= 0.0 || !dt.is_finite() {
            return current;
        }
        let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);

        let (x, rate_x) = smooth_axis(current.x, target.x, self.rate.x, smooth_time, dt);
        let (y, rate_y) = smooth_axis(current.y, target.y, self.rate.y, smooth_time, dt);
        self.rate = Vec2::new(rate_x, rate_y);
        Vec2::new(x, y)
    }
}

/// One axis of the damped spring. Returns the new value and new rate.
fn smooth_axis(current: f32, target: f32, rate: f32, smooth_time: f32, dt: f32) -> (f32, f32) {
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Rational approximation of e^-x, accurate for the step sizes used here.
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (rate + omega * change) * dt;
    let mut new_rate = (rate - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Clamp on overshoot.
    if (target - current > 0.0) == (output > target) {
        output = target;
        new_rate = (output - target) / dt;
    }

    (output, new_rate)
}
