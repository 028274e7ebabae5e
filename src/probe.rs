//! Environment probing.
//!
//! The motion resolver never talks to a physics engine directly. It asks an
//! [`EnvironmentProbe`] three questions: is the body on the ground, is there
//! room above it to stand up, and is it still inside the fall-through
//! platform. Physics backends answer these by filling [`SensorReadings`]
//! once per fixed step.

use bevy::prelude::*;

use crate::collision::CollisionData;

/// Geometric queries the motion resolver depends on.
///
/// Implementations must be side-effect free.
pub trait EnvironmentProbe {
    /// True iff the primary collider touches a ground surface.
    fn is_grounded(&self) -> bool;

    /// True iff nothing blocks the upward ceiling probe within
    /// `probe_distance`. No hit counts as clear.
    fn has_ceiling_clearance(&self, probe_distance: f32) -> bool;

    /// True iff the fall-through overlap circle intersects the fall-through
    /// collider.
    fn overlaps_fall_through_region(&self) -> bool;

    /// Negation of [`has_ceiling_clearance`](Self::has_ceiling_clearance).
    fn is_vertically_cramped(&self, probe_distance: f32) -> bool {
        !self.has_ceiling_clearance(probe_distance)
    }
}

/// Probe results captured by the physics backend's sensor systems.
#[derive(Reflect, Debug, Clone, Copy, Default)]
pub struct SensorReadings {
    /// Primary collider touches a [`SurfaceKind::Ground`](crate::collision::SurfaceKind::Ground).
    pub grounded: bool,
    /// Closest hit of the ceiling ray, if any.
    #[reflect(ignore)]
    pub ceiling: Option<CollisionData>,
    /// Overlap circle intersects the fall-through collider.
    pub in_fall_through: bool,
}

impl SensorReadings {
    /// Readings for a body standing on open ground.
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            ..default()
        }
    }

    /// Readings for a body in the air.
    pub fn airborne() -> Self {
        Self::default()
    }

    /// Builder: record a ceiling hit at `distance` along the probe.
    pub fn with_ceiling(mut self, distance: f32) -> Self {
        self.ceiling = Some(CollisionData::new(distance, Vec2::NEG_Y, Vec2::ZERO, None));
        self
    }

    /// Builder: record whether the body overlaps the fall-through collider.
    pub fn with_fall_through_overlap(mut self, overlapping: bool) -> Self {
        self.in_fall_through = overlapping;
        self
    }

    /// Clear all readings (called before the sensors run each step).
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl EnvironmentProbe for SensorReadings {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn has_ceiling_clearance(&self, probe_distance: f32) -> bool {
        !self.ceiling.is_some_and(|hit| hit.within(probe_distance))
    }

    fn overlaps_fall_through_region(&self) -> bool {
        self.in_fall_through
    }
}

/// Origin of the upward ceiling ray for a body at `position`.
pub fn ceiling_probe_origin(position: Vec2, ceiling_distance: f32) -> Vec2 {
    Vec2::new(position.x, position.y + ceiling_distance)
}

/// Radius of the fall-through overlap circle.
///
/// Half the primary ball collider's radius, or `fallback` when the primary
/// collider is not a ball.
pub fn fall_through_probe_radius(ball_radius: Option<f32>, fallback: f32) -> f32 {
    ball_radius.map(|radius| radius / 2.0).unwrap_or(fallback)
}
