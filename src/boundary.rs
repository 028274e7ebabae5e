//! World bounds.
//!
//! A [`DeathBarrier`] reports when a character leaves the playable area.
//! What happens next (reloading the level, respawning) is up to the game.

use bevy::prelude::*;

/// Lower bounds of the playable area for one character.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct DeathBarrier {
    /// Positions left of this are out of bounds. `None` disables the check.
    pub min_x: Option<f32>,
    /// Positions below this are out of bounds. `None` disables the check.
    pub min_y: Option<f32>,
    /// Whether the character was outside on the last check.
    #[reflect(ignore)]
    outside: bool,
}

impl Default for DeathBarrier {
    fn default() -> Self {
        Self::below(-2.0)
    }
}

impl DeathBarrier {
    /// Only check the vertical bound.
    pub fn below(min_y: f32) -> Self {
        Self {
            min_x: None,
            min_y: Some(min_y),
            outside: false,
        }
    }

    /// Builder: also check the horizontal bound.
    pub fn with_min_x(mut self, min_x: f32) -> Self {
        self.min_x = Some(min_x);
        self
    }

    /// Check whether `position` is outside the bounds.
    pub fn is_outside(&self, position: Vec2) -> bool {
        self.min_x.is_some_and(|min| position.x < min)
            || self.min_y.is_some_and(|min| position.y < min)
    }

    /// Record `position`, returning `true` only when it has just crossed out
    /// of bounds.
    pub fn crossed(&mut self, position: Vec2) -> bool {
        let outside = self.is_outside(position);
        let crossed = outside && !self.outside;
        self.outside = outside;
        crossed
    }
}

/// Sent once each time a character crosses its [`DeathBarrier`].
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct OutOfBounds {
    /// The character that left the playable area.
    pub entity: Entity,
    /// Where it was when the crossing was noticed.
    pub position: Vec2,
}

/// Emit [`OutOfBounds`] for characters that crossed their barrier.
pub fn check_death_barriers(
    mut q_barriers: Query<(Entity, &GlobalTransform, &mut DeathBarrier)>,
    mut out_of_bounds: EventWriter<OutOfBounds>,
) {
    for (entity, transform, mut barrier) in &mut q_barriers {
        let position = transform.translation().truncate();
        if barrier.crossed(position) {
            debug!("{entity} left the playable area at {position}");
            out_of_bounds.write(OutOfBounds { entity, position });
        }
    }
}
