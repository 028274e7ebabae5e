//! Life/death latch.
//!
//! A character starts alive. Touching a hazard while death on hazard
//! contact is enabled freezes it for good. There is no way back: respawning
//! means replacing the controller.

use bevy::prelude::*;

use crate::collision::SurfaceKind;
use crate::config::ControllerFeatures;
use crate::presentation::AnimationSink;

/// One-way alive → frozen latch.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifeLatch {
    /// Moving normally.
    #[default]
    Alive,
    /// Dead. Motion resolution is a no-op from now on.
    Frozen,
}

impl LifeLatch {
    /// Check if the latch is still open.
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// Check if the latch has engaged.
    pub fn is_frozen(self) -> bool {
        self == Self::Frozen
    }

    /// Report a contact with a surface.
    ///
    /// Returns `true` only on the contact that engages the latch. On that
    /// contact the animation speeds are zeroed and the alive flag cleared,
    /// provided animations are enabled and a sink is given.
    pub fn register_contact(
        &mut self,
        surface: SurfaceKind,
        features: ControllerFeatures,
        sink: Option<&mut dyn AnimationSink>,
    ) -> bool {
        if self.is_frozen() || !features.death_on_hazard || !surface.is_hazard() {
            return false;
        }

        *self = Self::Frozen;

        if features.animations {
            if let Some(sink) = sink {
                sink.set_horizontal_speed(0.0);
                sink.set_vertical_speed(0.0);
                sink.set_alive(false);
            }
        }
        true
    }
}

/// Sent once when a character's life latch engages.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterDied {
    /// The character that died.
    pub entity: Entity,
    /// The hazard it touched.
    pub hazard: Entity,
}

/// Sent by physics backends when a character starts touching a hazard.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardContact {
    /// The character.
    pub character: Entity,
    /// The hazard collider.
    pub hazard: Entity,
}
