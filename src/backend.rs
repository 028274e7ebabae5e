//! Physics backend abstraction.
//!
//! This module defines the trait that physics backends must implement
//! to work with the platformer controller. The motion resolver itself never
//! touches the physics engine; the backend supplies the body snapshot and
//! sensor readings before each step and applies the results afterwards.

use bevy::prelude::*;

/// Trait for physics backend implementations.
///
/// Implement this trait to integrate a physics engine with the controller.
/// Besides these operations a backend is expected to add systems (through
/// [`plugin`](Self::plugin)) that:
///
/// - fill [`PlatformerController::sensors`](crate::motion::PlatformerController::sensors)
///   in [`PlatformerControllerSet::Sensors`](crate::PlatformerControllerSet::Sensors);
/// - send [`HazardContact`](crate::life::HazardContact) events when a
///   character starts touching a collider classified as a hazard.
///
/// For an example implementation, see the `rapier` module's `Rapier2dBackend`.
pub trait CharacterPhysicsBackend: 'static + Send + Sync {
    /// Returns the plugin that sets up this backend.
    fn plugin() -> impl Plugin;

    /// Get the current velocity of an entity.
    fn get_velocity(world: &World, entity: Entity) -> Vec2;

    /// Set the velocity of an entity.
    fn set_velocity(world: &mut World, entity: Entity, velocity: Vec2);

    /// Get the current position of an entity.
    fn get_position(world: &World, entity: Entity) -> Vec2;

    /// Get the fixed timestep delta time.
    fn get_fixed_timestep(world: &World) -> f32;

    /// Check whether the physics body no longer moves (static body type).
    fn is_frozen(world: &World, entity: Entity) -> bool;

    /// Make the physics body immovable.
    fn freeze(world: &mut World, entity: Entity);

    /// Make a collider passable (`true`) or solid (`false`).
    fn set_collider_passable(world: &mut World, collider: Entity, passable: bool);

    /// Get the mass of an entity.
    ///
    /// Used to turn the jump force into a velocity change.
    fn get_mass(_world: &World, _entity: Entity) -> f32 {
        // Default implementation returns 1.0 (no scaling)
        1.0
    }
}

/// Empty plugin for backends that don't need additional setup.
pub struct NoOpBackendPlugin;

impl Plugin for NoOpBackendPlugin {
    fn build(&self, _app: &mut App) {}
}

/// Fixed timestep from `Time<Fixed>`, falling back to 60 Hz when the
/// resource is missing or has not ticked yet.
pub fn fixed_timestep_or_default(world: &World) -> f32 {
    world
        .get_resource::<Time<Fixed>>()
        .map(|t| t.delta_secs())
        .filter(|&d| d > 0.0)
        .unwrap_or(1.0 / 60.0)
}
