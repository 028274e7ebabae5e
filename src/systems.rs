//! Core controller systems.
//!
//! These systems drive [`PlatformerController`] from the ECS. They are
//! generic over the physics backend so the same resolution logic runs on
//! any engine that implements [`CharacterPhysicsBackend`].

use bevy::prelude::*;

use crate::backend::CharacterPhysicsBackend;
use crate::collision::{FallThroughCollider, SurfaceKind};
use crate::config::ControllerConfig;
use crate::intent::MoveIntent;
use crate::life::{CharacterDied, HazardContact};
use crate::motion::{Facing, PlatformerController};
use crate::presentation::{AnimationParams, AnimationSink};
use crate::state::{Airborne, Crouching, Dead, Grounded};

/// Validate configuration and optional collaborators of newly spawned
/// controllers.
///
/// Invalid configs are clamped into range before the first step. A
/// controller with animations enabled but no [`AnimationParams`] has
/// animations disabled.
pub fn prepare_new_controllers(
    mut q_new: Query<
        (Entity, &mut ControllerConfig, Has<AnimationParams>),
        (With<PlatformerController>, Added<ControllerConfig>),
    >,
) {
    for (entity, mut config, has_animation_params) in &mut q_new {
        if let Err(err) = config.validate() {
            error!("{entity}: {err}; clamping configuration into range");
            *config = config.sanitized();
        }

        if config.features.animations && !has_animation_params {
            warn!("{entity}: no AnimationParams component found; disabling animations");
            config.features.animations = false;
        }
    }
}

/// Engage the life latch of characters that touched a hazard.
///
/// The [`Dead`] marker follows in [`sync_state_markers`].
pub fn apply_hazard_contacts(
    mut contacts: EventReader<HazardContact>,
    mut died: EventWriter<CharacterDied>,
    mut q_controllers: Query<(
        &ControllerConfig,
        &mut PlatformerController,
        Option<&mut AnimationParams>,
    )>,
) {
    for contact in contacts.read() {
        let Ok((config, mut controller, mut params)) = q_controllers.get_mut(contact.character)
        else {
            continue;
        };

        let sink = params
            .as_deref_mut()
            .map(|params| params as &mut dyn AnimationSink);
        if controller.register_contact(config, SurfaceKind::Hazard, sink) {
            info!("{} died touching {}", contact.character, contact.hazard);
            died.write(CharacterDied {
                entity: contact.character,
                hazard: contact.hazard,
            });
        }
    }
}

/// Make the physics bodies of dead characters immovable.
pub fn freeze_dead_bodies<B: CharacterPhysicsBackend>(world: &mut World) {
    let entities: Vec<Entity> = world
        .query::<(Entity, &PlatformerController)>()
        .iter(world)
        .filter(|(_, controller)| controller.life.is_frozen())
        .map(|(entity, _)| entity)
        .collect();

    for entity in entities {
        if B::is_frozen(world, entity) {
            continue;
        }
        B::set_velocity(world, entity, Vec2::ZERO);
        B::freeze(world, entity);
    }
}

/// Resolve one motion step for every controller.
///
/// Reads the body state from the backend, runs
/// [`PlatformerController::step`] and writes velocity, facing, animation
/// parameters and fall-through collider state back.
pub fn resolve_motion<B: CharacterPhysicsBackend>(world: &mut World) {
    let dt = B::get_fixed_timestep(world);

    let entities: Vec<Entity> = world
        .query_filtered::<Entity, (
            With<PlatformerController>,
            With<ControllerConfig>,
            With<MoveIntent>,
        )>()
        .iter(world)
        .collect();

    let mut q_controllers = world.query::<(
        &ControllerConfig,
        &mut PlatformerController,
        &mut MoveIntent,
        Option<&mut Transform>,
        Option<&mut AnimationParams>,
        Option<&mut FallThroughCollider>,
    )>();

    for entity in entities {
        let position = B::get_position(world, entity);
        let velocity = B::get_velocity(world, entity);
        let mass = B::get_mass(world, entity);
        let static_body = B::is_frozen(world, entity);

        let Ok((config, mut controller, mut intent, transform, mut params, fall_through)) =
            q_controllers.get_mut(world, entity)
        else {
            continue;
        };

        controller.body.position = position;
        controller.body.velocity = velocity;
        controller.body.mass = mass;
        controller.body.frozen |= static_body;
        if let Some(transform) = transform.as_deref() {
            controller.body.facing = Facing::from_scale(transform.scale.x);
        }

        let sink = params
            .as_deref_mut()
            .map(|params| params as &mut dyn AnimationSink);
        let Some(state) = controller.step(config, &mut intent, dt, sink) else {
            continue;
        };

        if state.flipped {
            if let Some(mut transform) = transform {
                transform.scale.x = state.facing.apply_to_scale(transform.scale.x);
            }
        }

        let passable_update = match (fall_through, state.fall_through_passable) {
            (Some(mut fall_through), Some(passable)) => {
                fall_through.passable = passable;
                Some((fall_through.collider, passable))
            }
            _ => None,
        };

        B::set_velocity(world, entity, state.velocity);
        if let Some((collider, passable)) = passable_update {
            B::set_collider_passable(world, collider, passable);
        }
    }
}

/// Sync state marker components with the controller's latest state.
pub fn sync_state_markers(
    mut commands: Commands,
    q_controllers: Query<(
        Entity,
        &PlatformerController,
        Has<Grounded>,
        Has<Airborne>,
        Has<Crouching>,
        Has<Dead>,
    )>,
) {
    for (entity, controller, has_grounded, has_airborne, has_crouching, has_dead) in &q_controllers
    {
        let grounded = controller.is_grounded();

        // Sync Grounded/Airborne
        if grounded && !has_grounded {
            commands.entity(entity).insert(Grounded).remove::<Airborne>();
        } else if !grounded && (has_grounded || !has_airborne) {
            commands.entity(entity).insert(Airborne).remove::<Grounded>();
        }

        // Sync Crouching
        let crouching = controller.is_crouching();
        if crouching && !has_crouching {
            commands.entity(entity).insert(Crouching);
        } else if !crouching && has_crouching {
            commands.entity(entity).remove::<Crouching>();
        }

        if !controller.is_alive() && !has_dead {
            commands.entity(entity).insert(Dead);
        }
    }
}
