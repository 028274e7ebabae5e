//! Rapier2D physics backend implementation.
//!
//! This module provides the physics backend for Bevy Rapier2D.
//! Enable with the `rapier2d` feature.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use crate::backend::{fixed_timestep_or_default, CharacterPhysicsBackend};
use crate::collision::{CollisionData, FallThroughCollider, SurfaceKind};
use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::life::HazardContact;
use crate::motion::PlatformerController;
use crate::probe::{ceiling_probe_origin, fall_through_probe_radius};
use crate::PlatformerControllerSet;

/// Rapier2D physics backend for the platformer controller.
///
/// Velocity, freezing and collider toggling go through Rapier components.
/// Probing (contact pairs, ceiling ray, overlap circle) is handled by
/// dedicated systems that receive `RapierContext` as a system parameter.
///
/// A fall-through collider is made passable by turning it into a
/// [`Sensor`], and the character is frozen by switching its body to
/// [`RigidBody::Fixed`].
pub struct Rapier2dBackend;

impl CharacterPhysicsBackend for Rapier2dBackend {
    fn plugin() -> impl Plugin {
        Rapier2dBackendPlugin
    }

    fn get_velocity(world: &World, entity: Entity) -> Vec2 {
        world
            .get::<Velocity>(entity)
            .map(|v| v.linvel)
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(world: &mut World, entity: Entity, velocity: Vec2) {
        if let Some(mut vel) = world.get_mut::<Velocity>(entity) {
            vel.linvel = velocity;
        }
    }

    fn get_position(world: &World, entity: Entity) -> Vec2 {
        world
            .get::<Transform>(entity)
            .map(|t| t.translation.xy())
            .or_else(|| {
                world
                    .get::<GlobalTransform>(entity)
                    .map(|t| t.translation().xy())
            })
            .unwrap_or(Vec2::ZERO)
    }

    fn get_fixed_timestep(world: &World) -> f32 {
        fixed_timestep_or_default(world)
    }

    fn is_frozen(world: &World, entity: Entity) -> bool {
        matches!(world.get::<RigidBody>(entity), Some(RigidBody::Fixed))
    }

    fn freeze(world: &mut World, entity: Entity) {
        if let Some(mut body) = world.get_mut::<RigidBody>(entity) {
            *body = RigidBody::Fixed;
        }
    }

    fn set_collider_passable(world: &mut World, collider: Entity, passable: bool) {
        let Ok(mut collider) = world.get_entity_mut(collider) else {
            return;
        };
        match (passable, collider.contains::<Sensor>()) {
            (true, false) => {
                collider.insert(Sensor);
            }
            (false, true) => {
                collider.remove::<Sensor>();
            }
            _ => {}
        }
    }

    fn get_mass(world: &World, entity: Entity) -> f32 {
        world
            .get::<ReadMassProperties>(entity)
            .map(|props| props.mass)
            .filter(|mass| *mass > 0.0 && mass.is_finite())
            .unwrap_or(1.0)
    }
}

/// Physics components a Rapier-driven character needs besides its collider.
#[derive(Bundle, Clone)]
pub struct Rapier2dCharacterBundle {
    /// Dynamic body, switched to fixed when the character dies.
    pub rigid_body: RigidBody,
    /// Velocity read and written by the controller.
    pub velocity: Velocity,
    /// Characters never rotate.
    pub locked_axes: LockedAxes,
    /// Needed for hazard contact events.
    pub active_events: ActiveEvents,
    /// Mass used to scale the jump force.
    pub mass_properties: ReadMassProperties,
}

impl Default for Rapier2dCharacterBundle {
    fn default() -> Self {
        Self {
            rigid_body: RigidBody::Dynamic,
            velocity: Velocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            active_events: ActiveEvents::COLLISION_EVENTS,
            mass_properties: ReadMassProperties::default(),
        }
    }
}

/// Plugin that sets up Rapier2D-specific systems for the platformer controller.
pub struct Rapier2dBackendPlugin;

impl Plugin for Rapier2dBackendPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (rapier_sensor_detection, rapier_hazard_contacts)
                .in_set(PlatformerControllerSet::Sensors),
        );
    }

    /// # Panics
    ///
    /// Panics if `RapierPhysicsPlugin::<NoUserData>` was not added. The
    /// controller cannot probe or move anything without it.
    fn finish(&self, app: &mut App) {
        if !app.is_plugin_added::<RapierPhysicsPlugin<NoUserData>>() {
            let err = ControllerError::PhysicsBackendMissing {
                backend: "rapier2d",
            };
            panic!("{err}");
        }
    }
}

/// Surface classification of a collider, looking at its parent when the
/// collider itself is unclassified (compound platforms).
fn surface_of(
    entity: Entity,
    q_surfaces: &Query<&SurfaceKind>,
    q_parents: &Query<&ChildOf>,
) -> SurfaceKind {
    q_surfaces
        .get(entity)
        .ok()
        .or_else(|| {
            q_parents
                .get(entity)
                .ok()
                .and_then(|child_of| q_surfaces.get(child_of.parent()).ok())
        })
        .copied()
        .unwrap_or_default()
}

/// Whether `hit` is `target` or one of its direct children.
fn is_part_of(hit: Entity, target: Entity, q_parents: &Query<&ChildOf>) -> bool {
    hit == target
        || q_parents
            .get(hit)
            .is_ok_and(|child_of| child_of.parent() == target)
}

/// Cast the upward ceiling ray using RapierContext.
///
/// Sensors are hit too: a fall-through platform made passable by a forced
/// crouch must keep blocking the ray.
fn rapier_raycast(
    context: &RapierContext,
    origin: Vec2,
    direction: Vec2,
    max_distance: f32,
    exclude_entity: Entity,
) -> Option<CollisionData> {
    // Create filter to exclude the casting entity
    let filter = QueryFilter::default().exclude_rigid_body(exclude_entity);

    context
        .cast_ray(origin, direction, max_distance, true, filter)
        .map(|(hit_entity, toi)| {
            let hit_point = origin + direction * toi;
            // For a simple ray, we approximate the normal as opposite of ray direction
            CollisionData::new(toi, -direction, hit_point, Some(hit_entity))
        })
}

/// Whether the character's collider has an active contact with ground.
fn rapier_touches_ground(
    context: &RapierContext,
    entity: Entity,
    q_surfaces: &Query<&SurfaceKind>,
    q_parents: &Query<&ChildOf>,
) -> bool {
    context.contact_pairs_with(entity).any(|pair| {
        if !pair.has_any_active_contact() {
            return false;
        }
        let other = if pair.collider1() == Some(entity) {
            pair.collider2()
        } else {
            pair.collider1()
        };
        let Some(other) = other else {
            return false;
        };
        surface_of(other, q_surfaces, q_parents).is_ground()
    })
}

/// Whether a circle around the character overlaps the fall-through collider.
///
/// Sensors are included: a passable platform is a sensor.
fn rapier_overlaps(
    context: &RapierContext,
    center: Vec2,
    radius: f32,
    exclude_entity: Entity,
    target: Entity,
    q_parents: &Query<&ChildOf>,
) -> bool {
    let filter = QueryFilter::default().exclude_rigid_body(exclude_entity);
    let shape = Collider::ball(radius);
    let mut found = false;

    context.intersections_with_shape(center, 0.0, &shape, filter, |hit| {
        if is_part_of(hit, target, q_parents) {
            found = true;
            // Stop the query
            return false;
        }
        true
    });
    found
}

/// Rapier-specific probe system.
///
/// Fills [`PlatformerController::sensors`] with ground contact, the ceiling
/// ray hit and the fall-through overlap for every controller.
fn rapier_sensor_detection(
    rapier_context: ReadRapierContext,
    mut q_controllers: Query<(
        Entity,
        &GlobalTransform,
        &ControllerConfig,
        &mut PlatformerController,
        Option<&Collider>,
        Option<&FallThroughCollider>,
    )>,
    q_surfaces: Query<&SurfaceKind>,
    q_parents: Query<&ChildOf>,
) {
    let Ok(context) = rapier_context.single() else {
        return;
    };

    for (entity, transform, config, mut controller, collider, fall_through) in &mut q_controllers
    {
        if controller.is_frozen() {
            continue;
        }

        let position = transform.translation().xy();
        controller.sensors.reset();

        controller.sensors.grounded =
            rapier_touches_ground(&context, entity, &q_surfaces, &q_parents);

        controller.sensors.ceiling = rapier_raycast(
            &context,
            ceiling_probe_origin(position, config.ceiling_distance),
            Vec2::Y,
            config.ceiling_probe_length,
            entity,
        );

        if let Some(fall_through) = fall_through {
            let ball_radius = collider.and_then(|c| c.as_ball()).map(|ball| ball.radius());
            let radius = fall_through_probe_radius(ball_radius, config.fall_through_probe_radius);
            controller.sensors.in_fall_through = rapier_overlaps(
                &context,
                position,
                radius,
                entity,
                fall_through.collider,
                &q_parents,
            );
        }
    }
}

/// Translate Rapier collision events with hazards into [`HazardContact`]s.
///
/// Only solid contacts count; sensor overlaps are ignored.
fn rapier_hazard_contacts(
    mut collisions: EventReader<CollisionEvent>,
    q_characters: Query<(), With<PlatformerController>>,
    q_surfaces: Query<&SurfaceKind>,
    q_parents: Query<&ChildOf>,
    mut contacts: EventWriter<HazardContact>,
) {
    for event in collisions.read() {
        let &CollisionEvent::Started(a, b, flags) = event else {
            continue;
        };
        if flags.contains(CollisionEventFlags::SENSOR) {
            continue;
        }

        for (character, other) in [(a, b), (b, a)] {
            if q_characters.contains(character)
                && surface_of(other, &q_surfaces, &q_parents).is_hazard()
            {
                contacts.write(HazardContact {
                    character,
                    hazard: other,
                });
            }
        }
    }
}
