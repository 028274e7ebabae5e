//! Collision data and surface classification.

use bevy::prelude::*;

/// Information about a raycast hit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionData {
    /// Distance along the ray to the hit point.
    pub distance: f32,
    /// Normal of the surface at hit point.
    pub normal: Vec2,
    /// World position of the hit point.
    pub point: Vec2,
    /// Entity that was hit (if any).
    pub entity: Option<Entity>,
}

impl CollisionData {
    /// Create a collision result.
    pub fn new(distance: f32, normal: Vec2, point: Vec2, entity: Option<Entity>) -> Self {
        Self {
            distance,
            normal,
            point,
            entity,
        }
    }

    /// Whether the hit lies within `max_distance` of the ray origin.
    pub fn within(&self, max_distance: f32) -> bool {
        self.distance <= max_distance
    }
}

/// Classification of a collider the character can touch.
///
/// Attach to level geometry and enemies. Colliders without this component
/// are treated as [`SurfaceKind::Neutral`].
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[reflect(Component)]
pub enum SurfaceKind {
    /// Solid geometry; touching it grounds the character.
    Ground,
    /// Enemies and traps; touching one kills the character when death on
    /// hazard contact is enabled.
    Hazard,
    /// Anything else.
    #[default]
    Neutral,
}

impl SurfaceKind {
    /// Check if this surface grounds the character.
    pub fn is_ground(self) -> bool {
        self == Self::Ground
    }

    /// Check if this surface is a hazard.
    pub fn is_hazard(self) -> bool {
        self == Self::Hazard
    }
}

/// Secondary collider the character can drop through.
///
/// Points at the platform collider whose solidity the controller toggles.
/// The collider is always either fully solid or fully passable.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct FallThroughCollider {
    /// The platform collider entity.
    pub collider: Entity,
    /// Whether the collider was last made passable.
    pub passable: bool,
}

impl FallThroughCollider {
    /// Track `collider`, starting solid.
    pub fn new(collider: Entity) -> Self {
        Self {
            collider,
            passable: false,
        }
    }
}
