//! # `msg_platformer_controller`
//!
//! A 2D platformer character controller with physics backend abstraction.
//!
//! This crate turns per-step player intent into motion for a side-scrolling
//! character:
//! - Smoothed horizontal movement with a critically damped velocity filter
//! - Jumping from the ground
//! - Crouching, with forced crouch under low ceilings
//! - Drop-through platforms toggled by crouching and jumping
//! - Facing flips that follow the move direction
//! - A one-way death latch on hazard contact
//! - Abstracts physics backend for easy swapping (Rapier2D included)
//!
//! ## Architecture
//!
//! Each fixed step runs in four phases:
//! 1. **Sensors**: the backend probes ground contact, ceiling clearance and
//!    fall-through overlap, and reports hazard contacts
//! 2. **Contacts**: hazard contacts engage the death latch and freeze bodies
//! 3. **Motion**: [`PlatformerController::step`](motion::PlatformerController::step)
//!    resolves crouch, velocity, fall-through, facing and jump
//! 4. **Sync**: state markers and world-bound checks are updated
//!
//! The resolver is plain Rust and can be driven without Bevy's schedule
//! through [`EnvironmentProbe`](probe::EnvironmentProbe).
//!
//! ## Usage
//!
//! ```rust
//! use bevy::prelude::*;
//! use msg_platformer_controller::prelude::*;
//!
//! // Create controller components for a player character
//! let controller = PlatformerController::new(Vec2::ZERO);
//! let config = ControllerConfig::player();
//! let intent = MoveIntent::default();
//!
//! // These can be spawned together with physics components
//! ```

use bevy::prelude::*;

pub mod backend;
pub mod boundary;
pub mod collision;
pub mod config;
pub mod error;
pub mod intent;
pub mod life;
pub mod motion;
pub mod presentation;
pub mod probe;
pub mod smoothing;
pub mod state;
pub mod systems;

#[cfg(feature = "rapier2d")]
pub mod rapier;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::backend::CharacterPhysicsBackend;
    pub use crate::boundary::{DeathBarrier, OutOfBounds};
    pub use crate::collision::{CollisionData, FallThroughCollider, SurfaceKind};
    pub use crate::config::{ControllerConfig, ControllerFeatures};
    pub use crate::error::{ConfigError, ControllerError};
    pub use crate::intent::MoveIntent;
    pub use crate::life::{CharacterDied, HazardContact, LifeLatch};
    pub use crate::motion::{Body, Facing, PlatformerController, ResolvedState};
    pub use crate::presentation::{AnimationParams, AnimationSink};
    pub use crate::probe::{EnvironmentProbe, SensorReadings};
    pub use crate::smoothing::VelocitySmoother;
    pub use crate::state::{Airborne, Crouching, Dead, Grounded};
    pub use crate::{PlatformerControllerPlugin, PlatformerControllerSet};

    #[cfg(feature = "rapier2d")]
    pub use crate::rapier::{Rapier2dBackend, Rapier2dCharacterBundle};
}

/// System sets for the controller's fixed-step phases, run in order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformerControllerSet {
    /// Validate newly spawned controllers.
    Preparation,
    /// Backend probes fill sensor readings and report contacts.
    Sensors,
    /// Hazard contacts engage the death latch.
    Contacts,
    /// Motion resolution.
    Motion,
    /// State markers and world bounds.
    Sync,
}

/// Main plugin for the platformer controller.
///
/// This plugin is generic over a physics backend `B` which provides the actual
/// physics operations (velocity access, freezing, collider toggling) and the
/// sensor systems.
///
/// # Type Parameters
/// - `B`: The physics backend implementation (e.g., `Rapier2dBackend`)
///
/// # Examples
///
/// With Rapier2D backend:
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_rapier2d::prelude::*;
/// use msg_platformer_controller::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
///     .add_plugins(PlatformerControllerPlugin::<Rapier2dBackend>::default())
///     .run();
/// ```
pub struct PlatformerControllerPlugin<B: backend::CharacterPhysicsBackend> {
    _marker: std::marker::PhantomData<B>,
}

impl<B: backend::CharacterPhysicsBackend> Default for PlatformerControllerPlugin<B> {
    fn default() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<B: backend::CharacterPhysicsBackend> Plugin for PlatformerControllerPlugin<B> {
    fn build(&self, app: &mut App) {
        // Register core types
        app.register_type::<config::ControllerConfig>();
        app.register_type::<config::ControllerFeatures>();
        app.register_type::<intent::MoveIntent>();
        app.register_type::<motion::PlatformerController>();
        app.register_type::<presentation::AnimationParams>();
        app.register_type::<collision::SurfaceKind>();
        app.register_type::<collision::FallThroughCollider>();
        app.register_type::<boundary::DeathBarrier>();
        app.register_type::<state::Grounded>();
        app.register_type::<state::Airborne>();
        app.register_type::<state::Crouching>();
        app.register_type::<state::Dead>();

        app.add_event::<life::HazardContact>();
        app.add_event::<life::CharacterDied>();
        app.add_event::<boundary::OutOfBounds>();

        app.configure_sets(
            FixedUpdate,
            (
                PlatformerControllerSet::Preparation,
                PlatformerControllerSet::Sensors,
                PlatformerControllerSet::Contacts,
                PlatformerControllerSet::Motion,
                PlatformerControllerSet::Sync,
            )
                .chain(),
        );

        // Add the physics backend plugin
        app.add_plugins(B::plugin());

        // Add core systems in FixedUpdate for consistent physics behavior
        app.add_systems(
            FixedUpdate,
            systems::prepare_new_controllers.in_set(PlatformerControllerSet::Preparation),
        );
        app.add_systems(
            FixedUpdate,
            (
                systems::apply_hazard_contacts,
                systems::freeze_dead_bodies::<B>,
            )
                .chain()
                .in_set(PlatformerControllerSet::Contacts),
        );
        app.add_systems(
            FixedUpdate,
            systems::resolve_motion::<B>.in_set(PlatformerControllerSet::Motion),
        );
        app.add_systems(
            FixedUpdate,
            (systems::sync_state_markers, boundary::check_death_barriers)
                .in_set(PlatformerControllerSet::Sync),
        );
    }
}
