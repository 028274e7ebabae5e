//! Motion resolution.
//!
//! [`PlatformerController`] is the per-character state and
//! [`PlatformerController::step`] is the whole per-tick algorithm. It is
//! plain Rust: physics backends feed it sensor readings and a body snapshot,
//! and write the result back afterwards. This keeps the resolver testable
//! without an engine.
//!
//! A step runs these rules in order. Later rules see the results of earlier
//! ones.
//!
//! 1. A frozen body does nothing.
//! 2. Crouch is forced while grounded under a low ceiling.
//! 3. Crouching scales the move amount.
//! 4. The target velocity is the scaled move plus the current vertical speed.
//! 5. The fall-through collider is made passable while crouching, rising in
//!    the air, or still inside it.
//! 6. The body turns to face the move direction.
//! 7. A pending jump is consumed and applied when grounded.
//! 8. Animation parameters are emitted.

use bevy::prelude::*;

use crate::collision::SurfaceKind;
use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::intent::MoveIntent;
use crate::life::LifeLatch;
use crate::presentation::AnimationSink;
use crate::probe::{EnvironmentProbe, SensorReadings};
use crate::smoothing::VelocitySmoother;

/// Horizontal facing direction.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Facing -X.
    Left,
    /// Facing +X.
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by the sign of a horizontal scale. Zero counts as right.
    pub fn from_scale(scale_x: f32) -> Self {
        if scale_x < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// `-1.0` for left, `1.0` for right.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Apply this facing to a horizontal scale, keeping its magnitude.
    pub fn apply_to_scale(self, scale_x: f32) -> f32 {
        scale_x.abs() * self.sign()
    }

    /// Whether a move of `amount` points away from this facing.
    pub fn opposes(self, amount: f32) -> bool {
        (amount > 0.0 && self == Self::Left) || (amount < 0.0 && self == Self::Right)
    }
}

/// Physical state of the controlled character.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// World position.
    pub position: Vec2,
    /// Linear velocity.
    pub velocity: Vec2,
    /// Mass used to turn the jump force into a velocity change.
    pub mass: f32,
    /// Facing direction.
    pub facing: Facing,
    /// Whether the body no longer accepts motion.
    pub frozen: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            mass: 1.0,
            facing: Facing::Right,
            frozen: false,
        }
    }
}

impl Body {
    /// Create a body at rest at `position`.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..default()
        }
    }

    /// Builder: set velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder: set facing.
    pub fn facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }
}

/// Outcome of one controller step.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedState {
    /// Velocity the smoother was steering toward.
    pub target_velocity: Vec2,
    /// Velocity written back to the body (smoothed, plus any jump).
    pub velocity: Vec2,
    /// Resolved crouch flag.
    pub crouching: bool,
    /// Whether this step turned the body around.
    pub flipped: bool,
    /// Facing after this step.
    pub facing: Facing,
    /// Fall-through collider passability. `None` when crouching is disabled.
    pub fall_through_passable: Option<bool>,
    /// Whether a jump was applied.
    pub jumped: bool,
    /// Ground contact seen by this step.
    pub grounded: bool,
    /// Whether the character is alive.
    pub alive: bool,
}

/// Core platformer controller component.
///
/// Holds the body snapshot, the smoothing filter, the life latch and the
/// latest sensor readings. The physics backend refreshes `body` and
/// `sensors` before every step.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct PlatformerController {
    /// Physical state.
    pub body: Body,
    /// Environment probe results for the current step.
    pub sensors: SensorReadings,
    /// Velocity smoothing filter.
    pub smoother: VelocitySmoother,
    /// Alive → frozen latch.
    pub life: LifeLatch,
    /// Result of the most recent step.
    pub last: Option<ResolvedState>,
}

impl PlatformerController {
    /// Create a controller for a body at rest at `position`.
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::at(position),
            ..default()
        }
    }

    /// Create a controller at `position`, rejecting an invalid config.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::InvalidConfig`] if `config` fails
    /// [`ControllerConfig::validate`].
    pub fn try_new(position: Vec2, config: &ControllerConfig) -> Result<Self, ControllerError> {
        config.validate()?;
        Ok(Self::new(position))
    }

    /// Create a controller around an existing body.
    pub fn with_body(body: Body) -> Self {
        Self { body, ..default() }
    }

    /// Whether motion resolution is shut off.
    pub fn is_frozen(&self) -> bool {
        self.life.is_frozen() || self.body.frozen
    }

    /// Whether the character is alive.
    pub fn is_alive(&self) -> bool {
        self.life.is_alive()
    }

    /// Ground contact from the latest readings.
    pub fn is_grounded(&self) -> bool {
        self.sensors.is_grounded()
    }

    /// Resolved crouch flag from the latest step.
    pub fn is_crouching(&self) -> bool {
        self.last.is_some_and(|state| state.crouching)
    }

    /// Run one step using the stored sensor readings.
    pub fn step(
        &mut self,
        config: &ControllerConfig,
        intent: &mut MoveIntent,
        dt: f32,
        sink: Option<&mut dyn AnimationSink>,
    ) -> Option<ResolvedState> {
        let sensors = self.sensors;
        self.step_with_probe(config, intent, &sensors, dt, sink)
    }

    /// Run one step against an arbitrary probe.
    ///
    /// Returns `None` without touching anything when the body is frozen.
    pub fn step_with_probe<P: EnvironmentProbe + ?Sized>(
        &mut self,
        config: &ControllerConfig,
        intent: &mut MoveIntent,
        probe: &P,
        dt: f32,
        sink: Option<&mut dyn AnimationSink>,
    ) -> Option<ResolvedState> {
        if self.is_frozen() {
            return None;
        }

        let features = config.features;
        let grounded = probe.is_grounded();
        let mut amount = intent.horizontal;
        let mut crouching = false;

        if features.crouching {
            crouching = intent.crouch_held
                || (grounded && probe.is_vertically_cramped(config.ceiling_probe_length));
            if crouching {
                amount *= config.crouch_speed;
            }
        }

        let current = self.body.velocity;
        let target = Vec2::new(amount * config.horizontal_scale, current.y);
        let mut velocity = self
            .smoother
            .smooth(current, target, config.movement_smoothing, dt);

        let fall_through_passable = features.crouching.then(|| {
            crouching || (!grounded && target.y > 0.0) || probe.overlaps_fall_through_region()
        });

        let flipped = self.body.facing.opposes(amount);
        if flipped {
            self.body.facing = self.body.facing.flipped();
        }

        let jump_requested = intent.take_jump_request();
        let jumped = jump_requested && features.jumping && grounded;
        if jumped {
            velocity.y += config.jump_force * dt / self.body.mass.max(f32::EPSILON);
        }

        if features.animations {
            if let Some(sink) = sink {
                sink.set_horizontal_speed(target.x.abs());
                sink.set_vertical_speed(target.y);
                if features.crouching {
                    sink.set_crouching(crouching);
                }
            }
        }

        self.body.velocity = velocity;

        let state = ResolvedState {
            target_velocity: target,
            velocity,
            crouching,
            flipped,
            facing: self.body.facing,
            fall_through_passable,
            jumped,
            grounded,
            alive: true,
        };
        self.last = Some(state);
        Some(state)
    }

    /// Report a contact with a surface to the life latch.
    ///
    /// Returns `true` if this contact killed the character. The body is
    /// frozen in place with zero velocity.
    pub fn register_contact(
        &mut self,
        config: &ControllerConfig,
        surface: SurfaceKind,
        sink: Option<&mut dyn AnimationSink>,
    ) -> bool {
        if !self.life.register_contact(surface, config.features, sink) {
            return false;
        }
        self.body.frozen = true;
        self.body.velocity = Vec2::ZERO;
        self.smoother.reset();
        if let Some(last) = self.last.as_mut() {
            last.alive = false;
            last.velocity = Vec2::ZERO;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerFeatures;
    use crate::error::ConfigError;
    use crate::presentation::AnimationParams;
    use approx::assert_relative_eq;

    #[test]
    fn try_new_rejects_invalid_config() {
        let config = ControllerConfig::default().with_crouch_speed(1.5);
        let err = PlatformerController::try_new(Vec2::ZERO, &config).unwrap_err();
        assert_eq!(
            err,
            ControllerError::InvalidConfig(ConfigError::CrouchSpeedOutOfRange(1.5))
        );

        let controller =
            PlatformerController::try_new(Vec2::new(1.0, 2.0), &ControllerConfig::player())
                .expect("valid config");
        assert_eq!(controller.body.position, Vec2::new(1.0, 2.0));
        assert!(controller.is_alive());
    }

    const DT: f32 = 0.02;

    struct FakeProbe {
        grounded: bool,
        cramped: bool,
        overlapping: bool,
    }

    impl EnvironmentProbe for FakeProbe {
        fn is_grounded(&self) -> bool {
            self.grounded
        }

        fn has_ceiling_clearance(&self, _probe_distance: f32) -> bool {
            !self.cramped
        }

        fn overlaps_fall_through_region(&self) -> bool {
            self.overlapping
        }
    }

    fn ground() -> FakeProbe {
        FakeProbe {
            grounded: true,
            cramped: false,
            overlapping: false,
        }
    }

    fn air() -> FakeProbe {
        FakeProbe {
            grounded: false,
            ..ground()
        }
    }

    // ==================== Frozen ====================

    #[test]
    fn frozen_step_is_noop() {
        let config = ControllerConfig::player();
        let mut controller =
            PlatformerController::with_body(Body::default().with_velocity(Vec2::new(3.0, -1.0)));
        controller.register_contact(&config, SurfaceKind::Hazard, None);
        let before = controller.clone();

        for original in [
            MoveIntent::with(1.0, false, true),
            MoveIntent::with(-1.0, true, false),
            MoveIntent::with(0.0, true, true),
        ] {
            let mut intent = original;
            let result = controller.step_with_probe(&config, &mut intent, &ground(), DT, None);
            assert!(result.is_none());
            assert_eq!(controller.body, before.body);
            assert_eq!(controller.last, before.last);
            assert_eq!(intent, original);
        }
    }

    #[test]
    fn static_body_is_noop() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();
        controller.body.frozen = true;

        let mut intent = MoveIntent::with(1.0, false, false);
        assert!(controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .is_none());
        assert_eq!(controller.body.velocity, Vec2::ZERO);
    }

    // ==================== Crouch ====================

    #[test]
    fn crouch_forced_under_ceiling() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();
        let probe = FakeProbe {
            cramped: true,
            ..ground()
        };

        let mut intent = MoveIntent::with(1.0, false, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &probe, DT, None)
            .unwrap();
        assert!(state.crouching);
        assert_relative_eq!(state.target_velocity.x, 1.0 * 0.36 * 10.0);
    }

    #[test]
    fn ceiling_in_air_does_not_force_crouch() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();
        let probe = FakeProbe {
            cramped: true,
            ..air()
        };

        let mut intent = MoveIntent::with(1.0, false, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &probe, DT, None)
            .unwrap();
        assert!(!state.crouching);
    }

    #[test]
    fn crouch_in_place() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::with(0.0, true, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(state.crouching);
        assert_eq!(state.target_velocity.x, 0.0);
        assert_eq!(state.fall_through_passable, Some(true));
    }

    #[test]
    fn crouch_disabled_ignores_crouch_and_ceiling() {
        let config = ControllerConfig::default().with_crouching(false);
        let mut controller = PlatformerController::default();
        let probe = FakeProbe {
            cramped: true,
            ..ground()
        };

        let mut intent = MoveIntent::with(1.0, true, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &probe, DT, None)
            .unwrap();
        assert!(!state.crouching);
        assert_eq!(state.target_velocity.x, 10.0);
        assert_eq!(state.fall_through_passable, None);
    }

    // ==================== Fall-through ====================

    #[test]
    fn fall_through_solid_when_every_condition_false() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::new();
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert_eq!(state.fall_through_passable, Some(false));
    }

    #[test]
    fn fall_through_passable_while_crouching() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::with(0.0, true, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert_eq!(state.fall_through_passable, Some(true));
    }

    #[test]
    fn fall_through_passable_while_rising_in_air() {
        let config = ControllerConfig::default();
        let mut controller =
            PlatformerController::with_body(Body::default().with_velocity(Vec2::new(0.0, 4.0)));

        let mut intent = MoveIntent::new();
        let state = controller
            .step_with_probe(&config, &mut intent, &air(), DT, None)
            .unwrap();
        assert_eq!(state.fall_through_passable, Some(true));
    }

    #[test]
    fn fall_through_solid_while_falling() {
        let config = ControllerConfig::default();
        let mut controller =
            PlatformerController::with_body(Body::default().with_velocity(Vec2::new(0.0, -4.0)));

        let mut intent = MoveIntent::new();
        let state = controller
            .step_with_probe(&config, &mut intent, &air(), DT, None)
            .unwrap();
        assert_eq!(state.fall_through_passable, Some(false));
    }

    #[test]
    fn fall_through_solid_when_grounded_and_rising() {
        let config = ControllerConfig::default();
        let mut controller =
            PlatformerController::with_body(Body::default().with_velocity(Vec2::new(0.0, 4.0)));

        let mut intent = MoveIntent::new();
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert_eq!(state.fall_through_passable, Some(false));
    }

    #[test]
    fn fall_through_passable_while_overlapping() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();
        let probe = FakeProbe {
            overlapping: true,
            ..ground()
        };

        let mut intent = MoveIntent::new();
        let state = controller
            .step_with_probe(&config, &mut intent, &probe, DT, None)
            .unwrap();
        assert_eq!(state.fall_through_passable, Some(true));
    }

    #[test]
    fn jump_from_rest_does_not_open_fall_through_same_step() {
        // Fall-through uses the target (pre-jump) vertical velocity.
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::with(0.0, false, true);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(state.jumped);
        assert_eq!(state.fall_through_passable, Some(false));
    }

    // ==================== Orientation ====================

    #[test]
    fn moving_right_while_facing_left_flips() {
        let config = ControllerConfig::minimal();
        let mut controller =
            PlatformerController::with_body(Body::default().facing(Facing::Left));

        let mut intent = MoveIntent::with(1.0, false, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(state.flipped);
        assert_eq!(state.facing, Facing::Right);
        assert_eq!(state.target_velocity.x, 10.0);
        assert_eq!(state.fall_through_passable, None);
    }

    #[test]
    fn moving_left_while_facing_right_flips() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::with(-0.5, false, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(state.flipped);
        assert_eq!(controller.body.facing, Facing::Left);
    }

    #[test]
    fn zero_move_never_flips() {
        let config = ControllerConfig::default();
        for facing in [Facing::Left, Facing::Right] {
            let mut controller = PlatformerController::with_body(Body::default().facing(facing));
            let mut intent = MoveIntent::new();
            let state = controller
                .step_with_probe(&config, &mut intent, &ground(), DT, None)
                .unwrap();
            assert!(!state.flipped);
            assert_eq!(controller.body.facing, facing);
        }
    }

    #[test]
    fn same_direction_does_not_flip() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();
        let mut intent = MoveIntent::with(1.0, false, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(!state.flipped);
    }

    #[test]
    fn facing_scale_helpers() {
        assert_eq!(Facing::from_scale(-2.0), Facing::Left);
        assert_eq!(Facing::from_scale(0.0), Facing::Right);
        assert_eq!(Facing::Left.apply_to_scale(2.0), -2.0);
        assert_eq!(Facing::Right.apply_to_scale(-2.0), 2.0);
    }

    // ==================== Jump ====================

    #[test]
    fn jump_applies_when_grounded() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::with(0.0, false, true);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(state.jumped);
        assert_relative_eq!(state.velocity.y, 400.0 * DT);
        assert!(!intent.jump_requested());
    }

    #[test]
    fn jump_scales_with_mass() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();
        controller.body.mass = 2.0;

        let mut intent = MoveIntent::with(0.0, false, true);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert_relative_eq!(state.velocity.y, 400.0 * DT / 2.0);
    }

    #[test]
    fn jump_in_air_is_consumed_without_effect() {
        let config = ControllerConfig::default();
        let mut controller =
            PlatformerController::with_body(Body::default().with_velocity(Vec2::new(0.0, -2.0)));

        let mut intent = MoveIntent::with(0.0, false, true);
        let state = controller
            .step_with_probe(&config, &mut intent, &air(), DT, None)
            .unwrap();
        assert!(!state.jumped);
        assert_eq!(state.velocity.y, -2.0);
        assert!(!intent.jump_requested());
    }

    #[test]
    fn jump_disabled() {
        let config = ControllerConfig::default().with_jumping(false);
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::with(0.0, false, true);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(!state.jumped);
        assert_eq!(state.velocity.y, 0.0);
    }

    #[test]
    fn jump_while_crouched_still_jumps() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::with(0.0, true, true);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(state.crouching);
        assert!(state.jumped);
    }

    // ==================== Smoothing ====================

    #[test]
    fn velocity_approaches_target() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();

        let mut intent = MoveIntent::with(1.0, false, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &ground(), DT, None)
            .unwrap();
        assert!(state.velocity.x > 0.0 && state.velocity.x < 10.0);
        assert_eq!(controller.body.velocity, state.velocity);
    }

    #[test]
    fn vertical_velocity_is_preserved() {
        let config = ControllerConfig::default();
        let mut controller =
            PlatformerController::with_body(Body::default().with_velocity(Vec2::new(0.0, -6.0)));

        let mut intent = MoveIntent::with(1.0, false, false);
        let state = controller
            .step_with_probe(&config, &mut intent, &air(), DT, None)
            .unwrap();
        assert_eq!(state.target_velocity.y, -6.0);
        assert_eq!(state.velocity.y, -6.0);
    }

    // ==================== Animation ====================

    #[test]
    fn emits_animation_parameters() {
        let config = ControllerConfig::default();
        let mut controller =
            PlatformerController::with_body(Body::default().with_velocity(Vec2::new(0.0, -1.5)));
        let mut params = AnimationParams::default();

        let mut intent = MoveIntent::with(-0.5, true, false);
        controller.step_with_probe(&config, &mut intent, &air(), DT, Some(&mut params));

        assert_relative_eq!(params.horizontal_speed, 0.5 * 0.36 * 10.0);
        assert_eq!(params.vertical_speed, -1.5);
        assert!(params.crouching);
    }

    #[test]
    fn animations_disabled_emit_nothing() {
        let config = ControllerConfig::default().with_animations(false);
        let mut controller = PlatformerController::default();
        let mut params = AnimationParams::default();

        let mut intent = MoveIntent::with(1.0, true, false);
        controller.step_with_probe(&config, &mut intent, &ground(), DT, Some(&mut params));

        assert_eq!(params, AnimationParams::default());
    }

    #[test]
    fn crouch_flag_not_emitted_when_crouching_disabled() {
        let config = ControllerConfig::default().with_crouching(false);
        let mut controller = PlatformerController::default();
        let mut params = AnimationParams {
            crouching: true,
            ..default()
        };

        let mut intent = MoveIntent::with(1.0, true, false);
        controller.step_with_probe(&config, &mut intent, &ground(), DT, Some(&mut params));

        assert_eq!(params.horizontal_speed, 10.0);
        // Left as it was
        assert!(params.crouching);
    }

    // ==================== Death ====================

    #[test]
    fn hazard_contact_freezes_and_signals() {
        let config = ControllerConfig::player();
        let mut controller = PlatformerController::default();
        let mut params = AnimationParams::default();

        let mut intent = MoveIntent::with(1.0, false, false);
        controller.step_with_probe(&config, &mut intent, &ground(), DT, Some(&mut params));
        assert!(params.horizontal_speed > 0.0);

        assert!(controller.register_contact(&config, SurfaceKind::Hazard, Some(&mut params)));
        assert!(controller.is_frozen());
        assert!(!controller.is_alive());
        assert!(!params.alive);
        assert_eq!(params.horizontal_speed, 0.0);
        assert_eq!(controller.body.velocity, Vec2::ZERO);

        let mut intent = MoveIntent::with(1.0, true, true);
        assert!(controller
            .step_with_probe(&config, &mut intent, &ground(), DT, Some(&mut params))
            .is_none());
        assert_eq!(params.horizontal_speed, 0.0);
    }

    #[test]
    fn hazard_ignored_when_death_disabled() {
        let config = ControllerConfig::default().with_features(ControllerFeatures {
            death_on_hazard: false,
            ..ControllerFeatures::all()
        });
        let mut controller = PlatformerController::default();
        assert!(!controller.register_contact(&config, SurfaceKind::Hazard, None));
        assert!(!controller.is_frozen());
    }

    #[test]
    fn step_uses_stored_sensor_readings() {
        let config = ControllerConfig::default();
        let mut controller = PlatformerController::default();
        controller.sensors = SensorReadings::grounded().with_ceiling(0.05);

        let mut intent = MoveIntent::new();
        let state = controller.step(&config, &mut intent, DT, None).unwrap();
        assert!(state.grounded);
        assert!(state.crouching);
        assert!(controller.is_crouching());
    }
}
