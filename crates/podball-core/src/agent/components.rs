//! Component structs for agents.
//!
//! Each struct holds the state for one concern of an agent: spatial pose
//! ([`TransformState`]), dynamics ([`RigidBody`]), tuning ([`AgentConfig`]),
//! and the defender specialization ([`DefenderProfile`]). The ball the agents
//! chase is modeled by [`Ball`], which this crate only ever reads.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::EPSILON;

/// Position and orientation of an agent.
///
/// The forward axis is `orientation * Vec3::Z`, matching the convention that
/// a fresh agent facing its play direction has an identity-adjacent rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
}

impl TransformState {
    /// Creates a transform at the given position with identity orientation.
    #[must_use]
    pub fn at_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Returns the forward axis (`orientation * Vec3::Z`).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::at_position(Vec3::ZERO)
    }
}

/// Dynamic state of an agent's physics body.
///
/// Impulses use velocity-change semantics: [`RigidBody::apply_impulse`] adds
/// directly to the velocity, so an impulse of magnitude `speed * dt` produces
/// a bounded velocity delta per tick regardless of mass.
///
/// A kinematic body ignores impulses and is skipped by integration; the
/// lifecycle controller flips this flag on deactivation so an idle agent
/// cannot be shoved around by the ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    /// Linear velocity in world units per second.
    pub velocity: Vec3,
    /// Angular velocity as a scaled rotation axis, radians per second.
    pub angular_velocity: Vec3,
    /// When set, the body ignores impulses and is not integrated.
    pub kinematic: bool,
}

impl RigidBody {
    /// Adds a velocity-change impulse. No-op while kinematic.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if self.kinematic {
            return;
        }
        self.velocity += impulse;
    }

    /// Zeroes linear and angular velocity.
    pub fn reset_velocity(&mut self) {
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            kinematic: false,
        }
    }
}

/// Tuning parameters for a single agent.
///
/// Defaults follow the shipped opponent tuning. All durations and intervals
/// are in seconds; speeds are velocity-change per second (the actuator applies
/// `speed * dt` per tick).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Cruise impulse rate while Swimming or Recharging.
    pub move_speed: f32,
    /// Impulse rate while Boosting.
    pub boost_speed: f32,
    /// Slerp rate toward the desired heading, per second.
    pub turn_speed: f32,
    /// Distance behind the ball for the navigation point; also the
    /// near-target radius used by the boost trigger loop.
    pub attack_distance: f32,
    /// Period of the behavior decision timer.
    pub decision_interval: f32,
    /// How long a boost lasts once triggered.
    pub boost_duration: f32,
    /// Recharge time after a boost before the next one may trigger.
    pub boost_cooldown: f32,
    /// Boost trigger re-arm delay while far from the target.
    pub min_boost_delay: f32,
    /// Boost trigger re-arm delay while near the target.
    pub max_boost_delay: f32,
    /// Strength of the offset that steers the navigation point off the ball.
    pub avoid_offset_scale: f32,
    /// Ball-velocity extrapolation factor; zero disables anticipation.
    pub anticipate_amount: f32,
    /// The direction this agent attacks toward.
    pub play_direction: Vec3,
}

impl AgentConfig {
    /// Validates the configuration.
    ///
    /// Degenerate runtime geometry is guarded at the call sites (see
    /// `geometry`); this catches the configuration-time mistakes that would
    /// otherwise wedge the timers or the actuator.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.move_speed <= 0.0 {
            return Err(ConfigError::NonPositive("move_speed"));
        }
        if self.boost_speed <= 0.0 {
            return Err(ConfigError::NonPositive("boost_speed"));
        }
        if self.turn_speed <= 0.0 {
            return Err(ConfigError::NonPositive("turn_speed"));
        }
        if self.decision_interval <= 0.0 {
            return Err(ConfigError::NonPositive("decision_interval"));
        }
        if self.boost_duration <= 0.0 {
            return Err(ConfigError::NonPositive("boost_duration"));
        }
        if self.boost_cooldown <= 0.0 {
            return Err(ConfigError::NonPositive("boost_cooldown"));
        }
        if self.min_boost_delay <= 0.0 {
            return Err(ConfigError::NonPositive("min_boost_delay"));
        }
        if self.max_boost_delay < self.min_boost_delay {
            return Err(ConfigError::BoostDelayOrder {
                min: self.min_boost_delay,
                max: self.max_boost_delay,
            });
        }
        // Same squared-length threshold as the geometry guards, so a
        // direction that passes validation never falls back at runtime.
        if self.play_direction.length_squared() < EPSILON {
            return Err(ConfigError::DegeneratePlayDirection);
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            boost_speed: 10.0,
            turn_speed: 2.5,
            attack_distance: 5.0,
            decision_interval: 1.0,
            boost_duration: 0.2,
            boost_cooldown: 1.0,
            min_boost_delay: 0.42,
            max_boost_delay: 0.8,
            avoid_offset_scale: 2.0,
            anticipate_amount: 0.0,
            play_direction: Vec3::Z,
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A speed, duration, or interval that must be strictly positive is not.
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    /// The minimum boost delay exceeds the maximum.
    #[error("min_boost_delay ({min}) exceeds max_boost_delay ({max})")]
    BoostDelayOrder {
        /// Configured minimum delay.
        min: f32,
        /// Configured maximum delay.
        max: f32,
    },
    /// The play direction is too short to define a heading.
    #[error("play_direction is near zero")]
    DegeneratePlayDirection,
}

/// Defender specialization data.
///
/// `home_position` is captured once when the defender spawns and is never
/// mutated by gameplay; the defender holds that depth line while tracking the
/// ball laterally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenderProfile {
    /// Post captured at spawn. Fixed for the agent's lifetime.
    pub home_position: Vec3,
    /// Radius around the agent within which the ball counts as "near".
    pub defend_radius: f32,
    /// Half-width of the depth band (along the play axis) the defender guards.
    pub locale_radius: f32,
}

impl DefenderProfile {
    /// Default near-ball radius.
    pub const DEFAULT_DEFEND_RADIUS: f32 = 10.0;
    /// Default guarded depth band half-width.
    pub const DEFAULT_LOCALE_RADIUS: f32 = 50.0;

    /// Captures a profile at the given spawn position.
    #[must_use]
    pub fn capture(home_position: Vec3, defend_radius: f32, locale_radius: f32) -> Self {
        Self {
            home_position,
            defend_radius,
            locale_radius,
        }
    }
}

/// The ball, as seen by the steering core.
///
/// Read-only to this crate: the core polls position and velocity but never
/// writes either. The embedding world (or a test) moves it via
/// [`World::set_ball`](crate::world::World::set_ball).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ball {
    /// World-space position.
    pub position: Vec3,
    /// Linear velocity in world units per second.
    pub velocity: Vec3,
}

impl Ball {
    /// Creates a stationary ball at the given position.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }
}
