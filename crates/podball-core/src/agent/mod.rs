//! Agent types for the opponent steering core.
//!
//! This module provides:
//! - [`AgentId`]: unique identifier, the ordering key for deterministic iteration
//! - [`AgentRole`]: strategy selection tag (standard chaser vs. defender)
//! - [`BehaviorState`] / [`MovementState`]: the two independent state axes
//! - [`Agent`]: the complete agent container
//!
//! # State axes
//!
//! Behavior (what the agent is trying to do) and movement (how its propulsion
//! is currently gated) are deliberately separate enums. Idle on either axis
//! suppresses motion and boost side effects, but the axes are never merged:
//! behavior is written only by the decision timer and the lifecycle
//! controller, movement only by the boost scheduler and the lifecycle
//! controller.

pub mod components;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use components::{
    AgentConfig, Ball, ConfigError, DefenderProfile, RigidBody, TransformState,
};

/// Unique identifier for an agent.
///
/// Newtype over `u64`, ordered by value; agents are iterated in id order so
/// every simulation step is deterministic.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(u64);

impl AgentId {
    /// Creates an `AgentId` from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Strategy selection tag.
///
/// The role decides which [`BehaviorStrategy`](crate::strategy::BehaviorStrategy)
/// drives the agent; it never changes after spawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    /// Chases and attacks the ball.
    Standard,
    /// Guards a depth band around its spawn position.
    Defender,
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Defender => write!(f, "Defender"),
        }
    }
}

/// The agent's current tactical role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Decision-making suspended; no forces are produced.
    Idle,
    /// Moving toward a supporting position behind the ball.
    Navigating,
    /// Driving at the (anticipated) ball.
    Attacking,
    /// Holding the home depth line while tracking the ball laterally.
    Defending,
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Navigating => write!(f, "Navigating"),
            Self::Attacking => write!(f, "Attacking"),
            Self::Defending => write!(f, "Defending"),
        }
    }
}

/// The agent's current propulsion mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementState {
    /// Forced by deactivation; no propulsion and no boost attempts.
    Idle,
    /// Normal cruise; boost attempts may succeed.
    Swimming,
    /// Temporarily propelled at boost speed.
    Boosting,
    /// Cooling down after a boost; attempts are refused.
    Recharging,
}

impl fmt::Display for MovementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Swimming => write!(f, "Swimming"),
            Self::Boosting => write!(f, "Boosting"),
            Self::Recharging => write!(f, "Recharging"),
        }
    }
}

/// A complete opponent agent.
///
/// Owns its pose, physics body, tuning, both state axes, the last resolved
/// target position, and (for defenders) the captured [`DefenderProfile`].
///
/// # Generation counter
///
/// `generation` stamps every timer task scheduled on behalf of this agent.
/// The lifecycle controller bumps it on activation and deactivation, which
/// atomically invalidates all outstanding timers: a deferred callback whose
/// stamp no longer matches is dropped before it can mutate anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    role: AgentRole,
    config: AgentConfig,
    /// Position and orientation.
    pub transform: TransformState,
    /// Physics body (velocities, kinematic flag).
    pub body: RigidBody,
    behavior: BehaviorState,
    movement: MovementState,
    target: Vec3,
    defender: Option<DefenderProfile>,
    generation: u64,
}

impl Agent {
    /// Creates an agent at the given position.
    ///
    /// The target position starts at the spawn position and is rewritten on
    /// every physics tick once the agent is active. Defenders should be
    /// created through [`World::spawn_defender`](crate::world::World::spawn_defender)
    /// so the home position is captured consistently.
    #[must_use]
    pub fn new(
        id: AgentId,
        role: AgentRole,
        config: AgentConfig,
        position: Vec3,
        defender: Option<DefenderProfile>,
    ) -> Self {
        Self {
            id,
            role,
            config,
            transform: TransformState::at_position(position),
            body: RigidBody::default(),
            behavior: BehaviorState::Idle,
            movement: MovementState::Idle,
            target: position,
            defender,
            generation: 0,
        }
    }

    /// Returns the agent's identifier.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the agent's role.
    #[must_use]
    pub const fn role(&self) -> AgentRole {
        self.role
    }

    /// Returns the agent's tuning parameters.
    #[must_use]
    pub const fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Returns the current behavior state.
    #[must_use]
    pub const fn behavior(&self) -> BehaviorState {
        self.behavior
    }

    /// Returns the current movement state.
    #[must_use]
    pub const fn movement(&self) -> MovementState {
        self.movement
    }

    /// Returns the last resolved target position.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.target
    }

    /// Returns the defender profile, if this agent is a defender.
    #[must_use]
    pub const fn defender(&self) -> Option<&DefenderProfile> {
        self.defender.as_ref()
    }

    /// Returns the current timer generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidates every outstanding timer scheduled for this agent.
    pub(crate) fn bump_generation(&mut self) {
        self.generation += 1;
    }

    pub(crate) fn set_behavior(&mut self, behavior: BehaviorState) {
        self.behavior = behavior;
    }

    pub(crate) fn set_movement(&mut self, movement: MovementState) {
        self.movement = movement;
    }

    pub(crate) fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }
}
