//! Agent roster and ball.
//!
//! The world owns every agent plus the read-only view of the ball. Agents
//! are stored in a `BTreeMap` keyed by id so iteration order is stable and
//! the simulation stays deterministic.

use crate::agent::{Agent, AgentConfig, AgentId, AgentRole, Ball, ConfigError, DefenderProfile};
use glam::Vec3;
use std::collections::BTreeMap;
use tracing::debug;

/// All simulated agents plus the ball they chase.
#[derive(Debug, Default)]
pub struct World {
    agents: BTreeMap<AgentId, Agent>,
    ball: Ball,
    next_id: u64,
}

impl World {
    /// Creates an empty world with the ball at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a standard agent at `position`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn spawn_agent(
        &mut self,
        config: AgentConfig,
        position: Vec3,
    ) -> Result<AgentId, ConfigError> {
        self.spawn(AgentRole::Standard, config, position, None)
    }

    /// Spawns a defender at `position`, capturing it as the home position.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn spawn_defender(
        &mut self,
        config: AgentConfig,
        position: Vec3,
        defend_radius: f32,
        locale_radius: f32,
    ) -> Result<AgentId, ConfigError> {
        let profile = DefenderProfile::capture(position, defend_radius, locale_radius);
        self.spawn(AgentRole::Defender, config, position, Some(profile))
    }

    fn spawn(
        &mut self,
        role: AgentRole,
        config: AgentConfig,
        position: Vec3,
        defender: Option<DefenderProfile>,
    ) -> Result<AgentId, ConfigError> {
        config.validate()?;
        let id = AgentId::new(self.next_id);
        self.next_id += 1;
        debug!(agent = %id, %role, ?position, "agent spawned");
        self.agents
            .insert(id, Agent::new(id, role, config, position, defender));
        Ok(id)
    }

    /// Returns the agent with the given id.
    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    /// Returns a mutable reference to the agent with the given id.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    /// Iterates agents in id order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// Iterates agents mutably in id order.
    pub fn agents_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.values_mut()
    }

    /// All agent ids in ascending order.
    #[must_use]
    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.agents.keys().copied().collect()
    }

    /// Number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the world has no agents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The ball, read-only to the steering core.
    #[must_use]
    pub const fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Replaces the ball state. Called by the embedding world (or tests);
    /// the core itself never writes the ball.
    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }
}
