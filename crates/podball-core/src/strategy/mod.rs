//! Behavior strategies.
//!
//! Role-specific decision making lives behind the [`BehaviorStrategy`]
//! trait: the simulation pipeline (decision timer → target resolution →
//! actuation) is fixed, and only the strategy varies per role. Strategies
//! are stateless; everything they need is read from the agent and the ball.

mod defender;
mod standard;

pub use defender::{DefenderStrategy, DEFEND_HOLD_RADIUS};
pub use standard::StandardStrategy;

use crate::agent::{Agent, AgentRole, Ball, BehaviorState};
use glam::Vec3;
use std::sync::Arc;

/// Role-specific decision logic.
///
/// Implementations must be pure with respect to the agent: they read agent
/// and ball state and return values, they never mutate. `Send + Sync`
/// because the strategy set is shared behind `Arc`.
pub trait BehaviorStrategy: Send + Sync {
    /// Picks the next behavior state. Called on the decision cadence, never
    /// for an Idle agent.
    fn select(&self, agent: &Agent, ball: &Ball) -> BehaviorState;

    /// Resolves the agent's desired world position from its current
    /// behavior state. Called every physics tick for non-Idle agents.
    fn resolve_target(&self, agent: &Agent, ball: &Ball) -> Vec3;

    /// Whether the agent should hold position (rotation-only correction)
    /// rather than drive toward `target` this tick.
    fn holds_position(&self, agent: &Agent, target: Vec3) -> bool {
        let _ = (agent, target);
        false
    }
}

/// The strategy for each [`AgentRole`].
#[derive(Clone)]
pub struct StrategySet {
    standard: Arc<dyn BehaviorStrategy>,
    defender: Arc<dyn BehaviorStrategy>,
}

impl StrategySet {
    /// Builds the standard set covering both roles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            standard: Arc::new(StandardStrategy),
            defender: Arc::new(DefenderStrategy),
        }
    }

    /// Returns the strategy for the given role.
    #[must_use]
    pub fn for_role(&self, role: AgentRole) -> &dyn BehaviorStrategy {
        match role {
            AgentRole::Standard => self.standard.as_ref(),
            AgentRole::Defender => self.defender.as_ref(),
        }
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StrategySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategySet").finish_non_exhaustive()
    }
}
