//! Boost state machine.
//!
//! Movement state cycles `Swimming → Boosting → Recharging → Swimming`,
//! driven by three timer kinds: a self-rescheduling trigger loop
//! ([`TaskKind::AttemptBoost`]) whose delay depends on how close the agent
//! is to its target, a boost timer ([`TaskKind::EndBoost`]), and a cooldown
//! timer ([`TaskKind::EndCooldown`]). `Idle` is an externally-forced
//! override reachable from any state via deactivation.
//!
//! Each handler re-checks the movement state before transitioning: a timer
//! that fires after the state has moved on (forced Idle, or a stale chain)
//! exits silently instead of mutating anything.

use crate::agent::{Agent, AgentId, MovementState};
use crate::scheduler::{secs_to_ticks, ScheduledTask, TaskKind, TaskQueue};
use tracing::{debug, trace};

/// Fire-and-forget notifications for boost transitions.
///
/// Forwarded to animation/VFX by the embedding game; the scheduler tolerates
/// running with no listener attached.
pub trait BoostHooks: Send + Sync {
    /// A boost just started for `agent`.
    fn boost_started(&self, agent: AgentId);
    /// A boost just ended for `agent`.
    fn boost_stopped(&self, agent: AgentId);
}

/// Drives the boost state machine over scheduled tasks.
#[derive(Debug, Clone, Copy)]
pub struct BoostScheduler {
    dt: f32,
}

impl BoostScheduler {
    /// Creates a scheduler for the given fixed timestep.
    #[must_use]
    pub const fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// Re-arms the trigger loop after an attempt: the next attempt comes
    /// after the computed delay (attempt-then-wait).
    pub fn arm(&self, agent: &Agent, now: u64, queue: &mut TaskQueue) {
        let delay = secs_to_ticks(self.trigger_delay(agent), self.dt);
        queue.schedule(
            now + delay,
            ScheduledTask {
                agent: agent.id(),
                generation: agent.generation(),
                kind: TaskKind::AttemptBoost,
            },
        );
    }

    /// Next trigger delay in seconds: long while parked near the target,
    /// short while chasing.
    fn trigger_delay(&self, agent: &Agent) -> f32 {
        let config = agent.config();
        if agent.transform.position.distance(agent.target()) < config.attack_distance {
            config.max_boost_delay
        } else {
            config.min_boost_delay
        }
    }

    /// Handles a trigger-loop fire: attempts a boost, then re-arms the loop.
    pub fn on_attempt(
        &self,
        agent: &mut Agent,
        now: u64,
        queue: &mut TaskQueue,
        hooks: Option<&dyn BoostHooks>,
    ) {
        if agent.movement() == MovementState::Idle {
            // Shouldn't be reachable past the generation check; stop the
            // loop rather than re-arm against an idle agent.
            trace!(agent = %agent.id(), "boost trigger fired while idle");
            return;
        }

        if agent.movement() == MovementState::Swimming {
            debug!(agent = %agent.id(), "boost started");
            agent.set_movement(MovementState::Boosting);
            if let Some(hooks) = hooks {
                hooks.boost_started(agent.id());
            }
            let duration = secs_to_ticks(agent.config().boost_duration, self.dt);
            queue.schedule(
                now + duration,
                ScheduledTask {
                    agent: agent.id(),
                    generation: agent.generation(),
                    kind: TaskKind::EndBoost,
                },
            );
        } else {
            trace!(agent = %agent.id(), state = %agent.movement(), "boost attempt refused");
        }

        self.arm(agent, now, queue);
    }

    /// Handles the boost timer: ends the boost and starts the cooldown.
    pub fn on_end_boost(
        &self,
        agent: &mut Agent,
        now: u64,
        queue: &mut TaskQueue,
        hooks: Option<&dyn BoostHooks>,
    ) {
        if agent.movement() != MovementState::Boosting {
            trace!(agent = %agent.id(), state = %agent.movement(), "boost end skipped");
            return;
        }

        debug!(agent = %agent.id(), "boost stopped");
        agent.set_movement(MovementState::Recharging);
        if let Some(hooks) = hooks {
            hooks.boost_stopped(agent.id());
        }
        let cooldown = secs_to_ticks(agent.config().boost_cooldown, self.dt);
        queue.schedule(
            now + cooldown,
            ScheduledTask {
                agent: agent.id(),
                generation: agent.generation(),
                kind: TaskKind::EndCooldown,
            },
        );
    }

    /// Handles the cooldown timer: returns to Swimming unless pre-empted.
    pub fn on_end_cooldown(&self, agent: &mut Agent) {
        if agent.movement() != MovementState::Recharging {
            trace!(agent = %agent.id(), state = %agent.movement(), "cooldown end skipped");
            return;
        }
        debug!(agent = %agent.id(), "boost recharged");
        agent.set_movement(MovementState::Swimming);
    }
}
