//! Simulation orchestrator.
//!
//! [`Simulation`] ties the pieces together and advances the world one fixed
//! timestep at a time. Each [`Simulation::step`] runs four phases in order:
//!
//! 1. **Timers** — every task due this tick is dispatched, oldest first.
//!    A task whose generation no longer matches its agent's is dropped
//!    unexamined; this is the cancellation path for deactivated agents.
//! 2. **Resolution** — each non-Idle agent's strategy resolves a fresh
//!    target from the current ball state.
//! 3. **Actuation** — the movement actuator applies the per-tick impulse
//!    and heading correction toward that target.
//! 4. **Integration** — non-kinematic bodies advance by their velocities.
//!    The ball is never integrated here; it belongs to the embedding world.
//!
//! The lifecycle surface (`activate`, `deactivate`, `start_round`) is what
//! the round orchestrator calls on round boundaries. All three are
//! idempotent and safe in any state.

use crate::actuator::MovementActuator;
use crate::agent::{AgentId, BehaviorState, MovementState};
use crate::boost::{BoostHooks, BoostScheduler};
use crate::geometry;
use crate::scheduler::{secs_to_ticks, ScheduledTask, TaskKind, TaskQueue};
use crate::strategy::StrategySet;
use crate::world::World;
use glam::Quat;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// Fixed simulation timestep, 60 Hz.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Lifecycle and stepping errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The referenced agent does not exist.
    #[error("unknown agent {0}")]
    UnknownAgent(AgentId),
}

/// The steering simulation: world, timers, strategies, and actuation.
pub struct Simulation {
    world: World,
    queue: TaskQueue,
    strategies: StrategySet,
    actuator: MovementActuator,
    boost: BoostScheduler,
    hooks: Option<Arc<dyn BoostHooks>>,
    dt: f32,
    tick: u64,
}

impl Simulation {
    /// Creates a simulation at the standard 60 Hz timestep.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dt(FIXED_DT)
    }

    /// Creates a simulation with a custom fixed timestep.
    #[must_use]
    pub fn with_dt(dt: f32) -> Self {
        Self {
            world: World::new(),
            queue: TaskQueue::new(),
            strategies: StrategySet::new(),
            actuator: MovementActuator::new(dt),
            boost: BoostScheduler::new(dt),
            hooks: None,
            dt,
            tick: 0,
        }
    }

    /// Installs the boost notification hooks. The simulation runs fine
    /// without any.
    pub fn set_boost_hooks(&mut self, hooks: Arc<dyn BoostHooks>) {
        self.hooks = Some(hooks);
    }

    /// Read access to the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world (spawning, moving the ball).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Current tick counter.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Fixed timestep in seconds.
    #[must_use]
    pub const fn dt(&self) -> f32 {
        self.dt
    }

    /// Number of timers currently queued.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Brings an agent into play: Navigating/Swimming, dynamic body, fresh
    /// decision and boost-trigger timer chains.
    ///
    /// Calling this on an already-active agent restarts its timer chains
    /// under a new generation rather than stacking duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::UnknownAgent`] for an id the world does
    /// not contain.
    pub fn activate(&mut self, id: AgentId) -> Result<(), SimulationError> {
        let now = self.tick;
        let agent = self
            .world
            .agent_mut(id)
            .ok_or(SimulationError::UnknownAgent(id))?;

        agent.bump_generation();
        agent.set_behavior(BehaviorState::Navigating);
        agent.set_movement(MovementState::Swimming);
        agent.body.kinematic = false;
        debug!(agent = %id, "activated");

        // First decision next tick, then on the configured period.
        self.queue.schedule(
            now + 1,
            ScheduledTask {
                agent: id,
                generation: agent.generation(),
                kind: TaskKind::Decide,
            },
        );
        // The trigger loop attempts first and waits after: first attempt on
        // the next tick, then the handler re-arms with the computed delay.
        self.queue.schedule(
            now + 1,
            ScheduledTask {
                agent: id,
                generation: agent.generation(),
                kind: TaskKind::AttemptBoost,
            },
        );
        Ok(())
    }

    /// Takes an agent out of play: both state axes Idle, body kinematic,
    /// velocities zeroed, every outstanding timer cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::UnknownAgent`] for an id the world does
    /// not contain.
    pub fn deactivate(&mut self, id: AgentId) -> Result<(), SimulationError> {
        let agent = self
            .world
            .agent_mut(id)
            .ok_or(SimulationError::UnknownAgent(id))?;

        // The bump strands every queued timer for this agent before any of
        // them can fire.
        agent.bump_generation();
        agent.set_behavior(BehaviorState::Idle);
        agent.set_movement(MovementState::Idle);
        agent.body.kinematic = true;
        agent.body.reset_velocity();
        debug!(agent = %id, "deactivated");
        Ok(())
    }

    /// Round-start reset: zero velocities and face the play direction.
    /// Leaves both state axes alone; those belong to activate/deactivate.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::UnknownAgent`] for an id the world does
    /// not contain.
    pub fn start_round(&mut self, id: AgentId) -> Result<(), SimulationError> {
        let agent = self
            .world
            .agent_mut(id)
            .ok_or(SimulationError::UnknownAgent(id))?;

        agent.body.reset_velocity();
        agent.transform.orientation =
            geometry::look_rotation(agent.config().play_direction).unwrap_or(Quat::IDENTITY);
        debug!(agent = %id, "round reset");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Stepping
    // ------------------------------------------------------------------

    /// Advances the simulation one fixed timestep.
    pub fn step(&mut self) {
        let now = self.tick;

        for task in self.queue.pop_due(now) {
            self.dispatch(task);
        }

        let ball = *self.world.ball();
        for id in self.world.agent_ids() {
            let Some(agent) = self.world.agent_mut(id) else {
                continue;
            };
            if agent.behavior() == BehaviorState::Idle {
                continue;
            }
            let strategy = self.strategies.for_role(agent.role());
            let target = strategy.resolve_target(agent, &ball);
            agent.set_target(target);
            let hold = strategy.holds_position(agent, target);
            self.actuator.step(agent, target, hold);
        }

        let dt = self.dt;
        for agent in self.world.agents_mut() {
            if agent.body.kinematic {
                continue;
            }
            agent.transform.position += agent.body.velocity * dt;
            if agent.body.angular_velocity.length_squared() > 0.0 {
                let spin = Quat::from_scaled_axis(agent.body.angular_velocity * dt);
                agent.transform.orientation = (spin * agent.transform.orientation).normalize();
            }
        }

        self.tick += 1;
    }

    /// Advances the simulation `n` timesteps.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    fn dispatch(&mut self, task: ScheduledTask) {
        let now = self.tick;
        let ball = *self.world.ball();
        let Some(agent) = self.world.agent_mut(task.agent) else {
            trace!(agent = %task.agent, "timer for missing agent dropped");
            return;
        };

        // The liveness check: a timer scheduled before the last
        // activate/deactivate must never mutate state.
        if task.generation != agent.generation() {
            trace!(agent = %task.agent, kind = ?task.kind, "stale timer dropped");
            return;
        }

        match task.kind {
            TaskKind::Decide => {
                // Decision suspended while idle; the chain still re-arms so
                // it resumes if behavior is restored under this generation.
                if agent.behavior() != BehaviorState::Idle {
                    let strategy = self.strategies.for_role(agent.role());
                    let next = strategy.select(agent, &ball);
                    if next != agent.behavior() {
                        debug!(agent = %task.agent, from = %agent.behavior(), to = %next, "behavior change");
                        agent.set_behavior(next);
                    }
                }
                let period = secs_to_ticks(agent.config().decision_interval, self.dt);
                self.queue.schedule(
                    now + period,
                    ScheduledTask {
                        agent: task.agent,
                        generation: task.generation,
                        kind: TaskKind::Decide,
                    },
                );
            }
            TaskKind::AttemptBoost => {
                self.boost
                    .on_attempt(agent, now, &mut self.queue, self.hooks.as_deref());
            }
            TaskKind::EndBoost => {
                self.boost
                    .on_end_boost(agent, now, &mut self.queue, self.hooks.as_deref());
            }
            TaskKind::EndCooldown => {
                self.boost.on_end_cooldown(agent);
            }
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.tick)
            .field("dt", &self.dt)
            .field("agents", &self.world.len())
            .field("pending_tasks", &self.queue.len())
            .finish_non_exhaustive()
    }
}
