//! # Podball Core
//!
//! Opponent steering core for Podball: deterministic, fixed-timestep
//! decision making and movement for the autonomous agents of a
//! physics-driven ball-sport game.
//!
//! ## Architecture
//!
//! - **Agents**: pose, rigid body, tuning, and the two independent state
//!   axes (behavior and movement)
//! - **Strategies**: role-specific `select`/`resolve_target` logic behind
//!   the [`BehaviorStrategy`] trait (standard chaser, defender)
//! - **Scheduler**: cancellable tick-based timers with generation stamping
//! - **Boost**: the Swimming → Boosting → Recharging cycle and its
//!   self-rescheduling trigger loop
//! - **Actuator**: per-tick velocity-change impulses and heading slerp
//! - **Simulation**: the orchestrator and the lifecycle surface
//!   (`activate`/`deactivate`/`start_round`) the round manager drives
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use podball_core::{AgentConfig, Ball, Simulation};
//!
//! let mut sim = Simulation::new();
//! let id = sim
//!     .world_mut()
//!     .spawn_agent(AgentConfig::default(), Vec3::ZERO)
//!     .unwrap();
//! sim.world_mut().set_ball(Ball::at(Vec3::new(0.0, 0.0, 10.0)));
//! sim.activate(id).unwrap();
//! sim.run(60);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actuator;
pub mod agent;
pub mod boost;
pub mod geometry;
pub mod scheduler;
pub mod simulation;
pub mod strategy;
pub mod world;

pub use actuator::MovementActuator;
pub use agent::{
    Agent, AgentConfig, AgentId, AgentRole, Ball, BehaviorState, ConfigError, DefenderProfile,
    MovementState, RigidBody, TransformState,
};
pub use boost::{BoostHooks, BoostScheduler};
pub use scheduler::{ScheduledTask, TaskKind, TaskQueue};
pub use simulation::{Simulation, SimulationError, FIXED_DT};
pub use strategy::{BehaviorStrategy, DefenderStrategy, StandardStrategy, StrategySet};
pub use world::World;

#[cfg(test)]
mod tests;
