//! Movement actuation.
//!
//! Once per physics tick the actuator converts the agent's resolved target
//! and current movement state into a bounded velocity-change impulse along
//! the forward axis plus a slerp of the orientation toward the target. The
//! impulse magnitude is exactly `speed * dt` regardless of tick rate.

use crate::agent::{Agent, BehaviorState, MovementState};
use crate::geometry;
use glam::Vec3;

/// Applies forces and heading corrections to an agent each physics tick.
#[derive(Debug, Clone, Copy)]
pub struct MovementActuator {
    dt: f32,
}

impl MovementActuator {
    /// Creates an actuator for the given fixed timestep.
    #[must_use]
    pub const fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// Returns the fixed timestep.
    #[must_use]
    pub const fn dt(&self) -> f32 {
        self.dt
    }

    /// Steps the agent toward `target`.
    ///
    /// `hold` suppresses the forward impulse (rotation-only correction, used
    /// by defenders parked on their defend point). No force or torque is
    /// produced when either state axis is Idle.
    pub fn step(&self, agent: &mut Agent, target: Vec3, hold: bool) {
        if agent.behavior() == BehaviorState::Idle
            || agent.movement() == MovementState::Idle
        {
            return;
        }

        let speed = if agent.movement() == MovementState::Boosting {
            agent.config().boost_speed
        } else {
            agent.config().move_speed
        };

        if !hold {
            let impulse = agent.transform.forward() * speed * self.dt;
            agent.body.apply_impulse(impulse);
        }

        // Degenerate direction (target on top of the agent): keep heading.
        if let Some(look) = geometry::look_rotation(target - agent.transform.position) {
            let factor = (agent.config().turn_speed * self.dt).clamp(0.0, 1.0);
            agent.transform.orientation =
                agent.transform.orientation.slerp(look, factor).normalize();
        }
    }
}
