//! The standard chaser strategy.

use super::BehaviorStrategy;
use crate::agent::{Agent, Ball, BehaviorState};
use crate::geometry;
use glam::Vec3;

/// Chases the ball: attacks when positioned behind it relative to the play
/// direction, otherwise navigates to a supporting point behind it.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardStrategy;

impl StandardStrategy {
    /// Base selection rule shared with the defender when it is not defending.
    pub(crate) fn base_select(agent: &Agent, ball: &Ball) -> BehaviorState {
        let to_ball = ball.position - agent.transform.position;
        if to_ball.dot(agent.config().play_direction) > 0.0 {
            BehaviorState::Attacking
        } else {
            BehaviorState::Navigating
        }
    }

    /// Base resolution shared with the defender when it is not defending.
    pub(crate) fn base_resolve(agent: &Agent, ball: &Ball) -> Vec3 {
        let config = agent.config();
        match agent.behavior() {
            BehaviorState::Attacking => geometry::anticipated_target(
                ball.position,
                ball.velocity,
                agent.transform.position,
                config.anticipate_amount,
            ),
            // Navigating, and any state the base rule has no opinion on:
            // steer for the point behind the ball, skirting the ball itself.
            _ => {
                let behind = ball.position - config.play_direction * config.attack_distance;
                geometry::avoidance_target(
                    agent.transform.position,
                    ball.position,
                    behind,
                    config.avoid_offset_scale,
                )
            }
        }
    }
}

impl BehaviorStrategy for StandardStrategy {
    fn select(&self, agent: &Agent, ball: &Ball) -> BehaviorState {
        Self::base_select(agent, ball)
    }

    fn resolve_target(&self, agent: &Agent, ball: &Ball) -> Vec3 {
        Self::base_resolve(agent, ball)
    }
}
