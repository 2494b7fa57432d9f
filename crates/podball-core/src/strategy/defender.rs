//! The defender strategy.
//!
//! A defender guards a depth band around the home position captured at
//! spawn. It enters Defending when the ball leaves that band (it is guarding
//! the open lane, not chasing the ball into it) and falls back to the
//! standard chase rules once the ball has returned AND the defender is no
//! longer close to it. The asymmetric entry/exit is deliberate hysteresis.

use super::{BehaviorStrategy, StandardStrategy};
use crate::agent::{Agent, Ball, BehaviorState, DefenderProfile};
use crate::geometry;
use glam::Vec3;

/// Distance to the defend point under which the defender stops driving and
/// only corrects its heading.
pub const DEFEND_HOLD_RADIUS: f32 = 2.0;

/// Holds a depth line, tracking the ball laterally; chases like a standard
/// agent when the ball is inside its locale.
#[derive(Debug, Default, Copy, Clone)]
pub struct DefenderStrategy;

impl DefenderStrategy {
    fn should_defend(agent: &Agent, ball: &Ball, profile: &DefenderProfile) -> bool {
        let near_ball =
            ball.position.distance(agent.transform.position) < profile.defend_radius;
        let within_locale =
            (profile.home_position.z - ball.position.z).abs() < profile.locale_radius;

        if agent.behavior() == BehaviorState::Defending {
            // Exit only when the ball is back in the locale and the defender
            // is clear of it; still-near keeps it defending.
            !(within_locale && !near_ball)
        } else {
            !within_locale
        }
    }
}

impl BehaviorStrategy for DefenderStrategy {
    fn select(&self, agent: &Agent, ball: &Ball) -> BehaviorState {
        // A defender without a profile degrades to the base rules.
        if let Some(profile) = agent.defender() {
            if Self::should_defend(agent, ball, profile) {
                return BehaviorState::Defending;
            }
        }
        StandardStrategy::base_select(agent, ball)
    }

    fn resolve_target(&self, agent: &Agent, ball: &Ball) -> Vec3 {
        match (agent.behavior(), agent.defender()) {
            (BehaviorState::Defending, Some(profile)) => {
                let anticipated = geometry::anticipated_target(
                    ball.position,
                    ball.velocity,
                    agent.transform.position,
                    agent.config().anticipate_amount,
                );
                // Track the ball laterally, hold the home depth line.
                Vec3::new(
                    anticipated.x + profile.home_position.x,
                    anticipated.y,
                    profile.home_position.z,
                )
            }
            _ => StandardStrategy::base_resolve(agent, ball),
        }
    }

    fn holds_position(&self, agent: &Agent, target: Vec3) -> bool {
        agent.behavior() == BehaviorState::Defending
            && target.distance(agent.transform.position) < DEFEND_HOLD_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentConfig, AgentId, AgentRole};

    fn defender_at(home: Vec3) -> Agent {
        Agent::new(
            AgentId::new(1),
            AgentRole::Defender,
            AgentConfig::default(),
            home,
            Some(DefenderProfile::capture(
                home,
                DefenderProfile::DEFAULT_DEFEND_RADIUS,
                DefenderProfile::DEFAULT_LOCALE_RADIUS,
            )),
        )
    }

    #[test]
    fn enters_defending_when_ball_leaves_locale() {
        // locale_radius = 50: a ball 60 units up-field is outside the lane.
        let agent = defender_at(Vec3::new(0.0, 0.0, -40.0));
        let ball = Ball::at(Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(
            DefenderStrategy.select(&agent, &ball),
            BehaviorState::Defending
        );
    }

    #[test]
    fn chases_while_ball_is_inside_locale() {
        let agent = defender_at(Vec3::new(0.0, 0.0, -40.0));
        let ball = Ball::at(Vec3::new(0.0, 0.0, -20.0));
        // |home.z - ball.z| = 20 < 50 and not already defending: base rule.
        assert_eq!(
            DefenderStrategy.select(&agent, &ball),
            BehaviorState::Attacking
        );
    }

    #[test]
    fn stays_defending_while_still_near_the_ball() {
        // Ball back inside the locale but within defend_radius (10) of the
        // agent: the exit condition is not met.
        let mut agent = defender_at(Vec3::new(0.0, 0.0, -40.0));
        agent.set_behavior(BehaviorState::Defending);
        let ball = Ball::at(Vec3::new(0.0, 0.0, -35.0));
        assert_eq!(
            DefenderStrategy.select(&agent, &ball),
            BehaviorState::Defending
        );
    }

    #[test]
    fn exits_defending_once_clear_of_the_ball() {
        let mut agent = defender_at(Vec3::new(0.0, 0.0, -40.0));
        agent.set_behavior(BehaviorState::Defending);
        // Inside the locale (|−40 − (−10)| = 30 < 50), 30 units away (> 10).
        let ball = Ball::at(Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(
            DefenderStrategy.select(&agent, &ball),
            BehaviorState::Attacking
        );
    }

    #[test]
    fn defending_target_holds_home_depth() {
        let home = Vec3::new(3.0, 0.0, -40.0);
        let mut agent = defender_at(home);
        agent.set_behavior(BehaviorState::Defending);
        let ball = Ball::at(Vec3::new(7.0, 1.0, 30.0));

        // anticipate_amount = 0: anticipated = ball position.
        let target = DefenderStrategy.resolve_target(&agent, &ball);
        assert_eq!(target, Vec3::new(7.0 + 3.0, 1.0, -40.0));
    }

    #[test]
    fn holds_position_only_when_defending_and_close() {
        let mut agent = defender_at(Vec3::new(0.0, 0.0, -40.0));
        let near = Vec3::new(0.0, 0.0, -39.0);
        let far = Vec3::new(0.0, 0.0, -20.0);

        assert!(!DefenderStrategy.holds_position(&agent, near));

        agent.set_behavior(BehaviorState::Defending);
        assert!(DefenderStrategy.holds_position(&agent, near));
        assert!(!DefenderStrategy.holds_position(&agent, far));
    }
}
