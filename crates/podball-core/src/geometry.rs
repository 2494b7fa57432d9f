//! Pure steering geometry.
//!
//! Every function here is a total function of its arguments: no state, no
//! logging, no floating-point surprises beyond documented degenerate-input
//! fallbacks. The actuator and strategies compose these into per-tick
//! decisions.

use glam::{Quat, Vec3};

/// Squared-length threshold below which a vector is treated as zero.
pub const EPSILON: f32 = 1e-4;

/// Leads a moving ball by an amount proportional to the chaser's distance.
///
/// Returns `ball_pos + ball_vel * dist(ball_pos, agent_pos) * amount`.
/// With `amount == 0.0` this is the ball position itself.
#[must_use]
pub fn anticipated_target(ball_pos: Vec3, ball_vel: Vec3, agent_pos: Vec3, amount: f32) -> Vec3 {
    ball_pos + ball_vel * ball_pos.distance(agent_pos) * amount
}

/// Steers around an obstacle sitting between the agent and its goal.
///
/// Projects the obstacle `b` onto the segment from the agent `a` to the goal
/// `c`, then pushes the goal sideways away from the obstacle. The push is
/// scaled by how directly the obstacle lies on the path: an obstacle dead
/// ahead gets the full `scale`, one perpendicular to the path gets half, one
/// directly behind gets none.
///
/// Degenerate inputs (agent on top of the goal, or obstacle on the line
/// through them) return `c` unmodified.
#[must_use]
pub fn avoidance_target(a: Vec3, b: Vec3, c: Vec3, scale: f32) -> Vec3 {
    let path = c - a;
    if path.length_squared() < EPSILON {
        return c;
    }

    // Closest point on the infinite line a..c to the obstacle.
    let t = (c - b).dot(path) / path.dot(path);
    let d = a + t * path;

    let away = d - b;
    if away.length_squared() < EPSILON {
        return c;
    }

    let to_obstacle = b - a;
    if to_obstacle.length_squared() < EPSILON {
        return c;
    }

    // 1.0 when the obstacle is straight ahead, 0.0 when straight behind.
    let parallelism = (path.normalize().dot(to_obstacle.normalize()) + 1.0) / 2.0;

    c + away.normalize() * scale * parallelism
}

/// Rotation that points the forward (+Z) axis along `direction`.
///
/// Returns `None` for a near-zero direction, in which case the caller keeps
/// its current heading.
#[must_use]
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    if direction.length_squared() < EPSILON {
        return None;
    }
    Some(Quat::from_rotation_arc(Vec3::Z, direction.normalize()))
}
