//! Deterministic timer scheduling.
//!
//! Decision timers, the boost trigger loop, and boost/cooldown timers are
//! all modeled as tasks queued against a future simulation tick. Tasks fire
//! in (tick, insertion order), so two tasks due on the same tick always
//! dispatch in the order they were scheduled.
//!
//! Every task carries the generation of the agent it was scheduled for. The
//! dispatcher drops any task whose generation no longer matches the agent's,
//! which is how deactivation cancels outstanding timers without touching the
//! queue: bumping the agent's generation strands every queued task at once.

use crate::agent::AgentId;
use std::collections::BTreeMap;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Run the behavior selector and re-arm the decision timer.
    Decide,
    /// Attempt a boost and re-arm the trigger loop.
    AttemptBoost,
    /// End the current boost and enter Recharging.
    EndBoost,
    /// End Recharging and return to Swimming.
    EndCooldown,
}

/// A timer queued against a future tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    /// The agent the timer belongs to.
    pub agent: AgentId,
    /// Agent generation at scheduling time; stale tasks are dropped.
    pub generation: u64,
    /// What to do on fire.
    pub kind: TaskKind,
}

/// Ordered queue of scheduled tasks.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: BTreeMap<(u64, u64), ScheduledTask>,
    next_seq: u64,
}

impl TaskQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire on `fire_tick`.
    pub fn schedule(&mut self, fire_tick: u64, task: ScheduledTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert((fire_tick, seq), task);
    }

    /// Removes and returns every task due on or before `tick`, in firing
    /// order.
    pub fn pop_due(&mut self, tick: u64) -> Vec<ScheduledTask> {
        let rest = self.tasks.split_off(&(tick + 1, 0));
        let due = std::mem::replace(&mut self.tasks, rest);
        due.into_values().collect()
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Converts a duration in seconds into a whole number of ticks, rounding to
/// the nearest tick but never below one (a zero-tick timer would fire in the
/// same dispatch that scheduled it).
#[must_use]
pub fn secs_to_ticks(secs: f32, dt: f32) -> u64 {
    let ticks = (secs / dt).round();
    if ticks < 1.0 {
        1
    } else {
        ticks as u64
    }
}
