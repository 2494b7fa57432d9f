//! Test setup utilities.

use std::sync::{Arc, Mutex};

use glam::Vec3;

use crate::agent::{AgentConfig, AgentId, DefenderProfile};
use crate::boost::BoostHooks;
use crate::simulation::Simulation;

/// A recorded boost notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostEvent {
    /// `boost_started` fired for the agent.
    Started(AgentId),
    /// `boost_stopped` fired for the agent.
    Stopped(AgentId),
}

/// Boost hooks that record every notification for later assertions.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    events: Mutex<Vec<BoostEvent>>,
}

impl RecordingHooks {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<BoostEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn started_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, BoostEvent::Started(_)))
            .count()
    }

    pub fn stopped_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, BoostEvent::Stopped(_)))
            .count()
    }
}

impl BoostHooks for RecordingHooks {
    fn boost_started(&self, agent: AgentId) {
        self.events.lock().unwrap().push(BoostEvent::Started(agent));
    }

    fn boost_stopped(&self, agent: AgentId) {
        self.events.lock().unwrap().push(BoostEvent::Stopped(agent));
    }
}

/// Simulation with one standard agent at `position` and recording hooks
/// installed. The agent is spawned but not activated.
pub fn sim_with_agent(
    config: AgentConfig,
    position: Vec3,
) -> (Simulation, AgentId, Arc<RecordingHooks>) {
    let mut sim = Simulation::new();
    let hooks = RecordingHooks::new();
    sim.set_boost_hooks(hooks.clone());
    let id = sim
        .world_mut()
        .spawn_agent(config, position)
        .expect("test config must be valid");
    (sim, id, hooks)
}

/// Simulation with one default-radius defender homed at `home`.
pub fn sim_with_defender(home: Vec3) -> (Simulation, AgentId) {
    let mut sim = Simulation::new();
    let id = sim
        .world_mut()
        .spawn_defender(
            AgentConfig::default(),
            home,
            DefenderProfile::DEFAULT_DEFEND_RADIUS,
            DefenderProfile::DEFAULT_LOCALE_RADIUS,
        )
        .expect("test config must be valid");
    (sim, id)
}

/// Steps until the agent's movement state satisfies `pred`, up to `max`
/// ticks. Returns the tick at which it first held.
pub fn run_until<F>(sim: &mut Simulation, id: AgentId, max: u64, pred: F) -> Option<u64>
where
    F: Fn(crate::agent::MovementState) -> bool,
{
    for _ in 0..max {
        sim.step();
        let state = sim.world().agent(id).expect("agent exists").movement();
        if pred(state) {
            return Some(sim.tick());
        }
    }
    None
}
