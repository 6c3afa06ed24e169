//! Watches the construction list. Same id-set diff as buildings, kept as
//! its own monitor because constructions are a distinct event kind with a
//! distinct listener chain.

use crate::{
    error::EventResult,
    event::{SimEvent, StateChange},
    monitor::StateMonitor,
    types::{ConstructionId, Tick},
    world::World,
};
use std::collections::HashSet;

#[derive(Default)]
pub struct ConstructionMonitor {
    known: HashSet<ConstructionId>,
}

impl ConstructionMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateMonitor for ConstructionMonitor {
    fn name(&self) -> &'static str {
        "constructions"
    }

    fn prime(&mut self, world: &World) {
        self.known = world.constructions.iter().map(|c| c.id).collect();
    }

    fn scan(&mut self, tick: Tick, world: &World) -> EventResult<Vec<SimEvent>> {
        let current: HashSet<ConstructionId> =
            world.constructions.iter().map(|c| c.id).collect();
        let mut events = Vec::new();

        let mut removed: Vec<ConstructionId> = self.known.difference(&current).copied().collect();
        removed.sort_unstable();
        for construction_id in removed {
            events.push(SimEvent::ConstructionChanged {
                tick,
                construction_id,
                change: StateChange::Razed,
            });
        }

        let mut created: Vec<ConstructionId> = current.difference(&self.known).copied().collect();
        created.sort_unstable();
        for construction_id in created {
            events.push(SimEvent::ConstructionChanged {
                tick,
                construction_id,
                change: StateChange::Created,
            });
        }

        self.known = current;
        Ok(events)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
