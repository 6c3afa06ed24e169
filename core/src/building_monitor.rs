//! Watches the building list for construction and razing.

use crate::{
    error::EventResult,
    event::{SimEvent, StateChange},
    monitor::StateMonitor,
    types::{BuildingId, Tick},
    world::World,
};
use std::collections::HashSet;

#[derive(Default)]
pub struct BuildingMonitor {
    known: HashSet<BuildingId>,
}

impl BuildingMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateMonitor for BuildingMonitor {
    fn name(&self) -> &'static str {
        "buildings"
    }

    fn prime(&mut self, world: &World) {
        self.known = world.buildings.iter().map(|b| b.id).collect();
    }

    fn scan(&mut self, tick: Tick, world: &World) -> EventResult<Vec<SimEvent>> {
        let current: HashSet<BuildingId> = world.buildings.iter().map(|b| b.id).collect();
        let mut events = Vec::new();

        let mut razed: Vec<BuildingId> = self.known.difference(&current).copied().collect();
        razed.sort_unstable();
        for building_id in razed {
            events.push(SimEvent::BuildingChanged {
                tick,
                building_id,
                change: StateChange::Razed,
            });
        }

        let mut created: Vec<BuildingId> = current.difference(&self.known).copied().collect();
        created.sort_unstable();
        for building_id in created {
            events.push(SimEvent::BuildingChanged {
                tick,
                building_id,
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
