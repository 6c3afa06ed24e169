//! Watches unit death flags.

use crate::{
    error::EventResult,
    event::SimEvent,
    monitor::StateMonitor,
    types::{Tick, UnitId},
    world::World,
};
use std::collections::HashSet;

#[derive(Default)]
pub struct UnitMonitor {
    known_dead: HashSet<UnitId>,
}

impl UnitMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateMonitor for UnitMonitor {
    fn name(&self) -> &'static str {
        "units"
    }

    fn prime(&mut self, world: &World) {
        self.known_dead = world
            .units
            .iter()
            .filter(|u| u.dead)
            .map(|u| u.id)
            .collect();
    }

    fn scan(&mut self, tick: Tick, world: &World) -> EventResult<Vec<SimEvent>> {
        let mut events = Vec::new();
        for unit in world.units.iter().filter(|u| u.dead) {
            if self.known_dead.insert(unit.id) {
                events.push(SimEvent::UnitDied {
                    tick,
                    unit_id: unit.id,
                });
            }
        }
        Ok(events)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
