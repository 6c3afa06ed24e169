//! Watches syndrome onset: a (unit, syndrome index) pair newly present in
//! a unit's active-syndrome list.

use crate::{
    error::EventResult,
    event::SimEvent,
    monitor::StateMonitor,
    types::{SyndromeIndex, Tick, UnitId},
    world::World,
};
use std::collections::HashSet;

#[derive(Default)]
pub struct SyndromeMonitor {
    known: HashSet<(UnitId, SyndromeIndex)>,
}

impl SyndromeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn active_pairs(world: &World) -> impl Iterator<Item = (UnitId, SyndromeIndex)> + '_ {
        world
            .units
            .iter()
            .flat_map(|u| u.syndromes.iter().map(move |&s| (u.id, s)))
    }
}

impl StateMonitor for SyndromeMonitor {
    fn name(&self) -> &'static str {
        "syndromes"
    }

    fn prime(&mut self, world: &World) {
        self.known = Self::active_pairs(world).collect();
    }

    fn scan(&mut self, tick: Tick, world: &World) -> EventResult<Vec<SimEvent>> {
        let mut events = Vec::new();
        for (unit_id, syndrome_index) in Self::active_pairs(world) {
            if self.known.insert((unit_id, syndrome_index)) {
                events.push(SimEvent::SyndromeStarted {
                    tick,
                    unit_id,
                    syndrome_index,
                });
            }
        }
        Ok(events)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
