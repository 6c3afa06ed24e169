//! Watches the invasion counter. One event per id minted since last scan.

use crate::{
    error::EventResult,
    event::SimEvent,
    monitor::StateMonitor,
    types::{InvasionId, Tick},
    world::World,
};

#[derive(Default)]
pub struct InvasionMonitor {
    seen: InvasionId,
}

impl InvasionMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateMonitor for InvasionMonitor {
    fn name(&self) -> &'static str {
        "invasions"
    }

    fn prime(&mut self, world: &World) {
        self.seen = world.invasion_count();
    }

    fn scan(&mut self, tick: Tick, world: &World) -> EventResult<Vec<SimEvent>> {
        let events = (self.seen..world.invasion_count())
            .map(|invasion_id| SimEvent::InvasionStarted { tick, invasion_id })
            .collect();
        self.seen = world.invasion_count();
        Ok(events)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
