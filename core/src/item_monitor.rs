//! Watches item creation.
//!
//! Item ids are allocated monotonically, so the baseline is a single
//! high-water mark rather than an id set: anything at or above the previous
//! next-id was created since the last scan.

use crate::{
    error::EventResult,
    event::SimEvent,
    monitor::StateMonitor,
    types::{ItemId, Tick},
    world::World,
};

#[derive(Default)]
pub struct ItemMonitor {
    next_id: ItemId,
}

impl ItemMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateMonitor for ItemMonitor {
    fn name(&self) -> &'static str {
        "items"
    }

    fn prime(&mut self, world: &World) {
        self.next_id = world.next_item_id();
    }

    fn scan(&mut self, tick: Tick, world: &World) -> EventResult<Vec<SimEvent>> {
        let watermark = self.next_id;
        self.next_id = world.next_item_id();
        let events = world
            .items()
            .iter()
            .filter(|item| item.id >= watermark)
            .map(|item| SimEvent::ItemCreated {
                tick,
                item_id: item.id,
            })
            .collect();
        Ok(events)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
