//! The introspection engine — the heart of Overseer.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Job monitor
//!   2. Unit monitor
//!   3. Item monitor
//!   4. Building monitor
//!   5. Construction monitor
//!   6. Syndrome monitor
//!   7. Invasion monitor
//!
//! RULES:
//!   - Monitors scan in attachment order, every step.
//!   - Every derived event is appended to the event log before dispatch.
//!   - Dispatch is synchronous on the step, one event at a time, listeners
//!     in ascending priority order; listener failures are contained.

use crate::{
    building_monitor::BuildingMonitor,
    clock::SimClock,
    console::{Console, ConsoleCapture},
    construction_monitor::ConstructionMonitor,
    error::EventResult,
    event::{EventLogEntry, SimEvent},
    invasion_monitor::InvasionMonitor,
    item_monitor::ItemMonitor,
    job_monitor::JobMonitor,
    monitor::StateMonitor,
    registry::EventRegistry,
    store::EventStore,
    syndrome_monitor::SyndromeMonitor,
    types::{RunId, Tick},
    unit_monitor::UnitMonitor,
    world::World,
};

pub struct EventEngine {
    pub run_id: RunId,
    pub clock:  SimClock,
    world:      World,
    monitors:   Vec<Box<dyn StateMonitor>>,
    registry:   EventRegistry,
    store:      EventStore,
    console:    Console,
}

impl EventEngine {
    /// Engine with no monitors attached. Callers attach their own.
    pub fn new(run_id: RunId, store: EventStore, console: Console) -> Self {
        Self {
            clock: SimClock::new(run_id.clone()),
            world: World::new(),
            monitors: Vec::new(),
            registry: EventRegistry::new(),
            store,
            console,
            run_id,
        }
    }

    /// Build a fully wired engine with every monitor attached.
    /// Call this instead of new() + manual attach_monitor() calls.
    pub fn build(run_id: RunId, store: EventStore, console: Console) -> Self {
        let mut engine = Self::new(run_id, store, console);

        // EXECUTION ORDER — fixed, documented, never reordered.
        engine.attach_monitor(Box::new(JobMonitor::new()));
        engine.attach_monitor(Box::new(UnitMonitor::new()));
        engine.attach_monitor(Box::new(ItemMonitor::new()));
        engine.attach_monitor(Box::new(BuildingMonitor::new()));
        engine.attach_monitor(Box::new(ConstructionMonitor::new()));
        engine.attach_monitor(Box::new(SyndromeMonitor::new()));
        engine.attach_monitor(Box::new(InvasionMonitor::new()));
        engine
    }

    /// Fully wired engine over an in-memory store with a captured console.
    pub fn build_test(run_id: &str) -> EventResult<(Self, ConsoleCapture)> {
        let store = EventStore::in_memory()?;
        store.migrate()?;
        store.insert_run(run_id, 0, "test")?;
        let (console, capture) = Console::captured();
        Ok((Self::build(run_id.to_string(), store, console), capture))
    }

    /// Attach a monitor. It adopts the current world as its baseline, so
    /// attaching mid-flight does not replay history.
    pub fn attach_monitor(&mut self, mut monitor: Box<dyn StateMonitor>) {
        monitor.prime(&self.world);
        self.monitors.push(monitor);
    }

    /// Advance one step: scan every monitor, log every derived event, then
    /// dispatch events and tick listeners. Returns the step's events.
    pub fn step(&mut self) -> EventResult<Vec<SimEvent>> {
        assert!(!self.clock.paused, "step() called on paused engine");

        let tick = self.clock.advance();
        let mut step_events: Vec<SimEvent> = Vec::new();

        for monitor in &mut self.monitors {
            let new_events = monitor.scan(tick, &self.world)?;

            // Persist each new event to the log.
            for event in &new_events {
                let entry = EventLogEntry {
                    id:         None,
                    run_id:     self.run_id.clone(),
                    tick,
                    monitor:    monitor.name().to_string(),
                    event_type: event.type_name().to_string(),
                    payload:    serde_json::to_string(event)?,
                };
                self.store.append_event(&entry)?;
            }

            step_events.extend(new_events);
        }

        for event in &step_events {
            self.registry.dispatch(&self.world, event, &mut self.console);
        }
        self.registry.dispatch_ticks(&self.world, tick, &mut self.console);

        log::debug!("tick={tick}: {} events derived", step_events.len());
        Ok(step_events)
    }

    /// Run n steps in a loop. Used by the runner and for fast-forward in
    /// tests.
    pub fn run_steps(&mut self, n: u64) -> EventResult<()> {
        self.clock.resume();
        for _ in 0..n {
            self.step()?;
        }
        self.clock.pause();
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────────

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Host simulation code mutates the world between steps through this.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EventRegistry {
        &mut self.registry
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Query this run's persisted events for one tick.
    /// Used by the determinism test and replay tooling.
    pub fn events_for_tick(&self, tick: Tick) -> EventResult<Vec<EventLogEntry>> {
        self.store.events_for_tick(&self.run_id, tick)
    }

    /// Downcast access to an attached monitor.
    /// For tests and tooling only.
    pub fn monitor<M: StateMonitor + 'static>(&self) -> Option<&M> {
        self.monitors
            .iter()
            .find_map(|m| m.as_any().downcast_ref::<M>())
    }
}
