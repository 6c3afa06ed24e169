//! StateMonitor trait — the delta-detection contract.
//!
//! RULE: Every event family has exactly one monitor.
//! The engine calls scan() on each attached monitor in attachment order,
//! every step. Monitors keep a baseline of what they saw last scan and
//! emit one event per observed delta.

use crate::{error::EventResult, event::SimEvent, types::Tick, world::World};
use std::any::Any;

/// The contract every monitor must fulfill.
pub trait StateMonitor: Send {
    /// Unique stable name for this monitor (event_log's monitor column).
    fn name(&self) -> &'static str;

    /// Adopt the world's current state as the baseline WITHOUT emitting
    /// events. Called once when the monitor is attached, so attaching to a
    /// mid-flight world does not replay its history.
    fn prime(&mut self, world: &World);

    /// Compare the world against the baseline, emit one event per delta,
    /// and advance the baseline.
    fn scan(&mut self, tick: Tick, world: &World) -> EventResult<Vec<SimEvent>>;

    /// For downcasting in tests and tooling only.
    fn as_any(&self) -> &dyn Any;
}
