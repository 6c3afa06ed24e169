//! The listener registry — event subscriptions and dispatch order.
//!
//! RULE: Listeners for one event kind run in ascending priority order
//! (lower value = earlier), ties broken by registration order.
//! A failure inside one listener is contained: it is logged and the
//! remaining listeners — and all later events — still fire.

use crate::{
    console::Console,
    error::{EventError, EventResult},
    event::{EventKind, SimEvent},
    types::{PluginId, Tick},
    world::World,
};
use std::collections::HashMap;

/// Callback invoked for a matching event. Receives the diagnostic sink, a
/// read-only view of the live world for payload resolution, and the event.
/// Implementations must not retain either reference beyond the call.
pub type EventHandler = Box<dyn FnMut(&mut Console, &World, &SimEvent) -> EventResult<()> + Send>;

/// Callback invoked on ticks divisible by its registered interval.
pub type TickHandler = Box<dyn FnMut(&mut Console, &World, Tick) -> EventResult<()> + Send>;

struct Listener {
    owner: PluginId,
    priority: i32,
    seq: u64,
    handler: EventHandler,
}

struct TickListener {
    owner: PluginId,
    interval: Tick,
    seq: u64,
    handler: TickHandler,
}

#[derive(Default)]
pub struct EventRegistry {
    listeners: HashMap<EventKind, Vec<Listener>>,
    tick_listeners: Vec<TickListener>,
    next_seq: u64,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to `kind`. Listeners for the same kind are kept
    /// sorted by (priority, registration order).
    pub fn register_listener(
        &mut self,
        kind: EventKind,
        handler: EventHandler,
        priority: i32,
        owner: impl Into<PluginId>,
    ) {
        let owner = owner.into();
        let seq = self.bump_seq();
        log::debug!(
            "registering listener: kind={} priority={priority} owner={owner}",
            kind.name()
        );
        let chain = self.listeners.entry(kind).or_default();
        chain.push(Listener {
            owner,
            priority,
            seq,
            handler,
        });
        chain.sort_by_key(|l| (l.priority, l.seq));
    }

    /// Subscribe `handler` to fire once every `interval` steps. The same
    /// owner may register any number of independent intervals.
    pub fn register_tick(
        &mut self,
        handler: TickHandler,
        interval: Tick,
        owner: impl Into<PluginId>,
    ) -> EventResult<()> {
        if interval == 0 {
            return Err(EventError::ZeroInterval);
        }
        let owner = owner.into();
        let seq = self.bump_seq();
        log::debug!("registering tick listener: interval={interval} owner={owner}");
        self.tick_listeners.push(TickListener {
            owner,
            interval,
            seq,
            handler,
        });
        self.tick_listeners.sort_by_key(|l| l.seq);
        Ok(())
    }

    /// Remove every listener owned by `owner`, event and tick alike.
    /// Returns the number removed; safe to call with nothing registered.
    pub fn unregister_all(&mut self, owner: &str) -> usize {
        let mut removed = 0;
        for chain in self.listeners.values_mut() {
            let before = chain.len();
            chain.retain(|l| l.owner != owner);
            removed += before - chain.len();
        }
        let before = self.tick_listeners.len();
        self.tick_listeners.retain(|l| l.owner != owner);
        removed += before - self.tick_listeners.len();
        if removed > 0 {
            log::debug!("unregistered {removed} listeners owned by {owner}");
        }
        removed
    }

    /// Invoke every listener subscribed to `event`'s kind, in order.
    /// Returns the number of listeners that completed cleanly; failures are
    /// logged and never stop the chain.
    pub fn dispatch(&mut self, world: &World, event: &SimEvent, out: &mut Console) -> usize {
        let Some(chain) = self.listeners.get_mut(&event.kind()) else {
            return 0;
        };
        let mut clean = 0;
        for listener in chain.iter_mut() {
            match (listener.handler)(out, world, event) {
                Ok(()) => clean += 1,
                Err(e) => {
                    log::warn!(
                        "listener failed: kind={} owner={} priority={}: {e}",
                        event.type_name(),
                        listener.owner,
                        listener.priority
                    );
                }
            }
        }
        clean
    }

    /// Fire every tick listener whose interval divides `tick`, in
    /// registration order. Same containment rule as dispatch().
    pub fn dispatch_ticks(&mut self, world: &World, tick: Tick, out: &mut Console) -> usize {
        let mut clean = 0;
        for listener in self.tick_listeners.iter_mut() {
            if tick % listener.interval != 0 {
                continue;
            }
            match (listener.handler)(out, world, tick) {
                Ok(()) => clean += 1,
                Err(e) => {
                    log::warn!(
                        "tick listener failed: interval={} owner={}: {e}",
                        listener.interval,
                        listener.owner
                    );
                }
            }
        }
        clean
    }

    /// Total registered listeners across both channels.
    pub fn listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum::<usize>() + self.tick_listeners.len()
    }

    /// Listeners registered for one event kind.
    pub fn listeners_for(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
