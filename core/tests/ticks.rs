//! Tick-listener interval semantics.

use overseer_core::{
    console::Console,
    engine::EventEngine,
    error::EventError,
    registry::{EventRegistry, TickHandler},
    world::World,
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

fn counter(count: &Arc<AtomicU64>) -> TickHandler {
    let count = Arc::clone(count);
    Box::new(move |_out, _world, _tick| {
        count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
}

#[test]
fn interval_listener_fires_once_every_k_steps() {
    let count = Arc::new(AtomicU64::new(0));
    let mut registry = EventRegistry::new();
    registry.register_tick(counter(&count), 3, "plugin").unwrap();

    let world = World::new();
    let (mut console, _capture) = Console::captured();
    for tick in 1..=12 {
        registry.dispatch_ticks(&world, tick, &mut console);
    }

    // Ticks 3, 6, 9, 12.
    assert_eq!(count.load(Ordering::SeqCst), 4);
}

#[test]
fn one_owner_may_register_many_intervals() {
    let count = Arc::new(AtomicU64::new(0));
    let mut registry = EventRegistry::new();
    for interval in [1, 2, 4, 8] {
        registry
            .register_tick(counter(&count), interval, "plugin")
            .unwrap();
    }

    let world = World::new();
    let (mut console, _capture) = Console::captured();
    for tick in 1..=8 {
        registry.dispatch_ticks(&world, tick, &mut console);
    }

    // 8 firings at interval 1, 4 at 2, 2 at 4, 1 at 8.
    assert_eq!(count.load(Ordering::SeqCst), 15);

    // All four registrations belong to the same owner.
    assert_eq!(registry.unregister_all("plugin"), 4);
}

#[test]
fn zero_interval_is_rejected() {
    let mut registry = EventRegistry::new();
    let result = registry.register_tick(Box::new(|_, _, _| Ok(())), 0, "plugin");
    assert!(matches!(result, Err(EventError::ZeroInterval)));
    assert_eq!(registry.listener_count(), 0);
}

#[test]
fn engine_fires_tick_listeners_every_step() {
    let (mut engine, _capture) = EventEngine::build_test("tick-engine-test").unwrap();
    let count = Arc::new(AtomicU64::new(0));
    engine
        .registry_mut()
        .register_tick(counter(&count), 2, "plugin")
        .unwrap();

    engine.run_steps(5).unwrap();

    // Ticks 2 and 4 of the five steps.
    assert_eq!(count.load(Ordering::SeqCst), 2);
}
