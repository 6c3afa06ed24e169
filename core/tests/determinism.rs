//! Two engines, same seed, same scenario. They must produce byte-identical
//! event logs. Any divergence means something drew from outside the seeded
//! stream.

use overseer_core::{
    config::ScenarioConfig, console::Console, engine::EventEngine, scenario::Scenario,
    store::EventStore,
};

const STEPS: u64 = 200;

fn run_engine(run_id: &str, seed: u64) -> EventEngine {
    let store = EventStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store.insert_run(run_id, seed, "0.1.0-test").expect("insert run");
    let (console, _capture) = Console::captured();
    let mut engine = EventEngine::build(run_id.to_string(), store, console);

    let mut scenario = Scenario::new(ScenarioConfig::default_test(), seed);
    scenario.seed_world(engine.world_mut());
    for _ in 0..STEPS {
        scenario.advance(engine.world_mut());
        engine.run_steps(1).expect("step");
    }
    engine
}

fn collect_event_log(engine: &EventEngine) -> Vec<String> {
    (0..=engine.clock.current_tick)
        .flat_map(|tick| {
            engine
                .events_for_tick(tick)
                .expect("read events")
                .into_iter()
                .map(|e| e.payload)
        })
        .collect()
}

#[test]
fn same_seed_produces_identical_event_logs() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    let engine_a = run_engine("det-test-a", SEED);
    let engine_b = run_engine("det-test-b", SEED);

    let log_a = collect_event_log(&engine_a);
    let log_b = collect_event_log(&engine_b);

    assert!(
        !log_a.is_empty(),
        "scenario produced no events — nothing was actually tested"
    );
    assert_eq!(
        log_a.len(),
        log_b.len(),
        "Event log lengths differ: {} vs {}",
        log_a.len(),
        log_b.len()
    );

    for (i, (a, b)) in log_a.iter().zip(log_b.iter()).enumerate() {
        assert_eq!(a, b, "Event log diverged at entry {i}:\n  A: {a}\n  B: {b}");
    }
}

#[test]
fn different_seeds_produce_different_logs() {
    let engine_a = run_engine("det-test-42", 42);
    let engine_b = run_engine("det-test-99", 99);

    let log_a = collect_event_log(&engine_a);
    let log_b = collect_event_log(&engine_b);

    assert!(
        log_a != log_b,
        "Different seeds produced identical logs — the seed is not being used"
    );
}
