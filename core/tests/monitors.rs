//! Delta-detection tests: each monitor reports its family exactly once,
//! primes without replaying history, and stays quiet on an unchanged world.

use overseer_core::{
    building_monitor::BuildingMonitor,
    console::Console,
    construction_monitor::ConstructionMonitor,
    engine::EventEngine,
    event::{SimEvent, StateChange},
    invasion_monitor::InvasionMonitor,
    item_monitor::ItemMonitor,
    job_monitor::JobMonitor,
    store::EventStore,
    syndrome_monitor::SyndromeMonitor,
    unit_monitor::UnitMonitor,
    world::MapCoord,
};

/// Decode the persisted payloads for one tick back into events.
fn events_at(engine: &EventEngine, tick: u64) -> Vec<SimEvent> {
    engine
        .events_for_tick(tick)
        .unwrap()
        .iter()
        .map(|entry| serde_json::from_str(&entry.payload).unwrap())
        .collect()
}

#[test]
fn job_start_and_completion_are_detected() {
    let (mut engine, _capture) = EventEngine::build_test("job-test").unwrap();

    let job_id = engine.world_mut().start_job("dig", None);
    engine.run_steps(1).unwrap();
    let events = events_at(&engine, 1);
    assert_eq!(events, vec![SimEvent::JobInitiated { tick: 1, job_id }]);
    assert!(events.iter().all(|e| e.tick() == 1));

    engine.world_mut().complete_job(job_id);
    engine.run_steps(1).unwrap();
    assert_eq!(
        events_at(&engine, 2),
        vec![SimEvent::JobCompleted { tick: 2, job_id }]
    );
}

#[test]
fn unit_death_fires_once() {
    let (mut engine, _capture) = EventEngine::build_test("death-test").unwrap();

    let unit_id = engine.world_mut().spawn_unit();
    engine.run_steps(1).unwrap();
    assert!(events_at(&engine, 1).is_empty(), "a living unit is no event");

    engine.world_mut().kill_unit(unit_id);
    engine.run_steps(1).unwrap();
    assert_eq!(
        events_at(&engine, 2),
        vec![SimEvent::UnitDied { tick: 2, unit_id }]
    );
    assert!(engine.world().unit(unit_id).unwrap().dead);

    // The corpse stays in the unit list; no repeat report.
    engine.run_steps(1).unwrap();
    assert!(events_at(&engine, 3).is_empty());
}

#[test]
fn item_creation_uses_the_id_high_water_mark() {
    let (mut engine, _capture) = EventEngine::build_test("item-test").unwrap();

    let first = engine
        .world_mut()
        .spawn_item("mug", MapCoord::new(1, 2, 3));
    let second = engine
        .world_mut()
        .spawn_item("barrel", MapCoord::new(4, 5, 6));
    engine.run_steps(1).unwrap();

    assert_eq!(
        events_at(&engine, 1),
        vec![
            SimEvent::ItemCreated {
                tick: 1,
                item_id: first
            },
            SimEvent::ItemCreated {
                tick: 1,
                item_id: second
            },
        ]
    );

    engine.run_steps(1).unwrap();
    assert!(events_at(&engine, 2).is_empty());
}

#[test]
fn building_lifecycle_reports_both_directions() {
    let (mut engine, _capture) = EventEngine::build_test("building-test").unwrap();

    let building_id = engine.world_mut().add_building("workshop");
    engine.run_steps(1).unwrap();
    assert_eq!(
        events_at(&engine, 1),
        vec![SimEvent::BuildingChanged {
            tick: 1,
            building_id,
            change: StateChange::Created
        }]
    );

    engine.world_mut().raze_building(building_id);
    engine.run_steps(1).unwrap();
    assert_eq!(
        events_at(&engine, 2),
        vec![SimEvent::BuildingChanged {
            tick: 2,
            building_id,
            change: StateChange::Razed
        }]
    );
}

#[test]
fn construction_lifecycle_reports_both_directions() {
    let (mut engine, _capture) = EventEngine::build_test("construction-test").unwrap();

    let construction_id = engine.world_mut().add_construction(MapCoord::new(0, 0, 0));
    engine.run_steps(1).unwrap();
    assert_eq!(
        events_at(&engine, 1),
        vec![SimEvent::ConstructionChanged {
            tick: 1,
            construction_id,
            change: StateChange::Created
        }]
    );

    engine.world_mut().remove_construction(construction_id);
    engine.run_steps(1).unwrap();
    assert_eq!(
        events_at(&engine, 2),
        vec![SimEvent::ConstructionChanged {
            tick: 2,
            construction_id,
            change: StateChange::Razed
        }]
    );
}

#[test]
fn syndrome_onset_fires_per_unit_and_index() {
    let (mut engine, _capture) = EventEngine::build_test("syndrome-test").unwrap();

    let unit_id = engine.world_mut().spawn_unit();
    engine.world_mut().infect_unit(unit_id, 3);
    engine.run_steps(1).unwrap();
    assert_eq!(
        events_at(&engine, 1),
        vec![SimEvent::SyndromeStarted {
            tick: 1,
            unit_id,
            syndrome_index: 3
        }]
    );

    // Re-infection with the same syndrome is not a new onset.
    engine.world_mut().infect_unit(unit_id, 3);
    engine.run_steps(1).unwrap();
    assert!(events_at(&engine, 2).is_empty());

    // A different syndrome on the same unit is.
    engine.world_mut().infect_unit(unit_id, 5);
    engine.run_steps(1).unwrap();
    assert_eq!(
        events_at(&engine, 3),
        vec![SimEvent::SyndromeStarted {
            tick: 3,
            unit_id,
            syndrome_index: 5
        }]
    );
}

#[test]
fn each_new_invasion_id_is_reported() {
    let (mut engine, _capture) = EventEngine::build_test("invasion-test").unwrap();

    engine.world_mut().start_invasion();
    engine.world_mut().start_invasion();
    engine.run_steps(1).unwrap();

    assert_eq!(
        events_at(&engine, 1),
        vec![
            SimEvent::InvasionStarted {
                tick: 1,
                invasion_id: 0
            },
            SimEvent::InvasionStarted {
                tick: 1,
                invasion_id: 1
            },
        ]
    );
}

#[test]
fn priming_adopts_existing_state_without_replaying_it() {
    let store = EventStore::in_memory().unwrap();
    store.migrate().unwrap();
    store.insert_run("prime-test", 0, "test").unwrap();
    let (console, _capture) = Console::captured();
    let mut engine = EventEngine::new("prime-test".into(), store, console);

    // A world with history, attached to after the fact.
    engine.world_mut().start_job("haul", None);
    engine.world_mut().spawn_item("bolt", MapCoord::new(9, 9, 9));
    engine.world_mut().add_building("well");
    engine.world_mut().start_invasion();
    engine.attach_monitor(Box::new(JobMonitor::new()));
    engine.attach_monitor(Box::new(UnitMonitor::new()));
    engine.attach_monitor(Box::new(ItemMonitor::new()));
    engine.attach_monitor(Box::new(BuildingMonitor::new()));
    engine.attach_monitor(Box::new(ConstructionMonitor::new()));
    engine.attach_monitor(Box::new(SyndromeMonitor::new()));
    engine.attach_monitor(Box::new(InvasionMonitor::new()));

    engine.run_steps(1).unwrap();
    assert!(
        events_at(&engine, 1).is_empty(),
        "pre-attachment history must not replay"
    );

    // But new deltas after priming are seen.
    engine.world_mut().start_job("brew", None);
    engine.run_steps(1).unwrap();
    assert_eq!(events_at(&engine, 2).len(), 1);
}

#[test]
fn monitors_are_reachable_by_downcast() {
    let (engine, _capture) = EventEngine::build_test("downcast-test").unwrap();
    assert!(engine.monitor::<JobMonitor>().is_some());
}
