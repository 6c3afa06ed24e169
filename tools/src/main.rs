//! event-runner: headless driver for the Overseer introspection host.
//!
//! Usage:
//!   event-runner --seed 12345 --steps 365 --db run.db
//!   event-runner --seed 12345 --steps 100 --data-dir ./data

use anyhow::Result;
use overseer_core::{
    config::ScenarioConfig, console::Console, engine::EventEngine, scenario::Scenario,
    store::EventStore, watch,
};
use std::env;
use uuid::Uuid;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let steps = parse_arg(&args, "--steps", 100u64);
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str());

    println!("Overseer — event-runner");
    println!("  seed:  {seed}");
    println!("  steps: {steps}");
    println!("  db:    {db}");
    println!();

    let store = if db == ":memory:" {
        EventStore::in_memory()?
    } else {
        EventStore::open(db)?
    };
    store.migrate()?;

    let run_id = format!("run-{}", Uuid::new_v4());
    store.insert_run(&run_id, seed, env!("CARGO_PKG_VERSION"))?;

    let config = match data_dir {
        Some(dir) => {
            log::info!("loading scenario config from {dir}");
            ScenarioConfig::load(dir)?
        }
        None => ScenarioConfig::default_test(),
    };

    let mut engine = EventEngine::build(run_id.clone(), store, Console::stdout());
    watch::register_watchers(engine.registry_mut())?;

    let mut scenario = Scenario::new(config, seed);
    scenario.seed_world(engine.world_mut());

    for _ in 0..steps {
        scenario.advance(engine.world_mut());
        engine.run_steps(1)?;
    }

    print_summary(&engine, &run_id, steps)?;
    Ok(())
}

fn print_summary(engine: &EventEngine, run_id: &str, steps: u64) -> Result<()> {
    let total = engine.store().event_count(run_id)?;
    let by_type = engine.store().count_by_event_type(run_id)?;

    println!();
    println!("=== RUN SUMMARY ===");
    println!("  run_id:       {run_id}");
    println!("  steps run:    {steps}");
    println!("  final tick:   {}", engine.clock.current_tick);
    println!("  total events: {total}");
    for (event_type, count) in by_type {
        println!("  {event_type:<22} {count}");
    }

    let world = engine.world();
    println!();
    println!("=== WORLD ===");
    println!("  living units:  {}", world.living_units().count());
    println!("  active jobs:   {}", world.jobs.len());
    println!("  items:         {}", world.items().len());
    println!("  buildings:     {}", world.buildings.len());
    println!("  constructions: {}", world.constructions.len());
    println!("  invasions:     {}", world.invasion_count());
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
