//! The demonstration watcher plugin: one diagnostic handler per event
//! kind, printing a single line to the console when its event fires.
//!
//! Registration priorities and tick intervals are part of the plugin's
//! contract with downstream tooling — change them and the interleaving of
//! its output changes.

use crate::{
    console::Console,
    error::{EventError, EventResult},
    event::{EventKind, SimEvent, StateChange},
    registry::EventRegistry,
    world::World,
};

/// Owner identity for every listener this plugin registers.
pub const PLUGIN_NAME: &str = "watcher";

/// Register the full set of watchers. Re-registration is idempotent: any
/// previous registrations by this plugin are dropped first.
pub fn register_watchers(registry: &mut EventRegistry) -> EventResult<()> {
    registry.unregister_all(PLUGIN_NAME);

    registry.register_listener(
        EventKind::JobInitiated,
        Box::new(job_initiated),
        10,
        PLUGIN_NAME,
    );
    registry.register_listener(
        EventKind::JobCompleted,
        Box::new(job_completed),
        5,
        PLUGIN_NAME,
    );
    for interval in [1, 2, 4, 8] {
        registry.register_tick(Box::new(time_passed), interval, PLUGIN_NAME)?;
    }
    registry.register_listener(EventKind::UnitDied, Box::new(unit_died), 500, PLUGIN_NAME);
    registry.register_listener(
        EventKind::ItemCreated,
        Box::new(item_created),
        1000,
        PLUGIN_NAME,
    );
    registry.register_listener(
        EventKind::BuildingChanged,
        Box::new(building_changed),
        500,
        PLUGIN_NAME,
    );
    registry.register_listener(
        EventKind::ConstructionChanged,
        Box::new(construction_changed),
        100,
        PLUGIN_NAME,
    );
    registry.register_listener(
        EventKind::SyndromeStarted,
        Box::new(syndrome_started),
        1,
        PLUGIN_NAME,
    );
    registry.register_listener(
        EventKind::InvasionStarted,
        Box::new(invasion_started),
        1,
        PLUGIN_NAME,
    );
    Ok(())
}

fn job_initiated(out: &mut Console, world: &World, event: &SimEvent) -> EventResult<()> {
    if let SimEvent::JobInitiated { job_id, .. } = event {
        match world.job(*job_id) {
            Some(job) => out.print(&format!("job {job_id} initiated: {}", job.kind))?,
            None => out.print(&format!("job {job_id} initiated"))?,
        }
    }
    Ok(())
}

fn job_completed(out: &mut Console, _world: &World, event: &SimEvent) -> EventResult<()> {
    if let SimEvent::JobCompleted { job_id, .. } = event {
        // The job is already gone from the active list; only the id remains.
        out.print(&format!("job {job_id} completed"))?;
    }
    Ok(())
}

fn time_passed(out: &mut Console, _world: &World, tick: u64) -> EventResult<()> {
    out.print(&format!("step {tick} passed"))?;
    Ok(())
}

fn unit_died(out: &mut Console, _world: &World, event: &SimEvent) -> EventResult<()> {
    if let SimEvent::UnitDied { unit_id, .. } = event {
        out.print(&format!("unit {unit_id} died"))?;
    }
    Ok(())
}

fn item_created(out: &mut Console, world: &World, event: &SimEvent) -> EventResult<()> {
    let SimEvent::ItemCreated { item_id, .. } = event else {
        return Ok(());
    };
    // A payload that cannot be resolved ends this handler's processing of
    // the event; the registry contains the error.
    let Some(item) = world.item(*item_id) else {
        out.print(&format!("item {item_id}: lookup failed"))?;
        return Err(EventError::UnknownItem { id: *item_id });
    };
    out.print(&format!(
        "item {} ({}) created at ({}, {}, {})",
        item.id, item.kind, item.pos.x, item.pos.y, item.pos.z
    ))?;
    Ok(())
}

fn building_changed(out: &mut Console, _world: &World, event: &SimEvent) -> EventResult<()> {
    if let SimEvent::BuildingChanged {
        building_id,
        change,
        ..
    } = event
    {
        let verb = match change {
            StateChange::Created => "created",
            StateChange::Razed => "razed",
        };
        out.print(&format!("building {building_id} {verb}"))?;
    }
    Ok(())
}

fn construction_changed(out: &mut Console, _world: &World, event: &SimEvent) -> EventResult<()> {
    if let SimEvent::ConstructionChanged {
        construction_id,
        change,
        ..
    } = event
    {
        let verb = match change {
            StateChange::Created => "created",
            StateChange::Razed => "razed",
        };
        out.print(&format!("construction {construction_id} {verb}"))?;
    }
    Ok(())
}

fn syndrome_started(out: &mut Console, _world: &World, event: &SimEvent) -> EventResult<()> {
    if let SimEvent::SyndromeStarted {
        unit_id,
        syndrome_index,
        ..
    } = event
    {
        out.print(&format!("unit {unit_id} contracted syndrome {syndrome_index}"))?;
    }
    Ok(())
}

fn invasion_started(out: &mut Console, _world: &World, event: &SimEvent) -> EventResult<()> {
    if let SimEvent::InvasionStarted { invasion_id, .. } = event {
        out.print(&format!("invasion {invasion_id} underway"))?;
    }
    Ok(())
}
