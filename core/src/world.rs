//! The live simulation state the monitors walk.
//!
//! Deliberately minimal: ids, labels, positions, and the few flags the
//! event families key on. The host simulation (scenario driver, tests)
//! owns and mutates this state between steps; listeners only read it.

use crate::types::{
    BuildingId, ConstructionId, InvasionId, ItemId, JobId, SyndromeIndex, UnitId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl MapCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub kind: String,
    pub worker: Option<UnitId>,
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub id: UnitId,
    pub dead: bool,
    /// Indexes of active syndromes, in onset order.
    pub syndromes: Vec<SyndromeIndex>,
}

#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub kind: String,
    pub pos: MapCoord,
}

#[derive(Debug, Clone)]
pub struct Building {
    pub id: BuildingId,
    pub kind: String,
}

#[derive(Debug, Clone)]
pub struct Construction {
    pub id: ConstructionId,
    pub pos: MapCoord,
}

#[derive(Debug, Clone, Default)]
pub struct World {
    pub jobs: Vec<Job>,
    pub units: Vec<Unit>,
    // Kept id-sorted; item lookups binary-search this table.
    items: Vec<Item>,
    pub buildings: Vec<Building>,
    pub constructions: Vec<Construction>,
    invasion_count: InvasionId,
    next_job_id: JobId,
    next_unit_id: UnitId,
    next_item_id: ItemId,
    next_building_id: BuildingId,
    next_construction_id: ConstructionId,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Jobs ───────────────────────────────────────────────────

    pub fn start_job(&mut self, kind: impl Into<String>, worker: Option<UnitId>) -> JobId {
        let id = self.next_job_id;
        self.next_job_id += 1;
        self.jobs.push(Job {
            id,
            kind: kind.into(),
            worker,
        });
        id
    }

    /// Remove a job from the active list. Returns false if the id is gone.
    pub fn complete_job(&mut self, id: JobId) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|j| j.id != id);
        self.jobs.len() != before
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    // ── Units ──────────────────────────────────────────────────

    pub fn spawn_unit(&mut self) -> UnitId {
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        self.units.push(Unit {
            id,
            dead: false,
            syndromes: Vec::new(),
        });
        id
    }

    pub fn kill_unit(&mut self, id: UnitId) -> bool {
        match self.units.iter_mut().find(|u| u.id == id) {
            Some(unit) if !unit.dead => {
                unit.dead = true;
                true
            }
            _ => false,
        }
    }

    /// Add a syndrome to a living unit. Returns the syndrome index.
    pub fn infect_unit(&mut self, id: UnitId, syndrome: SyndromeIndex) -> Option<SyndromeIndex> {
        let unit = self.units.iter_mut().find(|u| u.id == id && !u.dead)?;
        if unit.syndromes.contains(&syndrome) {
            return None;
        }
        unit.syndromes.push(syndrome);
        Some(syndrome)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn living_units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| !u.dead)
    }

    // ── Items ──────────────────────────────────────────────────

    pub fn spawn_item(&mut self, kind: impl Into<String>, pos: MapCoord) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id += 1;
        // Ids are allocated monotonically, so pushing keeps the table sorted.
        self.items.push(Item {
            id,
            kind: kind.into(),
            pos,
        });
        id
    }

    /// Binary-search the item table. Fails for ids the host never allocated
    /// or has already reclaimed.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .map(|index| &self.items[index])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The next item id the host will allocate (high-water mark).
    pub fn next_item_id(&self) -> ItemId {
        self.next_item_id
    }

    // ── Buildings ──────────────────────────────────────────────

    pub fn add_building(&mut self, kind: impl Into<String>) -> BuildingId {
        let id = self.next_building_id;
        self.next_building_id += 1;
        self.buildings.push(Building {
            id,
            kind: kind.into(),
        });
        id
    }

    pub fn raze_building(&mut self, id: BuildingId) -> bool {
        let before = self.buildings.len();
        self.buildings.retain(|b| b.id != id);
        self.buildings.len() != before
    }

    // ── Constructions ──────────────────────────────────────────

    pub fn add_construction(&mut self, pos: MapCoord) -> ConstructionId {
        let id = self.next_construction_id;
        self.next_construction_id += 1;
        self.constructions.push(Construction { id, pos });
        id
    }

    pub fn remove_construction(&mut self, id: ConstructionId) -> bool {
        let before = self.constructions.len();
        self.constructions.retain(|c| c.id != id);
        self.constructions.len() != before
    }

    // ── Invasions ──────────────────────────────────────────────

    /// Start a new invasion. Returns its id (ids count up from 0).
    pub fn start_invasion(&mut self) -> InvasionId {
        let id = self.invasion_count;
        self.invasion_count += 1;
        id
    }

    /// Number of invasions launched so far.
    pub fn invasion_count(&self) -> InvasionId {
        self.invasion_count
    }
}
