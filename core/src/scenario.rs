//! Deterministic world driver.
//!
//! Stands in for the real simulation: mutates the world a little each step
//! so the monitors have deltas to find. Every mutation draws from the
//! seeded stream in a fixed order, so a given (config, seed) pair always
//! produces the same world trajectory — and therefore the same event log.

use crate::{
    config::ScenarioConfig,
    rng::ScenarioRng,
    types::UnitId,
    world::{MapCoord, World},
};

pub struct Scenario {
    cfg: ScenarioConfig,
    rng: ScenarioRng,
}

impl Scenario {
    pub fn new(cfg: ScenarioConfig, seed: u64) -> Self {
        Self {
            cfg,
            rng: ScenarioRng::new(seed),
        }
    }

    /// Populate the starting world. Call before the engine's first step.
    pub fn seed_world(&mut self, world: &mut World) {
        for _ in 0..self.cfg.initial_units {
            world.spawn_unit();
        }
    }

    /// Apply one step's worth of world mutation. Draw order is fixed.
    pub fn advance(&mut self, world: &mut World) {
        if self.rng.chance(self.cfg.unit_arrival_chance) {
            world.spawn_unit();
        }

        if self.rng.chance(self.cfg.job_start_chance) {
            let kind = Self::pick(&mut self.rng, &self.cfg.job_kinds);
            let worker = Self::pick_living_unit(&mut self.rng, world);
            world.start_job(kind, worker);
        }

        if self.rng.chance(self.cfg.job_complete_chance) {
            // Oldest job finishes first.
            if let Some(id) = world.jobs.first().map(|j| j.id) {
                world.complete_job(id);
            }
        }

        if self.rng.chance(self.cfg.item_spawn_chance) {
            let kind = Self::pick(&mut self.rng, &self.cfg.item_kinds);
            let pos = self.random_pos();
            world.spawn_item(kind, pos);
        }

        if self.rng.chance(self.cfg.unit_death_chance) {
            if let Some(id) = Self::pick_living_unit(&mut self.rng, world) {
                world.kill_unit(id);
            }
        }

        if self.rng.chance(self.cfg.building_create_chance) {
            let kind = Self::pick(&mut self.rng, &self.cfg.building_kinds);
            world.add_building(kind);
        }

        if self.rng.chance(self.cfg.building_raze_chance) {
            if let Some(id) = world.buildings.first().map(|b| b.id) {
                world.raze_building(id);
            }
        }

        if self.rng.chance(self.cfg.construction_create_chance) {
            let pos = self.random_pos();
            world.add_construction(pos);
        }

        if self.rng.chance(self.cfg.construction_remove_chance) {
            if let Some(id) = world.constructions.first().map(|c| c.id) {
                world.remove_construction(id);
            }
        }

        if self.rng.chance(self.cfg.syndrome_chance) {
            let syndrome = self.rng.next_u64_below(u64::from(self.cfg.syndrome_pool)) as u32;
            if let Some(id) = Self::pick_living_unit(&mut self.rng, world) {
                world.infect_unit(id, syndrome);
            }
        }

        if self.rng.chance(self.cfg.invasion_chance) {
            world.start_invasion();
        }
    }

    fn pick(rng: &mut ScenarioRng, pool: &[String]) -> String {
        let index = rng.next_u64_below(pool.len() as u64) as usize;
        pool[index].clone()
    }

    fn pick_living_unit(rng: &mut ScenarioRng, world: &World) -> Option<UnitId> {
        let living: Vec<UnitId> = world.living_units().map(|u| u.id).collect();
        if living.is_empty() {
            return None;
        }
        let index = rng.next_u64_below(living.len() as u64) as usize;
        Some(living[index])
    }

    fn random_coord(&mut self) -> i32 {
        let span = self.cfg.map_extent as u64 * 2 + 1;
        self.rng.next_u64_below(span) as i32 - self.cfg.map_extent
    }

    fn random_pos(&mut self) -> MapCoord {
        let x = self.random_coord();
        let y = self.random_coord();
        let z = self.random_coord();
        MapCoord::new(x, y, z)
    }
}
