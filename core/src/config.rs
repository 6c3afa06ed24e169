//! Scenario configuration — per-step rates for the deterministic world
//! driver. Loaded from the data/ directory; tests use default_test().

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Units present before the first step.
    pub initial_units: usize,
    /// Half-extent of the square map used for random positions.
    pub map_extent: i32,
    /// Label pools for spawned entities.
    pub job_kinds: Vec<String>,
    pub item_kinds: Vec<String>,
    pub building_kinds: Vec<String>,
    /// Number of distinct syndromes the scenario can inflict.
    pub syndrome_pool: u32,

    // Per-step event chances.
    pub unit_arrival_chance: f64,
    pub unit_death_chance: f64,
    pub job_start_chance: f64,
    pub job_complete_chance: f64,
    pub item_spawn_chance: f64,
    pub building_create_chance: f64,
    pub building_raze_chance: f64,
    pub construction_create_chance: f64,
    pub construction_remove_chance: f64,
    pub syndrome_chance: f64,
    pub invasion_chance: f64,
}

impl ScenarioConfig {
    /// Load from the data/ directory.
    /// In tests, use ScenarioConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/scenario.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ScenarioConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            initial_units: 7,
            map_extent: 48,
            job_kinds: vec![
                "dig".into(),
                "haul".into(),
                "brew".into(),
                "smelt".into(),
            ],
            item_kinds: vec!["mug".into(), "barrel".into(), "bolt".into()],
            building_kinds: vec!["workshop".into(), "well".into(), "bridge".into()],
            syndrome_pool: 8,
            unit_arrival_chance: 0.10,
            unit_death_chance: 0.05,
            job_start_chance: 0.60,
            job_complete_chance: 0.50,
            item_spawn_chance: 0.40,
            building_create_chance: 0.15,
            building_raze_chance: 0.08,
            construction_create_chance: 0.20,
            construction_remove_chance: 0.10,
            syndrome_chance: 0.06,
            invasion_chance: 0.02,
        }
    }
}
