//! The event taxonomy — everything the host can tell a listener about.
//!
//! RULE: Monitors communicate with plugins ONLY through these events.
//! A listener never reaches into a monitor's baseline state.

use crate::types::{
    BuildingId, ConstructionId, InvasionId, ItemId, JobId, RunId, SyndromeIndex, Tick, UnitId,
};
use serde::{Deserialize, Serialize};

/// Every event a monitor can derive from the live world.
/// Variants are added per event family — never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    JobInitiated {
        tick: Tick,
        job_id: JobId,
    },
    JobCompleted {
        tick: Tick,
        job_id: JobId,
    },
    UnitDied {
        tick: Tick,
        unit_id: UnitId,
    },
    ItemCreated {
        tick: Tick,
        item_id: ItemId,
    },
    BuildingChanged {
        tick: Tick,
        building_id: BuildingId,
        change: StateChange,
    },
    ConstructionChanged {
        tick: Tick,
        construction_id: ConstructionId,
        change: StateChange,
    },
    SyndromeStarted {
        tick: Tick,
        unit_id: UnitId,
        syndrome_index: SyndromeIndex,
    },
    InvasionStarted {
        tick: Tick,
        invasion_id: InvasionId,
    },
}

impl SimEvent {
    /// The subscription key this event dispatches under.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::JobInitiated { .. } => EventKind::JobInitiated,
            Self::JobCompleted { .. } => EventKind::JobCompleted,
            Self::UnitDied { .. } => EventKind::UnitDied,
            Self::ItemCreated { .. } => EventKind::ItemCreated,
            Self::BuildingChanged { .. } => EventKind::BuildingChanged,
            Self::ConstructionChanged { .. } => EventKind::ConstructionChanged,
            Self::SyndromeStarted { .. } => EventKind::SyndromeStarted,
            Self::InvasionStarted { .. } => EventKind::InvasionStarted,
        }
    }

    /// Stable string name, used for the event_type column in event_log.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// The tick the event was derived on.
    pub fn tick(&self) -> Tick {
        match self {
            Self::JobInitiated { tick, .. }
            | Self::JobCompleted { tick, .. }
            | Self::UnitDied { tick, .. }
            | Self::ItemCreated { tick, .. }
            | Self::BuildingChanged { tick, .. }
            | Self::ConstructionChanged { tick, .. }
            | Self::SyndromeStarted { tick, .. }
            | Self::InvasionStarted { tick, .. } => *tick,
        }
    }
}

/// A named category of simulation occurrence. Subscription key for the
/// registry; time ticks are a separate channel (see registry::register_tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    JobInitiated,
    JobCompleted,
    UnitDied,
    ItemCreated,
    BuildingChanged,
    ConstructionChanged,
    SyndromeStarted,
    InvasionStarted,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::JobInitiated,
        EventKind::JobCompleted,
        EventKind::UnitDied,
        EventKind::ItemCreated,
        EventKind::BuildingChanged,
        EventKind::ConstructionChanged,
        EventKind::SyndromeStarted,
        EventKind::InvasionStarted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::JobInitiated => "job_initiated",
            Self::JobCompleted => "job_completed",
            Self::UnitDied => "unit_died",
            Self::ItemCreated => "item_created",
            Self::BuildingChanged => "building_changed",
            Self::ConstructionChanged => "construction_changed",
            Self::SyndromeStarted => "syndrome_started",
            Self::InvasionStarted => "invasion_started",
        }
    }
}

/// Direction of a building/construction delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateChange {
    Created,
    Razed,
}

/// The event log entry as persisted to SQLite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id: Option<i64>,
    pub run_id: RunId,
    pub tick: Tick,
    pub monitor: String,
    pub event_type: String,
    pub payload: String, // JSON-serialized SimEvent
}
