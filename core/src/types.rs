//! Shared primitive types used across the entire host.

/// A simulation step. One tick = one pass of the host's main loop.
pub type Tick = u64;

/// The canonical run identifier.
pub type RunId = String;

/// The identity of a registering plugin, used to scope bulk unregistration.
pub type PluginId = String;

// Entity ids mirror the host simulation's id space: small, monotonically
// allocated signed integers.
pub type JobId = i32;
pub type UnitId = i32;
pub type ItemId = i32;
pub type BuildingId = i32;
pub type ConstructionId = i32;
pub type InvasionId = i32;

/// Index of a syndrome within a unit's active-syndrome list.
pub type SyndromeIndex = u32;
