//! Read-only snapshots for presentation layers.

use serde::Serialize;
use sim_types::{ManagedObject, SimulationCounters, StackFrame, Subsystem};

/// Immutable view of the full simulation state after a transition.
///
/// Serializable so presentation layers (and the CLI's `--json` output) can
/// consume it without touching live state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Live heap objects, insertion order
    pub objects: Vec<ManagedObject>,
    /// Active call frames, bottom first
    pub frames: Vec<StackFrame>,
    /// Lifetime telemetry counters
    pub counters: SimulationCounters,
    /// Configured heap capacity
    pub max_heap_size: usize,
    /// Young generation limit
    pub young_limit: usize,
    /// Old generation limit
    pub old_limit: usize,
    /// Objects currently in the young generation
    pub young_count: usize,
    /// Objects currently in the old generation
    pub old_count: usize,
    /// True while a multi-phase transition is in flight
    pub busy: bool,
    /// Currently selected subsystem, if any
    pub selected: Option<Subsystem>,
}

impl Snapshot {
    /// Total number of live objects.
    pub fn total_count(&self) -> usize {
        self.objects.len()
    }
}
