//! Process-wide simulation telemetry counters.

use serde::Serialize;

/// Lifetime allocation and reclamation tallies.
///
/// `total_allocated` never decreases and doubles as the id source: the next
/// object id is always `total_allocated + 1`, so ids stay strictly
/// increasing and unique across single and batch allocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimulationCounters {
    /// Objects ever allocated
    pub total_allocated: u64,
    /// Objects ever reclaimed by collection passes
    pub total_collected: u64,
}

impl SimulationCounters {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the next allocation id.
    pub fn next_id(&mut self) -> u64 {
        self.total_allocated += 1;
        self.total_allocated
    }

    /// Records objects reclaimed by a collection pass.
    pub fn record_reclaimed(&mut self, count: u64) {
        self.total_collected += count;
    }
}
