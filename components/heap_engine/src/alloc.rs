//! Allocation engine: single and batch allocation into Eden.
//!
//! Single allocation enforces the capacity limit as a precondition. Batch
//! allocation deliberately does not: it models bursty production outrunning
//! a checkpoint, so it always succeeds at the state level and reports an
//! overflow afterwards.

use sim_types::{HeapConfig, ManagedObject, SimError, SimResult, SimulationCounters};

use crate::heap::HeapState;

/// Largest batch size exposed at the configuration boundary.
pub const MAX_BATCH_SIZE: usize = 100;

/// Result of a committed batch allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Objects added (always the requested batch size)
    pub added: usize,
    /// True when the batch pushed the heap over capacity
    pub overflowed: bool,
}

/// Checks the single-allocation capacity precondition.
///
/// Fails with [`SimError::OutOfMemory`] when the heap is already at or over
/// capacity; no state is touched in that case.
pub fn check_capacity(heap: &HeapState, config: &HeapConfig) -> SimResult<()> {
    if heap.len() >= config.max_heap_size {
        return Err(SimError::OutOfMemory {
            used: heap.len(),
            max: config.max_heap_size,
        });
    }
    Ok(())
}

/// Commits a single allocation: one new object in Eden with the next id.
///
/// The caller is responsible for having run [`check_capacity`] before the
/// transition started; the commit itself never fails.
pub fn commit_one(heap: &mut HeapState, counters: &mut SimulationCounters) -> ManagedObject {
    let object = ManagedObject::new(counters.next_id());
    heap.push(object.clone());
    object
}

/// Commits a batch allocation: `batch_size` Eden objects with fresh ids,
/// appended as one contiguous group.
///
/// Capacity is not enforced; the outcome records whether the resulting total
/// exceeds the configured maximum.
pub fn commit_batch(
    heap: &mut HeapState,
    counters: &mut SimulationCounters,
    config: &HeapConfig,
    batch_size: usize,
) -> BatchOutcome {
    let batch: Vec<ManagedObject> = (0..batch_size)
        .map(|_| ManagedObject::new(counters.next_id()))
        .collect();
    heap.extend(batch);

    BatchOutcome {
        added: batch_size,
        overflowed: heap.len() > config.max_heap_size,
    }
}
