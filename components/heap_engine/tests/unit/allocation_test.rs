//! Unit tests for the allocation engine

use heap_engine::{alloc, HeapState};
use sim_types::{HeapConfig, Region, SimError, SimulationCounters};

#[test]
fn single_allocation_blocked_at_capacity() {
    let config = HeapConfig::new(60);
    let mut heap = HeapState::new();
    let mut counters = SimulationCounters::new();

    for _ in 0..60 {
        alloc::check_capacity(&heap, &config).unwrap();
        alloc::commit_one(&mut heap, &mut counters);
    }

    let err = alloc::check_capacity(&heap, &config).unwrap_err();
    assert_eq!(err, SimError::OutOfMemory { used: 60, max: 60 });
    assert_eq!(heap.len(), 60);
}

#[test]
fn capacity_check_fails_when_over_capacity() {
    let config = HeapConfig::new(60);
    let mut heap = HeapState::new();
    let mut counters = SimulationCounters::new();

    alloc::commit_batch(&mut heap, &mut counters, &config, 100);
    assert!(alloc::check_capacity(&heap, &config).is_err());
}

#[test]
fn batch_of_100_on_empty_60_heap_overflows() {
    let config = HeapConfig::new(60);
    let mut heap = HeapState::new();
    let mut counters = SimulationCounters::new();

    let outcome = alloc::commit_batch(&mut heap, &mut counters, &config, 100);
    assert_eq!(outcome.added, 100);
    assert!(outcome.overflowed);
    assert_eq!(heap.len(), 100);
    assert!(heap.objects().iter().all(|o| o.region == Region::Eden));
}

#[test]
fn ids_unique_and_increasing_across_batches() {
    let config = HeapConfig::new(500);
    let mut heap = HeapState::new();
    let mut counters = SimulationCounters::new();

    alloc::commit_batch(&mut heap, &mut counters, &config, 50);
    alloc::commit_one(&mut heap, &mut counters);
    alloc::commit_batch(&mut heap, &mut counters, &config, 50);

    let ids: Vec<_> = heap.objects().iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), 101);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(counters.total_allocated, 101);
}
