//! The authoritative set of live heap objects.

use sim_types::{ManagedObject, Region};

/// All live objects, in insertion order.
///
/// Insertion order is stable and significant: the collection engine walks
/// objects in this order, which makes the running promotion-capacity gate
/// deterministic for a fixed sequence of survival draws.
///
/// The target invariant is `len() <= max_heap_size`, but batch allocation may
/// transiently violate it so the simulator can demonstrate an out-of-memory
/// condition before the next check fires.
#[derive(Debug, Default, Clone)]
pub struct HeapState {
    objects: Vec<ManagedObject>,
}

impl HeapState {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one object.
    pub fn push(&mut self, object: ManagedObject) {
        self.objects.push(object);
    }

    /// Appends a contiguous group of objects.
    pub fn extend(&mut self, objects: impl IntoIterator<Item = ManagedObject>) {
        self.objects.extend(objects);
    }

    /// Replaces the whole live set. Used by the collection apply phase.
    pub fn replace(&mut self, live: Vec<ManagedObject>) {
        self.objects = live;
    }

    /// All live objects, in insertion order.
    pub fn objects(&self) -> &[ManagedObject] {
        &self.objects
    }

    /// Total number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when no objects are live.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects in Eden and the survivor spaces.
    pub fn young_count(&self) -> usize {
        self.objects.iter().filter(|o| o.region.is_young()).count()
    }

    /// Number of objects in the old generation.
    pub fn old_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| o.region == Region::Old)
            .count()
    }

    /// Number of objects in one specific region.
    pub fn count_in(&self, region: Region) -> usize {
        self.objects.iter().filter(|o| o.region == region).count()
    }
}
