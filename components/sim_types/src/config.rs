//! Heap sizing configuration and the capacity model.

use serde::Serialize;

/// Smallest heap size exposed at the configuration boundary.
pub const MIN_HEAP_SIZE: usize = 60;
/// Largest heap size exposed at the configuration boundary.
pub const MAX_HEAP_SIZE: usize = 500;
/// Step the boundary quantizes heap sizes to.
pub const HEAP_SIZE_STEP: usize = 10;

/// Heap configuration with derived generation limits.
///
/// The capacity model is a pure function over the total heap size: the young
/// generation gets a third of the heap (floor division) and the old
/// generation gets the rest, so the two limits always sum to the total.
///
/// The interactive boundary restricts sizes to 60..=500 in steps of 10, but
/// the model itself is total over any size of at least 3.
///
/// # Examples
///
/// ```
/// use sim_types::HeapConfig;
///
/// let config = HeapConfig::new(60);
/// assert_eq!(config.young_limit(), 20);
/// assert_eq!(config.old_limit(), 40);
/// assert_eq!(config.young_limit() + config.old_limit(), config.max_heap_size);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeapConfig {
    /// Maximum number of live objects the heap targets
    pub max_heap_size: usize,
}

impl HeapConfig {
    /// Creates a configuration for the given total heap size.
    pub fn new(max_heap_size: usize) -> Self {
        Self { max_heap_size }
    }

    /// Young generation limit: a third of the heap, rounded down.
    pub fn young_limit(&self) -> usize {
        self.max_heap_size / 3
    }

    /// Old generation limit: whatever the young generation does not get.
    pub fn old_limit(&self) -> usize {
        self.max_heap_size - self.young_limit()
    }

    /// Quantizes a requested size to the boundary range and step.
    ///
    /// Values are clamped to 60..=500 and rounded down to a multiple of 10.
    pub fn quantize(requested: usize) -> usize {
        let clamped = requested.clamp(MIN_HEAP_SIZE, MAX_HEAP_SIZE);
        clamped - clamped % HEAP_SIZE_STEP
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(MIN_HEAP_SIZE)
    }
}
