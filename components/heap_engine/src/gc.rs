//! Collection engine: minor and full passes with probabilistic survival.
//!
//! A pass runs in two engine steps that the coordinator separates with
//! modeled delays: [`classify`] partitions the current heap into a new live
//! set plus reclamation and promotion tallies, and [`apply`] installs that
//! live set and updates the counters.
//!
//! Survival draws come from an injected RNG so passes are reproducible under
//! a seeded generator.

use rand::Rng;
use sim_types::{HeapConfig, ManagedObject, Region, SimulationCounters};

use crate::heap::HeapState;

/// Probability that a young object survives a pass.
pub const YOUNG_SURVIVAL_RATE: f64 = 0.5;

/// Probability that an old object survives a full pass. Minor passes never
/// touch the old generation.
pub const OLD_SURVIVAL_RATE: f64 = 0.7;

/// Which generations a collection pass covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Young generation only
    Minor,
    /// Young and old generations
    Full,
}

impl CollectionKind {
    /// Display label used in narration.
    pub fn label(self) -> &'static str {
        match self {
            CollectionKind::Minor => "Minor GC",
            CollectionKind::Full => "Full GC (Major)",
        }
    }
}

/// Tallies produced by one collection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Which pass produced this summary
    pub kind: CollectionKind,
    /// Objects removed from the heap
    pub reclaimed: usize,
    /// Young survivors promoted to the old generation
    pub promoted: usize,
    /// True when a survivor could not be promoted because the old
    /// generation was full
    pub promotion_failure: bool,
}

/// Result of the classify phase: the rebuilt live set plus its summary.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Objects that survive the pass, in their original insertion order
    pub live: Vec<ManagedObject>,
    /// Reclamation and promotion tallies
    pub summary: CollectionSummary,
}

/// Partitions the heap into a new live set.
///
/// Objects are processed in insertion order, which keeps the running
/// promotion gate deterministic for a fixed sequence of survival draws:
///
/// - Old objects are retained unchanged by a minor pass; under a full pass
///   each survives independently with [`OLD_SURVIVAL_RATE`].
/// - Young objects survive independently with [`YOUNG_SURVIVAL_RATE`]. A
///   survivor is promoted only while the count of objects already placed in
///   the old generation during this pass is below the old limit; otherwise
///   it stays in its prior young sub-region and the promotion-failure flag
///   is raised.
pub fn classify<R: Rng>(
    heap: &HeapState,
    config: &HeapConfig,
    kind: CollectionKind,
    rng: &mut R,
) -> Classification {
    let old_limit = config.old_limit();
    let mut live: Vec<ManagedObject> = Vec::with_capacity(heap.len());
    let mut old_in_live = 0usize;
    let mut reclaimed = 0usize;
    let mut promoted = 0usize;
    let mut promotion_failure = false;

    for object in heap.objects() {
        if object.region == Region::Old {
            match kind {
                CollectionKind::Minor => {
                    live.push(object.clone());
                    old_in_live += 1;
                }
                CollectionKind::Full => {
                    if rng.random::<f64>() < OLD_SURVIVAL_RATE {
                        live.push(object.clone());
                        old_in_live += 1;
                    } else {
                        reclaimed += 1;
                    }
                }
            }
            continue;
        }

        if rng.random::<f64>() < YOUNG_SURVIVAL_RATE {
            if old_in_live < old_limit {
                live.push(ManagedObject {
                    id: object.id,
                    region: Region::Old,
                });
                old_in_live += 1;
                promoted += 1;
            } else {
                // Promotion failure: neither reclaimed nor promoted.
                promotion_failure = true;
                live.push(object.clone());
            }
        } else {
            reclaimed += 1;
        }
    }

    Classification {
        live,
        summary: CollectionSummary {
            kind,
            reclaimed,
            promoted,
            promotion_failure,
        },
    }
}

/// Installs a classification: replaces the heap's live set and credits the
/// reclaimed count to the counters.
pub fn apply(
    heap: &mut HeapState,
    counters: &mut SimulationCounters,
    classification: Classification,
) -> CollectionSummary {
    let summary = classification.summary;
    heap.replace(classification.live);
    counters.record_reclaimed(summary.reclaimed as u64);
    summary
}
