//! Modeled delay constants for the interactive pacing.
//!
//! Values match the original interactive cadence; under a `NoDelay` pacer
//! they have no effect.

use std::time::Duration;

/// Gap between single-allocation phases (class-loading check, method area,
/// commit).
pub const ALLOCATION_PHASE_GAP: Duration = Duration::from_millis(800);

/// Gap before a batch allocation commits.
pub const BATCH_COMMIT_GAP: Duration = Duration::from_millis(600);

/// Gap before a stack push or pop commits.
pub const STACK_PHASE_GAP: Duration = Duration::from_millis(600);

/// Gap between a collection's announce and classify phases.
pub const COLLECTION_CLASSIFY_GAP: Duration = Duration::from_millis(1000);

/// Gap between a collection's classify and apply phases.
pub const COLLECTION_APPLY_GAP: Duration = Duration::from_millis(800);

/// Settling interval between the young-generation pressure warning and the
/// automatic minor collection it arms.
pub const AUTO_COLLECT_SETTLE: Duration = Duration::from_millis(1500);
