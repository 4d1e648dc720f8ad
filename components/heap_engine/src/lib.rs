//! Heap Engine - allocation and generational collection
//!
//! This component provides:
//! - The authoritative collection of live objects ([`HeapState`])
//! - The allocation engine (single and batch, Eden-only)
//! - The collection engine (minor and full passes with probabilistic
//!   survival and capacity-gated promotion)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alloc;
pub mod gc;
pub mod heap;

pub use alloc::{BatchOutcome, MAX_BATCH_SIZE};
pub use gc::{
    Classification, CollectionKind, CollectionSummary, OLD_SURVIVAL_RATE, YOUNG_SURVIVAL_RATE,
};
pub use heap::HeapState;
