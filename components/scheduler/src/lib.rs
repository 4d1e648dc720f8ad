//! Phase pacing and automatic-collection scheduling.
//!
//! Simulator transitions run in discrete phases with modeled delays between
//! them. This crate decouples what happens in each phase from how long the
//! simulator waits between phases:
//!
//! - [`Pacer`] - pluggable pause source ([`NoDelay`] for tests,
//!   [`WallClock`] for interactive pacing)
//! - [`AllocationPhase`] / [`CollectionState`] - explicit phase
//!   enumerations for the multi-phase transitions
//! - [`AutoCollectTrigger`] - debounced pending minor collection
//! - [`timing`] - the modeled delay constants

pub mod auto_gc;
pub mod pacer;
pub mod phase;
pub mod timing;

pub use auto_gc::AutoCollectTrigger;
pub use pacer::{NoDelay, Pacer, WallClock};
pub use phase::{AllocationPhase, CollectionState};
