//! Simulation coordinator for the managed-runtime memory model.
//!
//! This component owns the simulation state record and sequences every
//! multi-phase transition (allocation, batch allocation, method call and
//! return, collection) as time-ordered steps guarded by a single busy flag.
//!
//! # Overview
//!
//! - [`Simulator`] - the coordinator and state owner
//! - [`CallStack`] - ordered call frames with push/pop transitions
//! - [`Snapshot`] - read-only state view for presentation layers
//! - [`VisualSink`] / [`VisualEvent`] - subsystem activation/flash stream

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod call_stack;
pub mod simulator;
pub mod snapshot;
pub mod visual;

pub use call_stack::CallStack;
pub use simulator::Simulator;
pub use snapshot::Snapshot;
pub use visual::{NullSink, RecordingSink, VisualEvent, VisualSink};

// Collection modes are part of this crate's public operation surface.
pub use heap_engine::{CollectionKind, CollectionSummary};
