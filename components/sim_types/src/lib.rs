//! Core types for the JVM memory-model simulator.
//!
//! This crate provides the foundational types shared by every simulator
//! component, including heap objects, call frames, the subsystem catalog,
//! the event log, and the heap capacity model.
//!
//! # Overview
//!
//! - [`ManagedObject`] / [`Region`] - heap objects tagged with their generation
//! - [`StackFrame`] - a frame on the simulated call stack
//! - [`HeapConfig`] - heap sizing and derived generation limits
//! - [`Subsystem`] - fixed enumeration of runtime subsystems
//! - [`EventLog`] / [`LogEntry`] - bounded, most-recent-first narration feed
//! - [`SimError`] - error taxonomy for simulator operations
//!
//! # Examples
//!
//! ```
//! use sim_types::{HeapConfig, ManagedObject, Region};
//!
//! let config = HeapConfig::new(60);
//! assert_eq!(config.young_limit(), 20);
//! assert_eq!(config.old_limit(), 40);
//!
//! let obj = ManagedObject::new(1);
//! assert_eq!(obj.region, Region::Eden);
//! assert!(obj.region.is_young());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod counters;
mod error;
mod frame;
mod log;
mod object;
mod subsystem;

pub use config::{HeapConfig, HEAP_SIZE_STEP, MAX_HEAP_SIZE, MIN_HEAP_SIZE};
pub use counters::SimulationCounters;
pub use error::{SimError, SimResult};
pub use frame::StackFrame;
pub use log::{EventLog, LogEntry, Severity, LOG_CAPACITY};
pub use object::{ManagedObject, Region};
pub use subsystem::{Subsystem, SubsystemInfo};
