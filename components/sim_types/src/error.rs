//! Simulator error taxonomy.
//!
//! Every error condition is local and non-fatal: operations either fully
//! commit their phases or fully no-op, and the condition is narrated to the
//! event log rather than halting the simulation.

use thiserror::Error;

/// Errors produced by simulator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Another multi-phase transition is in flight; the operation is a no-op
    /// and the caller may retry later.
    #[error("simulator busy: another transition is in flight")]
    Busy,

    /// Single allocation blocked because the heap is at capacity. No object
    /// was created.
    #[error("java heap space OOM: {used}/{max} objects live")]
    OutOfMemory {
        /// Live objects at the time of the attempt
        used: usize,
        /// Configured heap capacity
        max: usize,
    },

    /// Method return attempted with no frames on the stack.
    #[error("stack is empty, nothing to pop")]
    EmptyStack,
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
