//! Call frames for the simulated VM stack.

use serde::Serialize;

/// A frame on the simulated call stack.
///
/// Created by a method-call transition and destroyed by the matching
/// method-return transition. The last frame in the stack sequence is the top
/// frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackFrame {
    /// Unique frame id
    pub id: u64,
    /// Generated display label, e.g. `method_3()`
    pub label: String,
}

impl StackFrame {
    /// Creates a new frame with the given id and label.
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
