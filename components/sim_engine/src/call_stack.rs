//! Call stack engine for method call and return transitions.

use sim_types::{SimError, SimResult, StackFrame};

/// Ordered sequence of active call frames; the last element is the top.
#[derive(Debug, Default, Clone)]
pub struct CallStack {
    frames: Vec<StackFrame>,
    next_frame_id: u64,
}

impl CallStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new frame with a fresh id and a generated label.
    ///
    /// Labels follow the depth at push time: the first frame is
    /// `method_1()`, the next `method_2()`, and so on.
    pub fn push(&mut self) -> &StackFrame {
        self.next_frame_id += 1;
        let label = format!("method_{}()", self.frames.len() + 1);
        self.frames.push(StackFrame::new(self.next_frame_id, label));
        self.frames.last().expect("frame was just pushed")
    }

    /// Pops the top frame, failing with [`SimError::EmptyStack`] when there
    /// is none.
    pub fn pop(&mut self) -> SimResult<StackFrame> {
        self.frames.pop().ok_or(SimError::EmptyStack)
    }

    /// Active frames, bottom first.
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Number of active frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True when no method is active.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
