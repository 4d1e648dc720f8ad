//! Unit tests for CallStack

use sim_engine::CallStack;
use sim_types::SimError;

#[test]
fn empty_stack_reports_empty() {
    let stack = CallStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.depth(), 0);
}

#[test]
fn push_appends_to_the_top() {
    let mut stack = CallStack::new();
    stack.push();
    stack.push();
    let labels: Vec<_> = stack.frames().iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, ["method_1()", "method_2()"]);
}

#[test]
fn pop_removes_the_top_frame() {
    let mut stack = CallStack::new();
    stack.push();
    stack.push();
    let popped = stack.pop().unwrap();
    assert_eq!(popped.label, "method_2()");
    assert_eq!(stack.depth(), 1);
}

#[test]
fn pop_on_empty_is_an_error() {
    let mut stack = CallStack::new();
    assert_eq!(stack.pop(), Err(SimError::EmptyStack));
}

#[test]
fn depth_drives_labels_not_ids() {
    let mut stack = CallStack::new();
    stack.push();
    stack.pop().unwrap();
    let frame = stack.push().clone();
    // The label restarts with the depth, the id does not repeat.
    assert_eq!(frame.label, "method_1()");
    assert_eq!(frame.id, 2);
}
