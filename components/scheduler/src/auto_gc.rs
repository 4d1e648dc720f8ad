//! Debounced trigger for the automatic minor collection.

/// Pending automatic minor collection.
///
/// The trigger is armed when young-generation pressure is detected and fires
/// after a settling interval. It is debounced rather than queued: any new
/// transition starting before it fires disarms it, and arming while already
/// armed is a no-op.
///
/// # Examples
///
/// ```
/// use scheduler::AutoCollectTrigger;
///
/// let mut trigger = AutoCollectTrigger::new();
/// assert!(trigger.arm());
/// assert!(!trigger.arm()); // already armed
/// assert!(trigger.take()); // fires once
/// assert!(!trigger.take());
/// ```
#[derive(Debug, Default)]
pub struct AutoCollectTrigger {
    armed: bool,
}

impl AutoCollectTrigger {
    /// Creates a disarmed trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the trigger. Returns false if it was already armed.
    pub fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// Cancels any pending collection. Called when a new transition starts.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Consumes the armed state. Returns true if a collection should run now.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    /// True while a collection is pending.
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
