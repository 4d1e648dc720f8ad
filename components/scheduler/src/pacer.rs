//! Pluggable pause source for phase pacing.

use std::time::Duration;

/// Supplies the pauses between transition phases.
///
/// Phase N always completes before phase N+1 begins; the pacer only controls
/// how much wall-clock time separates them. Tests use [`NoDelay`] so every
/// transition completes immediately; the interactive CLI uses [`WallClock`].
pub trait Pacer {
    /// Suspends the current (single) logical thread for `duration`.
    fn pause(&self, duration: Duration);
}

/// Pacer that never waits. Used by tests and non-interactive runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self, _duration: Duration) {}
}

/// Pacer that sleeps for the full modeled delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Pacer for WallClock {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
