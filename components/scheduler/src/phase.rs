//! Phase enumerations for multi-phase transitions.

/// Phases of a single allocation.
///
/// Batch allocation skips straight to [`AllocationPhase::Commit`], modeling
/// high-throughput allocation without the class-loading cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationPhase {
    /// Class-loading check; pure notification
    ClassLoadingCheck,
    /// Method-area lookup; pure notification
    MethodArea,
    /// Object created and appended to the heap
    Commit,
}

impl AllocationPhase {
    /// Advances to the next phase; the commit phase is terminal.
    pub fn advance(self) -> AllocationPhase {
        match self {
            AllocationPhase::ClassLoadingCheck => AllocationPhase::MethodArea,
            AllocationPhase::MethodArea => AllocationPhase::Commit,
            AllocationPhase::Commit => AllocationPhase::Commit,
        }
    }
}

/// State machine for one collection invocation.
///
/// Strictly sequential, no branching back:
/// `Idle -> Announced -> Classified -> Applied -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionState {
    /// No collection in flight
    #[default]
    Idle,
    /// Announce phase completed
    Announced,
    /// Classify phase completed
    Classified,
    /// Apply phase completed; the next step returns to idle
    Applied,
}

impl CollectionState {
    /// Advances to the next state in the cycle.
    pub fn advance(self) -> CollectionState {
        match self {
            CollectionState::Idle => CollectionState::Announced,
            CollectionState::Announced => CollectionState::Classified,
            CollectionState::Classified => CollectionState::Applied,
            CollectionState::Applied => CollectionState::Idle,
        }
    }
}
