//! The coordinator: sequences multi-phase transitions over the simulation
//! state record.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scheduler::{
    timing, AllocationPhase, AutoCollectTrigger, CollectionState, NoDelay, Pacer,
};
use sim_types::{
    EventLog, HeapConfig, ManagedObject, Severity, SimError, SimResult, SimulationCounters,
    StackFrame, Subsystem,
};

use heap_engine::{alloc, gc, BatchOutcome, CollectionKind, CollectionSummary, HeapState};

use crate::call_stack::CallStack;
use crate::snapshot::Snapshot;
use crate::visual::{NullSink, VisualEvent, VisualSink};

/// The simulation coordinator.
///
/// Owns the single explicit simulation-state record: heap, call stack,
/// counters, event log, the busy flag that serializes transitions, and the
/// debounced auto-collection trigger. Every mutating operation checks the
/// busy flag first; while a multi-phase transition is in flight all other
/// mutating operations are rejected with [`SimError::Busy`] (no queueing).
///
/// Collection survival draws come from the injected RNG, so a simulator
/// built with [`Simulator::with_rng`] and a seeded generator replays
/// identically.
///
/// # Examples
///
/// ```
/// use sim_engine::Simulator;
/// use sim_types::HeapConfig;
///
/// let mut sim = Simulator::new(HeapConfig::new(60));
/// let obj = sim.allocate().unwrap();
/// assert_eq!(obj.id, 1);
/// assert_eq!(sim.snapshot().total_count(), 1);
/// ```
pub struct Simulator<R: Rng = StdRng> {
    config: HeapConfig,
    heap: HeapState,
    stack: CallStack,
    counters: SimulationCounters,
    log: EventLog,
    busy: bool,
    selected: Option<Subsystem>,
    auto_collect: AutoCollectTrigger,
    pacer: Box<dyn Pacer>,
    visual: Box<dyn VisualSink>,
    rng: R,
}

impl Simulator<StdRng> {
    /// Creates a simulator with an OS-seeded RNG and no pacing.
    pub fn new(config: HeapConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Simulator<R> {
    /// Creates a simulator with the given RNG. Seed the RNG to make
    /// collection passes reproducible.
    pub fn with_rng(config: HeapConfig, rng: R) -> Self {
        Self {
            config,
            heap: HeapState::new(),
            stack: CallStack::new(),
            counters: SimulationCounters::new(),
            log: EventLog::new(),
            busy: false,
            selected: None,
            auto_collect: AutoCollectTrigger::new(),
            pacer: Box::new(NoDelay),
            visual: Box::new(NullSink),
            rng,
        }
    }

    /// Replaces the pacer that spaces transition phases.
    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Replaces the sink that receives visual events.
    pub fn with_visual_sink(mut self, sink: Box<dyn VisualSink>) -> Self {
        self.visual = sink;
        self
    }

    // --- transitions ---

    /// Single allocation: three phases (class-loading check, method area,
    /// commit into Eden).
    ///
    /// Fails with [`SimError::Busy`] while another transition is in flight
    /// and with [`SimError::OutOfMemory`] when the heap is at capacity; the
    /// lock is not acquired in either case.
    pub fn allocate(&mut self) -> SimResult<ManagedObject> {
        self.ensure_idle()?;

        if let Err(err) = alloc::check_capacity(&self.heap, &self.config) {
            self.record(
                Severity::Error,
                format!(
                    "Error: Java heap space OOM! (limit {} reached)",
                    self.config.max_heap_size
                ),
            );
            self.flash(Subsystem::Heap);
            return Err(err);
        }

        self.begin_transition();
        let mut phase = AllocationPhase::ClassLoadingCheck;

        // Class-loading check. Notification only.
        self.record(Severity::Action, "Received 'new Object()' instruction");
        self.flash(Subsystem::ClassLoader);
        self.activate(Subsystem::ClassLoader);
        phase = phase.advance();
        debug_assert_eq!(phase, AllocationPhase::MethodArea);
        self.pacer.pause(timing::ALLOCATION_PHASE_GAP);

        // Method area. Notification only.
        self.record(
            Severity::Info,
            "Class loader verified the class and loaded its metadata into the method area",
        );
        self.flash(Subsystem::MethodArea);
        self.activate(Subsystem::MethodArea);
        phase = phase.advance();
        debug_assert_eq!(phase, AllocationPhase::Commit);
        self.pacer.pause(timing::ALLOCATION_PHASE_GAP);

        // Commit.
        let object = alloc::commit_one(&mut self.heap, &mut self.counters);
        self.record(
            Severity::Action,
            format!("Allocated {} in the heap (Eden)", object.name()),
        );
        self.flash(Subsystem::HeapYoung);
        self.activate(Subsystem::HeapYoung);

        self.end_transition();
        Ok(object)
    }

    /// Batch allocation: skips the class-loading phases and commits
    /// `batch_size` Eden objects at once.
    ///
    /// Capacity is not enforced; an over-capacity result is reported as an
    /// overflow and retained so collection and OOM behavior can be
    /// demonstrated afterwards.
    pub fn allocate_batch(&mut self, batch_size: usize) -> SimResult<BatchOutcome> {
        self.ensure_idle()?;
        self.begin_transition();

        self.record(
            Severity::Action,
            format!("Batch allocation requested: {} objects", batch_size),
        );
        self.flash(Subsystem::HeapYoung);
        self.activate(Subsystem::HeapYoung);
        self.pacer.pause(timing::BATCH_COMMIT_GAP);

        let outcome = alloc::commit_batch(&mut self.heap, &mut self.counters, &self.config, batch_size);
        if outcome.overflowed {
            self.record(
                Severity::Error,
                format!(
                    "Warning: batch allocation overflowed the heap ({}/{})",
                    self.heap.len(),
                    self.config.max_heap_size
                ),
            );
        } else {
            self.record(
                Severity::Action,
                format!(
                    "High-throughput simulation: allocated {} objects in Eden instantly",
                    outcome.added
                ),
            );
        }

        self.end_transition();
        Ok(outcome)
    }

    /// Method call: pushes a frame, then notifies the PC register.
    pub fn call_method(&mut self) -> SimResult<StackFrame> {
        self.ensure_idle()?;
        self.begin_transition();

        self.record(Severity::Action, "Method call: push_stack_frame()");
        self.flash(Subsystem::Stack);
        self.activate(Subsystem::Stack);
        self.pacer.pause(timing::STACK_PHASE_GAP);

        let frame = self.stack.push().clone();
        self.record(Severity::Info, "New frame pushed onto the VM stack");

        // Observational only: no state changes past this point.
        self.flash(Subsystem::PcRegister);
        self.record(Severity::Info, "PC register updated to the next instruction");

        self.end_transition();
        Ok(frame)
    }

    /// Method return: pops the top frame.
    ///
    /// Fails with [`SimError::EmptyStack`] when no frame is active; nothing
    /// changes and the lock is not acquired.
    pub fn return_method(&mut self) -> SimResult<StackFrame> {
        self.ensure_idle()?;

        if self.stack.is_empty() {
            self.record(Severity::Error, "Stack is empty, nothing to pop");
            return Err(SimError::EmptyStack);
        }

        self.begin_transition();

        self.record(Severity::Action, "Method return: pop_stack_frame()");
        self.flash(Subsystem::Stack);
        self.activate(Subsystem::Stack);
        self.pacer.pause(timing::STACK_PHASE_GAP);

        let frame = self.stack.pop()?;
        self.record(Severity::Info, "Frame popped, caller context restored");

        self.end_transition();
        Ok(frame)
    }

    /// Runs a collection pass: announce, classify, apply.
    pub fn collect(&mut self, kind: CollectionKind) -> SimResult<CollectionSummary> {
        self.ensure_idle()?;
        self.begin_transition();
        let mut state = CollectionState::Idle;

        // Announce.
        self.record(
            Severity::Action,
            format!("Starting {} (mark-sweep/copying)...", kind.label()),
        );
        self.flash(Subsystem::Collector);
        self.activate(Subsystem::Collector);
        state = state.advance();
        debug_assert_eq!(state, CollectionState::Announced);
        self.pacer.pause(timing::COLLECTION_CLASSIFY_GAP);

        // Classify and rebuild.
        self.flash(Subsystem::HeapYoung);
        if kind == CollectionKind::Full {
            self.flash(Subsystem::HeapOld);
            self.activate(Subsystem::Heap);
        } else {
            self.activate(Subsystem::HeapYoung);
        }

        let classification = gc::classify(&self.heap, &self.config, kind, &mut self.rng);
        state = state.advance();
        debug_assert_eq!(state, CollectionState::Classified);

        if classification.summary.promotion_failure && kind == CollectionKind::Minor {
            self.record(
                Severity::Error,
                "Major GC warning: old generation too full, survivors could not be promoted!",
            );
            self.flash(Subsystem::HeapOld);
        }
        if classification.summary.reclaimed > 0 {
            self.record(
                Severity::Info,
                format!(
                    "{} finished: reclaimed {} objects",
                    kind.label(),
                    classification.summary.reclaimed
                ),
            );
        } else {
            self.record(
                Severity::Info,
                format!("{} complete: nothing to reclaim", kind.label()),
            );
        }
        self.pacer.pause(timing::COLLECTION_APPLY_GAP);

        // Apply.
        let summary = gc::apply(&mut self.heap, &mut self.counters, classification);
        if summary.promoted > 0 {
            self.record(
                Severity::Action,
                format!(
                    "{} surviving objects promoted to the old generation",
                    summary.promoted
                ),
            );
            self.flash(Subsystem::HeapOld);
        }
        state = state.advance();
        debug_assert_eq!(state, CollectionState::Applied);
        state = state.advance();
        debug_assert_eq!(state, CollectionState::Idle);

        self.end_transition();
        Ok(summary)
    }

    /// Fires the pending automatic minor collection, if one is armed.
    ///
    /// Waits the settling interval first. Returns the pass summary, or
    /// `None` when nothing was pending.
    pub fn run_pending(&mut self) -> SimResult<Option<CollectionSummary>> {
        if !self.auto_collect.is_armed() {
            return Ok(None);
        }
        self.pacer.pause(timing::AUTO_COLLECT_SETTLE);
        if !self.auto_collect.take() {
            return Ok(None);
        }
        self.record(
            Severity::Action,
            "Threshold reached, triggering automatic Minor GC",
        );
        self.collect(CollectionKind::Minor).map(Some)
    }

    // --- configuration and selection ---

    /// Applies a new heap size. Existing objects are never invalidated.
    pub fn set_max_heap_size(&mut self, max_heap_size: usize) -> SimResult<()> {
        self.ensure_idle()?;
        self.config = HeapConfig::new(max_heap_size);
        self.record(
            Severity::Info,
            format!(
                "Heap size set to {} (young {}, old {})",
                self.config.max_heap_size,
                self.config.young_limit(),
                self.config.old_limit()
            ),
        );
        // The new limits may already be breached.
        self.evaluate_pressure();
        Ok(())
    }

    /// Marks a subsystem as the selected one (presentation click-through).
    pub fn select(&mut self, subsystem: Subsystem) {
        self.activate(subsystem);
    }

    /// Currently selected subsystem, if any.
    pub fn selected(&self) -> Option<Subsystem> {
        self.selected
    }

    /// Context string describing the current selection, forwarded verbatim
    /// to the chat assistant.
    pub fn selected_context(&self) -> String {
        match self.selected {
            Some(subsystem) => {
                let info = subsystem.info();
                format!(
                    "The user is currently looking at: {}. Description: {}",
                    info.name, info.details
                )
            }
            None => "The user is viewing the whole VM overview".to_string(),
        }
    }

    // --- read-only views ---

    /// Snapshot of the full state for presentation layers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            objects: self.heap.objects().to_vec(),
            frames: self.stack.frames().to_vec(),
            counters: self.counters,
            max_heap_size: self.config.max_heap_size,
            young_limit: self.config.young_limit(),
            old_limit: self.config.old_limit(),
            young_count: self.heap.young_count(),
            old_count: self.heap.old_count(),
            busy: self.busy,
            selected: self.selected,
        }
    }

    /// The narration log.
    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    /// Current heap configuration.
    pub fn config(&self) -> HeapConfig {
        self.config
    }

    /// True while a transition is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// True while an automatic minor collection is pending.
    pub fn auto_collect_pending(&self) -> bool {
        self.auto_collect.is_armed()
    }

    // --- internals ---

    fn ensure_idle(&self) -> SimResult<()> {
        if self.busy {
            return Err(SimError::Busy);
        }
        Ok(())
    }

    fn begin_transition(&mut self) {
        // A new transition abandons any pending auto-collection (debounce).
        self.auto_collect.disarm();
        self.busy = true;
    }

    fn end_transition(&mut self) {
        self.busy = false;
        self.evaluate_pressure();
    }

    /// Checks generation pressure once the lock is free.
    fn evaluate_pressure(&mut self) {
        let young = self.heap.young_count();
        let young_limit = self.config.young_limit();
        if young >= young_limit {
            if self.auto_collect.arm() {
                self.record(
                    Severity::Action,
                    format!("Young generation under pressure ({}/{})", young, young_limit),
                );
            }
            return;
        }

        let total = self.heap.len();
        if total > self.config.max_heap_size {
            self.record(
                Severity::Error,
                format!(
                    "Heap overflow! live: {}, max: {}",
                    total, self.config.max_heap_size
                ),
            );
        }
    }

    fn record(&mut self, severity: Severity, message: impl Into<String>) {
        self.log.push(severity, message);
    }

    fn flash(&mut self, subsystem: Subsystem) {
        self.visual.emit(VisualEvent::Flashing(subsystem));
    }

    fn activate(&mut self, subsystem: Subsystem) {
        self.selected = Some(subsystem);
        self.visual.emit(VisualEvent::Activated(subsystem));
    }
}
