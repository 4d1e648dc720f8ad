//! Interactive session: parses commands and drives the simulator.

use heap_engine::MAX_BATCH_SIZE;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scheduler::WallClock;
use sim_engine::{CollectionKind, CollectionSummary, Simulator, Snapshot};
use sim_types::{HeapConfig, Subsystem};

use crate::assistant::{Assistant, OfflineAssistant};
use crate::error::{CliError, CliResult};
use crate::render;

/// Default batch size before `set batch` changes it.
const DEFAULT_BATCH_SIZE: usize = 20;

/// Default number of log entries shown by `log`.
const DEFAULT_LOG_LINES: usize = 10;

/// A simulator plus the operator-adjustable settings around it.
pub struct Session {
    sim: Simulator<StdRng>,
    batch_size: usize,
    assistant: Box<dyn Assistant>,
}

impl Session {
    /// Creates a session.
    ///
    /// `heap_size` is quantized to the configuration boundary; `seed` makes
    /// collection outcomes reproducible; `fast` disables the modeled phase
    /// delays.
    pub fn new(heap_size: usize, seed: Option<u64>, fast: bool) -> Self {
        let config = HeapConfig::new(HeapConfig::quantize(heap_size));
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut sim = Simulator::with_rng(config, rng);
        if !fast {
            sim = sim.with_pacer(Box::new(WallClock));
        }
        Self {
            sim,
            batch_size: DEFAULT_BATCH_SIZE,
            assistant: Box::new(OfflineAssistant),
        }
    }

    /// Replaces the assistant backend.
    pub fn with_assistant(mut self, assistant: Box<dyn Assistant>) -> Self {
        self.assistant = assistant;
        self
    }

    /// Echoes subsystem activation and flash events to stdout.
    pub fn with_trace(mut self) -> Self {
        self.sim = self.sim.with_visual_sink(Box::new(render::EchoSink));
        self
    }

    /// Executes one command line and returns the text to display.
    pub fn execute(&mut self, line: &str) -> CliResult<String> {
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => return Ok(String::new()),
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "alloc" | "new" => {
                let object = self.sim.allocate()?;
                let mut out = format!("allocated {} in Eden", object.name());
                self.drain_pending(&mut out)?;
                Ok(out)
            }
            "batch" => {
                let size = match args.first() {
                    Some(raw) => Self::parse_batch_size(raw)?,
                    None => self.batch_size,
                };
                let outcome = self.sim.allocate_batch(size)?;
                let mut out = if outcome.overflowed {
                    format!("allocated {} objects; heap is over capacity", outcome.added)
                } else {
                    format!("allocated {} objects", outcome.added)
                };
                self.drain_pending(&mut out)?;
                Ok(out)
            }
            "call" => {
                let frame = self.sim.call_method()?;
                Ok(format!("pushed {}", frame.label))
            }
            "ret" | "return" => {
                let frame = self.sim.return_method()?;
                Ok(format!("popped {}", frame.label))
            }
            "gc" => {
                let summary = self.sim.collect(CollectionKind::Minor)?;
                Ok(Self::describe_collection(&summary))
            }
            "fullgc" | "full" => {
                let summary = self.sim.collect(CollectionKind::Full)?;
                Ok(Self::describe_collection(&summary))
            }
            "status" => Ok(render::render_status(&self.sim.snapshot())),
            "heap" => Ok(render::render_heap(&self.sim.snapshot())),
            "stack" => Ok(render::render_stack(&self.sim.snapshot())),
            "log" => {
                let limit = match args.first() {
                    Some(raw) => raw
                        .parse::<usize>()
                        .map_err(|_| CliError::InvalidArgument(format!("log count: {}", raw)))?,
                    None => DEFAULT_LOG_LINES,
                };
                Ok(render::render_log(self.sim.event_log(), limit))
            }
            "select" => {
                let raw = args
                    .first()
                    .ok_or_else(|| CliError::InvalidArgument("select needs a subsystem".into()))?;
                let subsystem: Subsystem =
                    raw.parse().map_err(CliError::InvalidArgument)?;
                self.sim.select(subsystem);
                Ok(format!("selected {}", subsystem))
            }
            "info" => {
                let subsystem = match args.first() {
                    Some(raw) => raw.parse().map_err(CliError::InvalidArgument)?,
                    None => self
                        .sim
                        .selected()
                        .ok_or_else(|| CliError::InvalidArgument("nothing selected".into()))?,
                };
                let info = subsystem.info();
                Ok(format!("{}\n{}\n\n{}", info.name, info.description, info.details))
            }
            "ask" => {
                if args.is_empty() {
                    return Err(CliError::InvalidArgument("ask needs a question".into()));
                }
                let question = args.join(" ");
                Ok(self.assistant.ask(&question, &self.sim.selected_context()))
            }
            "set" => self.execute_set(&args),
            "help" => Ok(Self::help_text()),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }

    /// Current simulator snapshot, for presentation and JSON output.
    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    /// The underlying simulator.
    pub fn simulator(&self) -> &Simulator<StdRng> {
        &self.sim
    }

    fn execute_set(&mut self, args: &[&str]) -> CliResult<String> {
        match args {
            ["heap", raw] => {
                let requested = raw
                    .parse::<usize>()
                    .map_err(|_| CliError::InvalidArgument(format!("heap size: {}", raw)))?;
                let quantized = HeapConfig::quantize(requested);
                self.sim.set_max_heap_size(quantized)?;
                let config = self.sim.config();
                Ok(format!(
                    "heap size {} (young {}, old {})",
                    config.max_heap_size,
                    config.young_limit(),
                    config.old_limit()
                ))
            }
            ["batch", raw] => {
                self.batch_size = Self::parse_batch_size(raw)?;
                Ok(format!("default batch size {}", self.batch_size))
            }
            _ => Err(CliError::InvalidArgument(
                "usage: set heap <n> | set batch <n>".into(),
            )),
        }
    }

    fn parse_batch_size(raw: &str) -> CliResult<usize> {
        let size = raw
            .parse::<usize>()
            .map_err(|_| CliError::InvalidArgument(format!("batch size: {}", raw)))?;
        if size == 0 || size > MAX_BATCH_SIZE {
            return Err(CliError::InvalidArgument(format!(
                "batch size must be 1..={}",
                MAX_BATCH_SIZE
            )));
        }
        Ok(size)
    }

    /// Fires a pending automatic collection and appends its outcome.
    fn drain_pending(&mut self, out: &mut String) -> CliResult<()> {
        if let Some(summary) = self.sim.run_pending()? {
            out.push('\n');
            out.push_str(&Self::describe_collection(&summary));
        }
        Ok(())
    }

    fn describe_collection(summary: &CollectionSummary) -> String {
        let mut line = format!(
            "{}: reclaimed {}, promoted {}",
            summary.kind.label(),
            summary.reclaimed,
            summary.promoted
        );
        if summary.promotion_failure {
            line.push_str(" (promotion failure: old generation full)");
        }
        line
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  alloc           Allocate one object (class loading -> Eden)",
            "  batch [n]       Allocate n objects at once (default: set batch)",
            "  call            Push a stack frame",
            "  ret             Pop the top stack frame",
            "  gc              Run a Minor GC (young generation only)",
            "  fullgc          Run a Full GC (young + old)",
            "  status          One-line heap/stack summary",
            "  heap            Region-by-region heap listing",
            "  stack           Call stack listing",
            "  log [n]         Newest n log entries (default 10)",
            "  select <part>   Select a subsystem (heap, eden, old, gc, ...)",
            "  info [part]     Describe a subsystem",
            "  ask <question>  Ask the assistant about the selection",
            "  set heap <n>    Resize the heap (60-500, step 10)",
            "  set batch <n>   Change the default batch size (1-100)",
            "  help            This message",
        ]
        .join("\n")
    }
}
