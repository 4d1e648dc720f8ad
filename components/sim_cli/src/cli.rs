//! Command-line argument definitions

use clap::Parser;

/// Interactive simulator of a managed-runtime memory model: class loading,
/// stack frames, a generational heap, and garbage collection.
#[derive(Debug, Parser)]
#[command(name = "jvmlab", version, about)]
pub struct Cli {
    /// Heap capacity in objects (60-500, quantized to steps of 10)
    #[arg(long, default_value_t = 60)]
    pub heap_size: usize,

    /// Seed the collection RNG for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the modeled delays between transition phases
    #[arg(long)]
    pub fast: bool,

    /// Print subsystem activation/flash events as they happen
    #[arg(long)]
    pub trace: bool,

    /// Execute semicolon-separated commands (e.g. "batch 100; gc; status") and exit
    #[arg(long)]
    pub exec: Option<String>,

    /// Print a JSON snapshot after --exec
    #[arg(long)]
    pub json: bool,

    /// Start the interactive REPL
    #[arg(long)]
    pub repl: bool,
}
