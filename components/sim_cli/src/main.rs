//! jvmlab CLI
//!
//! Entry point for the memory model simulator. Parses CLI arguments and
//! delegates to the Session for execution.

use clap::Parser;
use sim_cli::{repl, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = sim_cli::Cli::parse();

    let mut session = Session::new(cli.heap_size, cli.seed, cli.fast);
    if cli.trace {
        session = session.with_trace();
    }

    // Execute based on CLI arguments
    if let Some(script) = cli.exec {
        for line in script.split(';') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match session.execute(line) {
                Ok(output) => {
                    if !output.is_empty() && !cli.json {
                        println!("{}", output);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        }
    } else if cli.repl {
        repl::run_repl(&mut session)?;
    } else {
        // Default: show usage
        println!("jvmlab v0.1.0");
        println!();
        println!("Usage:");
        println!("  jvmlab --repl                      Start the interactive simulator");
        println!("  jvmlab --exec \"alloc; gc; status\"  Run commands and exit");
        println!("  jvmlab --exec \"batch 30\" --json    Print the final state as JSON");
        println!();
        println!("Run 'jvmlab --help' for more options.");
    }

    Ok(())
}
