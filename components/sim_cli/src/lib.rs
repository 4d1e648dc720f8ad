//! JVM Memory Lab CLI Library
//!
//! Provides the Session struct and supporting modules for the simulator CLI.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assistant;
pub mod cli;
pub mod error;
pub mod render;
pub mod repl;
pub mod session;

pub use assistant::{Assistant, OfflineAssistant};
pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use session::Session;
