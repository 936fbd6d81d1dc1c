//! `avl-trace` — replay insert/remove scripts against a traced AVL tree.
//!
//! Provides the logic behind the `avl-trace` binary:
//! - [`script`] — command parsing and execution, one JSON line per command
//! - [`config`] — command-line options and the resolved [`RunConfig`]
//! - [`logging`] — `RUST_LOG`-driven diagnostics on stderr

pub mod config;
pub mod logging;
pub mod script;

use thiserror::Error;

pub use config::{Cli, RunConfig};
pub use script::{parse_script, Command, Output, Runner};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}
