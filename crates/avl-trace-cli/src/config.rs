//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

/// Replay an insert/remove script against an AVL tree and print each trace as JSON.
///
/// Script commands, one per line: `insert <key>`, `remove <key>`, `snapshot`,
/// `print`, `clear`. Blank lines and `#` comments are skipped.
#[derive(Debug, Parser)]
#[command(name = "avl-trace", version)]
pub struct Cli {
    /// Script file to read; stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Pretty-print each JSON object instead of one per line.
    #[arg(long)]
    pub pretty: bool,

    /// Attach a pre-order snapshot to every insert/remove result.
    #[arg(long)]
    pub snapshot: bool,

    /// Draw the final tree on stderr.
    #[arg(long)]
    pub tree: bool,
}

/// Options the runner needs, detached from argument parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub pretty: bool,
    pub snapshot_each: bool,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            pretty: cli.pretty,
            snapshot_each: cli.snapshot,
        }
    }
}
