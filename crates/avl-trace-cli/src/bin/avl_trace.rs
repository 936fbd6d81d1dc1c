//! `avl-trace` — replay an AVL insert/remove script and print its traces.
//!
//! Usage:
//!   avl-trace [--input FILE] [--pretty] [--snapshot] [--tree]
//!
//! The script is read from FILE, or stdin when omitted. Each command prints
//! one JSON object to stdout; errors go to stderr with exit status 1.

use std::io::{self, Read, Write};

use avl_trace_cli::{logging, Cli, CliError, RunConfig, Runner};
use clap::Parser;

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let src = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut runner = Runner::new(RunConfig::from(cli));
    let out = runner.run(&src)?;
    io::stdout().write_all(out.as_bytes())?;

    if cli.tree {
        eprintln!("{}", runner.tree());
    }
    Ok(())
}
