//! Script parsing and execution.

use avl_trace::{AvlTrace, Event, NodeDescriptor};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::CliError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Insert(i32),
    Remove(i32),
    Snapshot,
    Print,
    Clear,
}

/// One result line, tagged by `op`.
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Output {
    Insert {
        key: i32,
        events: Vec<Event>,
        #[serde(skip_serializing_if = "Option::is_none")]
        snapshot: Option<Vec<NodeDescriptor>>,
    },
    Remove {
        key: i32,
        events: Vec<Event>,
        #[serde(skip_serializing_if = "Option::is_none")]
        snapshot: Option<Vec<NodeDescriptor>>,
    },
    Snapshot {
        snapshot: Vec<NodeDescriptor>,
    },
    Print {
        tree: String,
    },
    Clear,
}

fn parse_error(line: usize, message: impl Into<String>) -> CliError {
    CliError::Parse {
        line,
        message: message.into(),
    }
}

/// Parses one line; `line` is 1-based and only used for error reporting.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Command>, CliError> {
    let text = text.split('#').next().unwrap_or_default();
    let mut tokens = text.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    let arg = tokens.next();
    if let Some(extra) = tokens.next() {
        return Err(parse_error(line, format!("unexpected argument `{extra}`")));
    }

    let key = |arg: Option<&str>| -> Result<i32, CliError> {
        let arg = arg.ok_or_else(|| parse_error(line, format!("`{name}` needs a key")))?;
        arg.parse::<i32>()
            .map_err(|_| parse_error(line, format!("invalid key `{arg}`")))
    };
    let no_arg = |cmd: Command| -> Result<Command, CliError> {
        match arg {
            Some(a) => Err(parse_error(line, format!("`{name}` takes no argument, got `{a}`"))),
            None => Ok(cmd),
        }
    };

    let cmd = match name.to_ascii_lowercase().as_str() {
        "insert" | "i" | "add" => Command::Insert(key(arg)?),
        "remove" | "delete" | "del" | "d" => Command::Remove(key(arg)?),
        "snapshot" => no_arg(Command::Snapshot)?,
        "print" => no_arg(Command::Print)?,
        "clear" => no_arg(Command::Clear)?,
        other => return Err(parse_error(line, format!("unknown command `{other}`"))),
    };
    Ok(Some(cmd))
}

pub fn parse_script(src: &str) -> Result<Vec<Command>, CliError> {
    let mut commands = Vec::new();
    for (i, text) in src.lines().enumerate() {
        if let Some(cmd) = parse_line(text, i + 1)? {
            commands.push(cmd);
        }
    }
    Ok(commands)
}

/// Holds the tree across commands of one script.
#[derive(Debug, Default)]
pub struct Runner {
    tree: AvlTrace,
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self {
            tree: AvlTrace::new(),
            config,
        }
    }

    pub fn tree(&self) -> &AvlTrace {
        &self.tree
    }

    pub fn apply(&mut self, cmd: Command) -> Output {
        debug!(?cmd, "apply");
        match cmd {
            Command::Insert(key) => {
                let events = self.tree.insert(key);
                Output::Insert {
                    key,
                    events,
                    snapshot: self.snapshot_each(),
                }
            }
            Command::Remove(key) => {
                let events = self.tree.remove(key);
                Output::Remove {
                    key,
                    events,
                    snapshot: self.snapshot_each(),
                }
            }
            Command::Snapshot => Output::Snapshot {
                snapshot: self.tree.snapshot(),
            },
            Command::Print => Output::Print {
                tree: self.tree.print(),
            },
            Command::Clear => {
                self.tree.clear();
                Output::Clear
            }
        }
    }

    fn snapshot_each(&self) -> Option<Vec<NodeDescriptor>> {
        self.config.snapshot_each.then(|| self.tree.snapshot())
    }

    /// Runs a whole script and returns the JSON output, one object per command.
    ///
    /// The script is parsed up front, so a malformed line fails before any
    /// command is applied.
    pub fn run(&mut self, src: &str) -> Result<String, CliError> {
        let commands = parse_script(src)?;
        info!(commands = commands.len(), "running script");
        let mut out = String::new();
        for cmd in commands {
            let output = self.apply(cmd);
            let json = if self.config.pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            out.push_str(&json);
            out.push('\n');
        }
        Ok(out)
    }
}
