//! Line-oriented command scripts
//!
//! A script drives any runqueue through the contract operations and records
//! one output line per query, so transcripts from different implementations
//! can be compared byte for byte.
//!
//! ```text
//! # comment
//! EN P1 10      enqueue
//! DE            dequeue            -> label (empty line if queue empty)
//! FP P1         find_process       -> true/false
//! RP P1         remove_process     -> true/false
//! PT P1         preceding time     -> sum, or -1 if absent
//! ST P1         succeeding time    -> sum, or -1 if absent
//! PA            print all          -> labels in vt order
//! Q             stop
//! ```

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, trace};

use crate::process::{TimeSum, Vt};
use crate::queue::{Runqueue, RunqueueKind};

/// Errors from parsing or executing a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// First token of a line is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// 1-based line number.
        line: usize,
        /// The unrecognised token.
        command: String,
    },

    /// A command was missing one of its operands.
    #[error("line {line}: {command} is missing its {argument} argument")]
    MissingArgument {
        /// 1-based line number.
        line: usize,
        /// Canonical command mnemonic.
        command: &'static str,
        /// Name of the missing operand.
        argument: &'static str,
    },

    /// Virtual time operand was not a non-negative integer.
    #[error("line {line}: invalid virtual time '{value}'")]
    InvalidVirtualTime {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        value: String,
    },

    /// Writing the transcript failed.
    #[error("failed to write transcript: {0}")]
    Io(#[from] io::Error),
}

/// First disagreement between two transcripts of the same script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Divergence {
    /// Both transcripts have a line here, with different content.
    #[error("{kind} diverges from {reference} at output line {line}: expected '{expected}', got '{actual}'")]
    Line {
        /// Implementation whose transcript is the reference.
        reference: RunqueueKind,
        /// Implementation that disagrees.
        kind: RunqueueKind,
        /// 1-based output line.
        line: usize,
        /// Reference content.
        expected: String,
        /// Disagreeing content.
        actual: String,
    },

    /// One transcript is a strict prefix of the other.
    #[error("{kind} produced {actual} output lines, {reference} produced {expected}")]
    LineCount {
        /// Implementation whose transcript is the reference.
        reference: RunqueueKind,
        /// Implementation that disagrees.
        kind: RunqueueKind,
        /// Reference line count.
        expected: usize,
        /// Disagreeing line count.
        actual: usize,
    },
}

/// One parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `EN <label> <vt>`
    Enqueue {
        /// Process label.
        label: String,
        /// Virtual time.
        vt: Vt,
    },
    /// `DE`
    Dequeue,
    /// `FP <label>`
    Find(String),
    /// `RP <label>`
    Remove(String),
    /// `PT <label>`
    PrecedingTime(String),
    /// `ST <label>`
    SucceedingTime(String),
    /// `PA`
    PrintAll,
    /// `Q`
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Enqueue { label, vt } => write!(f, "EN {label} {vt}"),
            Command::Dequeue => f.write_str("DE"),
            Command::Find(label) => write!(f, "FP {label}"),
            Command::Remove(label) => write!(f, "RP {label}"),
            Command::PrecedingTime(label) => write!(f, "PT {label}"),
            Command::SucceedingTime(label) => write!(f, "ST {label}"),
            Command::PrintAll => f.write_str("PA"),
            Command::Quit => f.write_str("Q"),
        }
    }
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut tokens = text.split_whitespace();
        let Some(head) = tokens.next() else {
            continue;
        };

        let mut operand = |command: &'static str, argument: &'static str| {
            tokens
                .next()
                .map(str::to_string)
                .ok_or(ScriptError::MissingArgument {
                    line,
                    command,
                    argument,
                })
        };

        let command = match head.to_ascii_uppercase().as_str() {
            "EN" | "ENQUEUE" => {
                let label = operand("EN", "label")?;
                let value = operand("EN", "vt")?;
                let vt = value
                    .parse::<Vt>()
                    .map_err(|_| ScriptError::InvalidVirtualTime { line, value })?;
                Command::Enqueue { label, vt }
            }
            "DE" | "DEQUEUE" => Command::Dequeue,
            "FP" | "FIND" => Command::Find(operand("FP", "label")?),
            "RP" | "REMOVE" => Command::Remove(operand("RP", "label")?),
            "PT" | "PRECEDING" => Command::PrecedingTime(operand("PT", "label")?),
            "ST" | "SUCCEEDING" => Command::SucceedingTime(operand("ST", "label")?),
            "PA" | "PRINT" => Command::PrintAll,
            "Q" | "QUIT" => Command::Quit,
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: head.to_string(),
                })
            }
        };
        commands.push(command);
    }

    debug!(commands = commands.len(), "parsed script");
    Ok(commands)
}

fn render_time(time: Option<TimeSum>) -> String {
    time.map_or_else(|| "-1".to_string(), |t| t.to_string())
}

/// Run `commands` against `queue`, writing one line per query to `sink`.
///
/// Stops at the first `Quit`.
pub fn execute(
    commands: &[Command],
    queue: &mut dyn Runqueue,
    sink: &mut dyn Write,
) -> Result<(), ScriptError> {
    for command in commands {
        trace!(kind = %queue.kind(), %command, "executing");
        match command {
            Command::Enqueue { label, vt } => queue.enqueue(label, *vt),
            Command::Dequeue => writeln!(sink, "{}", queue.dequeue().unwrap_or_default())?,
            Command::Find(label) => writeln!(sink, "{}", queue.find_process(label))?,
            Command::Remove(label) => writeln!(sink, "{}", queue.remove_process(label))?,
            Command::PrecedingTime(label) => {
                writeln!(sink, "{}", render_time(queue.preceding_process_time(label)))?
            }
            Command::SucceedingTime(label) => {
                writeln!(sink, "{}", render_time(queue.succeeding_process_time(label)))?
            }
            Command::PrintAll => queue.print_all_processes(sink)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Parse `source` and run it against a fresh queue of `kind`.
pub fn run_script(source: &str, kind: RunqueueKind) -> Result<String, ScriptError> {
    let commands = parse(source)?;
    let mut queue = kind.build();
    transcript(&commands, queue.as_mut())
}

/// Run parsed commands against `queue` and collect the output as a string.
pub fn transcript(commands: &[Command], queue: &mut dyn Runqueue) -> Result<String, ScriptError> {
    let mut out = Vec::new();
    execute(commands, queue, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Check that every transcript matches the first one.
///
/// Reports the first differing line of the first disagreeing
/// implementation. An empty slice agrees trivially.
pub fn compare_transcripts(transcripts: &[(RunqueueKind, String)]) -> Result<(), Divergence> {
    let Some(((reference, expected), rest)) = transcripts.split_first() else {
        return Ok(());
    };

    for (kind, actual) in rest {
        let mut want = expected.lines();
        let mut got = actual.lines();
        let mut line = 0;
        loop {
            line += 1;
            match (want.next(), got.next()) {
                (Some(a), Some(b)) if a == b => continue,
                (Some(a), Some(b)) => {
                    return Err(Divergence::Line {
                        reference: *reference,
                        kind: *kind,
                        line,
                        expected: a.to_string(),
                        actual: b.to_string(),
                    })
                }
                (None, None) => break,
                _ => {
                    return Err(Divergence::LineCount {
                        reference: *reference,
                        kind: *kind,
                        expected: expected.lines().count(),
                        actual: actual.lines().count(),
                    })
                }
            }
        }
    }

    Ok(())
}
