/// Output formatting for every dispatch outcome, plus error and debug output.
use std::io::{self, Write};
use std::path::Path;

use crate::registry::DispatchError;
use crate::types::{Outcome, ProtocolBody};

/// Name shown in the usage hint.
pub const PROGRAM_NAME: &str = "run-command";

/// Banner printed above and below a protocol.
pub const SEPARATOR: &str = "==================================================";

/// Trailer printed after every known command.
pub const CONFIRMATION: &str = "✅ Ask Claude to execute this protocol";

/// Environment variable that turns on stage timings.
pub const DEBUG_ENV: &str = "RUN_COMMAND_DEBUG";

/// Output context passed to all commands.
pub struct OutputCtx {
    /// When true, print stage timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Construct from the environment. Any value of `RUN_COMMAND_DEBUG` other
    /// than empty or `0` enables timings.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(debug_enabled(std::env::var_os(DEBUG_ENV).as_deref()))
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Render an outcome to `out`.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_outcome<W: Write>(outcome: &Outcome, out: &mut W) -> io::Result<()> {
    match outcome {
        Outcome::Listing { commands } => write_listing(commands, out),
        Outcome::Protocol {
            command,
            path,
            body,
        } => write_protocol(command, path, body, out),
        Outcome::Unknown { command, available } => write_unknown(command, available, out),
    }
}

fn debug_enabled(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v != "0")
}

// --- Listing ---

fn write_listing<W: Write>(commands: &[String], out: &mut W) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    for cmd in commands {
        writeln!(out, "  - {cmd}")?;
    }
    writeln!(out)?;
    writeln!(out, "Usage: {PROGRAM_NAME} [command]")
}

// --- Protocol ---

fn write_protocol<W: Write>(
    command: &str,
    path: &Path,
    body: &ProtocolBody,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "📋 Showing protocol for: {command}")?;
    writeln!(out, "{SEPARATOR}")?;
    match body {
        ProtocolBody::Contents(bytes) => {
            out.write_all(bytes)?;
            writeln!(out)?;
        }
        ProtocolBody::Missing => {
            writeln!(out, "Command file not found: {}", path.display())?;
        }
    }
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    writeln!(out, "{CONFIRMATION}")
}

// --- Unknown ---

fn write_unknown<W: Write>(command: &str, available: &[String], out: &mut W) -> io::Result<()> {
    writeln!(out, "Unknown command: {command}")?;
    writeln!(out, "Available commands: {}", available.join(", "))
}

// --- Error output ---

/// Write a fatal error to stderr.
pub fn write_error(err: &DispatchError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
