/// Outcome types handed from commands to the renderer.
///
/// Commands decide *what* happened; `cli::output` decides how it looks.
use std::path::PathBuf;

/// Contents of a protocol file, or the fact that it was not there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolBody {
    /// Raw file bytes, unmodified.
    Contents(Vec<u8>),
    /// The registry path does not exist.
    Missing,
}

/// Result of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No command given: list what is available.
    Listing {
        /// Registry names in order.
        commands: Vec<String>,
    },
    /// A known command was given.
    Protocol {
        /// The command as typed.
        command: String,
        /// Registry path for the command.
        path: PathBuf,
        /// File contents or `Missing`.
        body: ProtocolBody,
    },
    /// The command is not in the registry.
    Unknown {
        /// The command as typed.
        command: String,
        /// Registry names in order.
        available: Vec<String>,
    },
}
