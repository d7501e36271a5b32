/// Command registry: the fixed, ordered mapping from command name to protocol file.
pub mod errors;
pub mod protocol;

use std::path::{Path, PathBuf};

pub use errors::DispatchError;
pub use protocol::read_protocol;

/// Built-in commands, in display order.
///
/// Paths are relative to the working directory the binary runs in.
pub const BUILTIN_COMMANDS: &[(&str, &str)] = &[
    ("session-start", ".claude/commands/session_start.md"),
    ("session-end", ".claude/commands/session_end.md"),
    ("safe-cleanup", ".claude/commands/safe-cleanup.md"),
];

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Command name as typed on the command line (e.g., "session-start").
    pub name: String,
    /// Protocol file path, used verbatim.
    pub path: PathBuf,
}

/// Ordered, read-only command registry.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Build a registry from `(name, path)` pairs.
    ///
    /// A repeated name keeps the position of its first occurrence and takes
    /// the path of its last.
    #[must_use]
    pub fn new<I, N, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<PathBuf>,
    {
        let mut entries: Vec<Entry> = Vec::new();
        for (name, path) in pairs {
            let name = name.into();
            let path = path.into();
            match entries.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.path = path,
                None => entries.push(Entry { name, path }),
            }
        }
        Self { entries }
    }

    /// The registry compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_COMMANDS.iter().copied())
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.path.as_path())
    }

    /// Command names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}
