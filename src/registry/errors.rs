/// Errors that escape the dispatcher.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Faults that abort a dispatch.
///
/// Unknown commands and missing protocol files are ordinary outcomes and
/// never show up here.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The protocol file exists but could not be read.
    #[error("Failed to read command file {}: {source}", path.display())]
    Read {
        /// Path taken from the registry.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl DispatchError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Write(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_message_includes_path() {
        let err = DispatchError::Read {
            path: PathBuf::from("docs/a.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read command file docs/a.md: denied");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_write_from_io() {
        let err: DispatchError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, DispatchError::Write(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
