/// Reading protocol files.
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use super::errors::DispatchError;
use crate::types::ProtocolBody;

/// Read a protocol file in full.
///
/// A file that does not exist yields [`ProtocolBody::Missing`]. The handle is
/// dropped before returning on every path.
///
/// # Errors
///
/// Returns `DispatchError::Read` for any I/O failure other than `NotFound`.
pub fn read_protocol(path: &Path) -> Result<ProtocolBody, DispatchError> {
    let read_err = |source: io::Error| DispatchError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ProtocolBody::Missing),
        Err(err) => return Err(read_err(err)),
    };

    let mut contents = Vec::new();
    file.read_to_end(&mut contents).map_err(read_err)?;
    Ok(ProtocolBody::Contents(contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.md");
        std::fs::write(&path, b"# Start\r\n\n  indented  \n\n").unwrap();

        let body = read_protocol(&path).unwrap();
        assert_eq!(
            body,
            ProtocolBody::Contents(b"# Start\r\n\n  indented  \n\n".to_vec())
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let body = read_protocol(&dir.path().join("nope.md")).unwrap();
        assert_eq!(body, ProtocolBody::Missing);
    }

    #[test]
    fn test_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let body = read_protocol(&dir.path().join("no/such/dir/a.md")).unwrap();
        assert_eq!(body, ProtocolBody::Missing);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.md");
        std::fs::write(&path, b"").unwrap();
        assert_eq!(
            read_protocol(&path).unwrap(),
            ProtocolBody::Contents(Vec::new())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_protocol(dir.path());
        assert!(matches!(result, Err(DispatchError::Read { .. })));
    }
}
