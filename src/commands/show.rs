/// Showing a single protocol, or reporting an unknown command.
use crate::cli::OutputCtx;
use crate::registry::{DispatchError, Registry, read_protocol};
use crate::types::Outcome;

/// Resolve `command` against the registry and load its protocol file.
///
/// # Errors
///
/// Returns `DispatchError::Read` if the protocol file exists but cannot be read.
pub fn run(command: &str, registry: &Registry, ctx: &OutputCtx) -> Result<Outcome, DispatchError> {
    let t_lookup = ctx.timer("lookup");
    let path = registry.lookup(command);
    drop(t_lookup);

    let Some(path) = path else {
        return Ok(Outcome::Unknown {
            command: command.to_owned(),
            available: registry.names().map(str::to_owned).collect(),
        });
    };

    let t_read = ctx.timer("read_protocol");
    let body = read_protocol(path)?;
    drop(t_read);

    Ok(Outcome::Protocol {
        command: command.to_owned(),
        path: path.to_path_buf(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::types::ProtocolBody;

    #[test]
    fn test_known_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("start.md");
        std::fs::write(&path, "steps").unwrap();
        let registry = Registry::new([("session-start", path.clone())]);

        let outcome = run("session-start", &registry, &OutputCtx::new(false)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Protocol {
                command: "session-start".to_owned(),
                path,
                body: ProtocolBody::Contents(b"steps".to_vec()),
            }
        );
    }

    #[test]
    fn test_known_without_file() {
        let registry = Registry::new([("session-end", "does/not/exist.md")]);
        let outcome = run("session-end", &registry, &OutputCtx::new(false)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Protocol {
                command: "session-end".to_owned(),
                path: PathBuf::from("does/not/exist.md"),
                body: ProtocolBody::Missing,
            }
        );
    }

    #[test]
    fn test_unknown_lists_available() {
        let outcome = run("bogus", &Registry::builtin(), &OutputCtx::new(false)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Unknown {
                command: "bogus".to_owned(),
                available: vec![
                    "session-start".to_owned(),
                    "session-end".to_owned(),
                    "safe-cleanup".to_owned(),
                ],
            }
        );
    }
}
