/// Command dispatch: routes the first positional argument to its handler.
pub mod list;
pub mod show;

use std::io::Write;

use crate::cli::{OutputCtx, write_outcome};
use crate::registry::{DispatchError, Registry};

/// Dispatch an invocation and render its outcome to `out`.
///
/// `None` lists the registry; anything else is looked up and shown.
///
/// # Errors
///
/// Returns `DispatchError` if a protocol file exists but cannot be read, or
/// if writing to `out` fails.
pub fn dispatch<W: Write>(
    command: Option<&str>,
    registry: &Registry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), DispatchError> {
    let outcome = match command {
        None => list::run(registry),
        Some(name) => show::run(name, registry, ctx)?,
    };

    let _t_render = ctx.timer("render");
    write_outcome(&outcome, out)?;
    out.flush()?;
    Ok(())
}
