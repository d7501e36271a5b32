#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! run-command — print the protocol document for a session command.

mod cli;
mod commands;
mod registry;
mod types;

use cli::{Cli, OutputCtx, write_error};
use registry::Registry;

fn main() {
    let cli = Cli::parse_positional(std::env::args_os());

    let ctx = OutputCtx::from_env();
    let registry = Registry::builtin();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = commands::dispatch(cli.command.as_deref(), &registry, &ctx, &mut out) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
