/// CLI argument definitions via clap derive.
use std::ffi::OsString;
use std::iter;

use clap::Parser;

/// run-command — print the protocol document for a session command.
///
/// Every argument is positional: the first one is the command, hyphens and
/// all, and everything after it is ignored.
#[derive(Debug, Parser)]
#[command(
    name = "run-command",
    about = "Print the protocol document for a session command",
    version,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Command to show (e.g. session-start). Omit to list available commands.
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Any further arguments are accepted and ignored.
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Parse `argv`, exiting on error like [`Parser::parse_from`].
    ///
    /// An end-of-options marker is inserted after the program name so a bare
    /// `--` typed by the user is kept as a value instead of being consumed.
    pub fn parse_positional<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(with_escape(argv))
    }

    /// Fallible form of [`Cli::parse_positional`].
    ///
    /// # Errors
    ///
    /// Returns the clap error for arguments that are not valid UTF-8.
    #[cfg(test)]
    pub fn try_parse_positional<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(with_escape(argv))
    }
}

fn with_escape<I, T>(argv: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let program = argv.next().unwrap_or_else(|| OsString::from("run-command"));
    iter::once(program)
        .chain(iter::once(OsString::from("--")))
        .chain(argv)
}
