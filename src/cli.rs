use std::ffi::OsString;

use clap::Parser;

/// Dispatcher flags are recognised by hand, so clap only collects the raw
/// tokens. Its own help and version flags are off to keep `-h` and friends
/// in the vector.
#[derive(Debug, Parser)]
#[command(
    name = "bex",
    about = "BeaconEX module dispatcher",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Dispatcher flag followed by module parameters
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments without letting clap eat a leading `--`.
    pub fn from_env() -> Self {
        Self::parse_from(escaped(std::env::args_os()))
    }
}

/// Put an escape right after the program name. clap consumes it and treats
/// everything after as plain values, so a user's own `--` survives.
fn escaped<I>(argv: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv = argv.into_iter();
    let program = argv.next().unwrap_or_else(|| OsString::from("bex"));
    std::iter::once(program)
        .chain(std::iter::once(OsString::from("--")))
        .chain(argv)
}
